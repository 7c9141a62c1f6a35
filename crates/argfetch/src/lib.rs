#![doc = include_str!("../../../README.md")]

mod cursor;
mod error;
mod fetch;
mod scalar;
mod target;

pub use crate::{
    cursor::Cursor,
    error::{FetchError, FetchResult},
    fetch::{fetch, fetch_from},
    scalar::{OPTION_PREFIX, Scalar, ScalarKind},
    target::Target,
};

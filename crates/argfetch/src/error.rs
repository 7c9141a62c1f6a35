use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scalar::ScalarKind;

/// Result type alias for operations that can fail a fetch call.
pub type FetchResult<T> = Result<T, FetchError>;

/// Error returned when an identifier was found but its trailing tokens could
/// not satisfy the declared output slot.
///
/// An absent identifier is not an error; [`fetch`](crate::fetch) reports it as
/// `Ok(false)`. Both variants carry the identifier that was being fetched so a
/// host program can report which option went wrong.
///
/// On error no output slot has been written: the whole extent is converted
/// before any slot is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchError {
    /// Too few usable tokens followed the identifier for the slot's arity.
    ///
    /// A token shaped like another identifier counts as unusable here: values
    /// ran out before the next option began. A lone `bool` slot is exempt,
    /// absence of a value is how a flag is spelled.
    Arity {
        identifier: String,
        expected: usize,
        available: usize,
    },
    /// A token was present but could not be parsed as the declared type.
    Conversion {
        identifier: String,
        expected: ScalarKind,
        token: String,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity {
                identifier,
                expected,
                available,
            } => {
                write!(
                    f,
                    "not enough arguments for identifier `{identifier}`: expected {expected}, found {available}"
                )
            }
            Self::Conversion {
                identifier,
                expected,
                token,
            } => {
                write!(
                    f,
                    "invalid argument for identifier `{identifier}`: cannot parse {token:?} as {expected}"
                )
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl FetchError {
    /// The identifier whose fetch failed.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::Arity { identifier, .. } | Self::Conversion { identifier, .. } => identifier,
        }
    }
}

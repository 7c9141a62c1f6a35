//! Output slots a fetch call can write into.

use crate::{
    cursor::Cursor,
    error::FetchResult,
    scalar::Scalar,
};

mod sealed {
    pub trait Sealed {}
}

/// A caller-supplied output slot for one fetch call.
///
/// Implemented for the closed set of supported slot shapes:
///
/// - `&mut T` for any [`Scalar`] — one following token, except `bool` which
///   is a flag and accepts having no value at all,
/// - tuples of 2 to 4 mutable scalar references — one token per element,
///   converted left to right in declaration order,
/// - `&mut Vec<T>` — exactly `len` tokens when non-empty; when empty the vec
///   is auto-sized to the tokens up to the next identifier-shaped token.
///
/// The trait is sealed: the supported shapes are fixed and a slot type
/// outside this set is rejected at compile time.
pub trait Target: sealed::Sealed {
    /// Resolves this slot's extent under `cursor`, converts it, and commits
    /// the values.
    ///
    /// Commit is all-or-nothing: every token of the extent is converted into
    /// temporaries before the first slot write, so a failing call leaves the
    /// slot exactly as it was.
    fn fill<S: AsRef<str>>(self, cursor: &mut Cursor<'_, S>) -> FetchResult<()>;
}

impl<'t, T: Scalar> sealed::Sealed for &'t mut T {}

impl<'t, T: Scalar> Target for &'t mut T {
    fn fill<S: AsRef<str>>(self, cursor: &mut Cursor<'_, S>) -> FetchResult<()> {
        if cursor.is_exhausted() {
            // identifier was the last token: valid only for flag-like slots
            if let Some(value) = T::flag_value() {
                *self = value;
                return Ok(());
            }
        }
        *self = cursor.take::<T>(1)?;
        Ok(())
    }
}

impl<'t, T: Scalar> sealed::Sealed for &'t mut Vec<T> {}

impl<'t, T: Scalar> Target for &'t mut Vec<T> {
    fn fill<S: AsRef<str>>(self, cursor: &mut Cursor<'_, S>) -> FetchResult<()> {
        let expected = if self.is_empty() {
            cursor.scan_extent()
        } else {
            self.len()
        };
        let mut converted = Vec::with_capacity(expected);
        for _ in 0..expected {
            converted.push(cursor.take::<T>(expected)?);
        }
        *self = converted;
        Ok(())
    }
}

macro_rules! tuple_target {
    ($len:literal, $(($ty:ident, $slot:ident, $value:ident)),+) => {
        impl<'t, $($ty: Scalar),+> sealed::Sealed for ($(&'t mut $ty,)+) {}

        impl<'t, $($ty: Scalar),+> Target for ($(&'t mut $ty,)+) {
            fn fill<S: AsRef<str>>(self, cursor: &mut Cursor<'_, S>) -> FetchResult<()> {
                let ($($slot,)+) = self;
                $(let $value = cursor.take::<$ty>($len)?;)+
                $(*$slot = $value;)+
                Ok(())
            }
        }
    };
}

tuple_target!(2, (A, a, va), (B, b, vb));
tuple_target!(3, (A, a, va), (B, b, vb), (C, c, vc));
tuple_target!(4, (A, a, va), (B, b, vb), (C, c, vc), (D, d, vd));

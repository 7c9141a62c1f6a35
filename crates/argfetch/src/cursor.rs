//! Per-call conversion cursor over the tokens trailing an identifier.

use crate::{
    error::{FetchError, FetchResult},
    scalar::{Scalar, ScalarKind, is_identifier_shaped},
};

/// Tracks which token within a resolved extent is converted next.
///
/// A cursor is constructed fresh inside every [`fetch`](crate::fetch) call
/// and borrows the tokens after the matched identifier, so calls are
/// naturally reentrant and thread-safe: there is no state shared between
/// calls and nothing to lock.
///
/// Not constructible outside the crate; it only appears as the argument to
/// [`Target::fill`](crate::Target::fill).
#[derive(Debug)]
pub struct Cursor<'c, S> {
    /// The identifier that matched, kept for diagnostics.
    identifier: &'c str,
    /// All tokens after the matched identifier, up to the end of the sequence.
    tail: &'c [S],
    pos: usize,
}

impl<'c, S: AsRef<str>> Cursor<'c, S> {
    pub(crate) fn new(identifier: &'c str, tail: &'c [S]) -> Self {
        Self {
            identifier,
            tail,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'c str> {
        self.tail.get(self.pos).map(AsRef::as_ref)
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.peek().is_none()
    }

    /// Length of an auto-sized extent: tokens from the cursor up to the next
    /// identifier-shaped token, or to the end of the sequence.
    pub(crate) fn scan_extent(&self) -> usize {
        self.tail[self.pos..]
            .iter()
            .take_while(|token| !is_identifier_shaped(token.as_ref()))
            .count()
    }

    /// Converts the next token in the extent and advances past it.
    ///
    /// `expected` is the declared arity of the whole slot, reported in arity
    /// diagnostics. Running off the end of the sequence, or into a token
    /// shaped like the next identifier, is an arity error (the real values
    /// ran out); a token that is present but unparseable is a conversion
    /// error. Boolean slots are exempt from the identifier-shape check, an
    /// identifier there coerces to true.
    pub(crate) fn take<T: Scalar>(&mut self, expected: usize) -> FetchResult<T> {
        let Some(token) = self.peek() else {
            return Err(self.arity_error(expected));
        };
        if T::KIND != ScalarKind::Bool && is_identifier_shaped(token) {
            return Err(self.arity_error(expected));
        }
        let value = T::convert(token).ok_or_else(|| FetchError::Conversion {
            identifier: self.identifier.to_owned(),
            expected: T::KIND,
            token: token.to_owned(),
        })?;
        self.pos += 1;
        Ok(value)
    }

    fn arity_error(&self, expected: usize) -> FetchError {
        FetchError::Arity {
            identifier: self.identifier.to_owned(),
            expected,
            available: self.pos,
        }
    }
}

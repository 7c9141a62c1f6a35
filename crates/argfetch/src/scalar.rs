//! The closed set of scalar types a token can convert into.
//!
//! Conversion is dispatched statically through the sealed [`Scalar`] trait, so
//! an unsupported slot type is a compile error rather than a runtime
//! diagnostic. [`ScalarKind`] is the runtime name of each member, used only
//! for error reporting.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// The character marking a token as an identifier rather than a value.
///
/// Lookup itself does exact string equality and never checks the prefix; the
/// prefix matters when deciding where an extent of value tokens ends.
pub const OPTION_PREFIX: char = '-';

/// Whether a token is shaped like an identifier.
///
/// Purely a first-character heuristic, which is why negative numbers cannot
/// be passed as values.
pub(crate) fn is_identifier_shaped(token: &str) -> bool {
    token.starts_with(OPTION_PREFIX)
}

/// Permissive boolean coercion for flag values.
///
/// `"true"` (case-sensitive) reads as true. An identifier-shaped token also
/// reads as true: it means no real value followed the flag and the next
/// option was captured instead. Everything else reads as false; there is no
/// strict `"false"` check.
pub(crate) fn coerce_bool(token: &str) -> bool {
    token == "true" || is_identifier_shaped(token)
}

/// Identifies one member of the supported scalar set.
///
/// Uses strum derives for automatic `Display`, `FromStr`, and
/// `Into<&'static str>` implementations; the string form is the Rust type
/// name (e.g. `ScalarKind::I64` -> "i64") as it appears in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize)]
pub enum ScalarKind {
    #[strum(serialize = "bool")]
    Bool,
    #[strum(serialize = "i8")]
    I8,
    #[strum(serialize = "i16")]
    I16,
    #[strum(serialize = "i32")]
    I32,
    #[strum(serialize = "i64")]
    I64,
    #[strum(serialize = "u8")]
    U8,
    #[strum(serialize = "u16")]
    U16,
    #[strum(serialize = "u32")]
    U32,
    #[strum(serialize = "u64")]
    U64,
    #[strum(serialize = "f32")]
    F32,
    #[strum(serialize = "f64")]
    F64,
    #[strum(serialize = "char")]
    Char,
    #[strum(serialize = "String")]
    String,
}

mod sealed {
    pub trait Sealed {}
}

/// A type a single token can be converted into.
///
/// Sealed over exactly the supported primitive set: `bool`, the signed and
/// unsigned integers up to 64 bits, `f32`/`f64`, `char` and `String`.
pub trait Scalar: sealed::Sealed + Sized {
    /// Which member of the closed scalar set this is.
    const KIND: ScalarKind;

    /// Converts one token, or `None` if the text does not parse as `Self`.
    fn convert(token: &str) -> Option<Self>;

    /// The value a lone slot takes when the identifier is the last token.
    ///
    /// `None` means a value token is required and its absence is an arity
    /// error. Only `bool` overrides this: a flag with nothing after it is
    /// simply present, so it reads as true.
    fn flag_value() -> Option<Self> {
        None
    }
}

macro_rules! numeric_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Scalar for $ty {
            const KIND: ScalarKind = ScalarKind::$kind;

            fn convert(token: &str) -> Option<Self> {
                token.parse().ok()
            }
        }
    )*};
}

numeric_scalar!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);

impl sealed::Sealed for bool {}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn convert(token: &str) -> Option<Self> {
        Some(coerce_bool(token))
    }

    fn flag_value() -> Option<Self> {
        Some(true)
    }
}

impl sealed::Sealed for char {}

impl Scalar for char {
    const KIND: ScalarKind = ScalarKind::Char;

    fn convert(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl sealed::Sealed for String {}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn convert(token: &str) -> Option<Self> {
        // verbatim, no trimming or unescaping
        Some(token.to_owned())
    }
}

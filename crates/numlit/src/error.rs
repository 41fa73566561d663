use thiserror::Error;

use crate::number::NumberKind;

/// Returned when text is not a well-formed numeric literal, or when a
/// single-type constructor is asked for a value its type cannot hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: \"{text}\"")]
pub struct NumberFormatError {
    text: String,
    kind: ErrorKind,
}

impl NumberFormatError {
    pub(crate) fn new(text: &str, kind: ErrorKind) -> Self {
        Self {
            text: text.to_owned(),
            kind,
        }
    }

    /// The text that failed to parse.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// What was wrong with it.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// `true` when the text was well formed but out of range for the
    /// requested type.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, ErrorKind::Overflow(_))
    }
}

/// Failure classes of [`NumberFormatError`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ErrorKind {
    #[error("a blank string is not a valid number")]
    Blank,
    #[error("no digits")]
    Empty,
    #[error("invalid digit '{ch}' for radix {radix}")]
    InvalidDigit { ch: char, radix: u32 },
    #[error("sign character in wrong position")]
    MisplacedSign,
    #[error("more than one decimal point")]
    MultipleDecimalPoints,
    #[error("more than one exponent marker")]
    MultipleExponents,
    #[error("exponent marker without exponent digits")]
    DanglingExponent,
    #[error("decimal point inside exponent")]
    DecimalPointInExponent,
    #[error("missing digits")]
    MissingDigits,
    #[error("invalid type suffix '{0}'")]
    InvalidSuffix(char),
    #[error("long suffix on a fractional or exponent literal")]
    FractionalLong,
    #[error("value out of range for {0}")]
    Overflow(NumberKind),
}

impl ErrorKind {
    pub(crate) fn at(self, text: &str) -> NumberFormatError {
        NumberFormatError::new(text, self)
    }
}

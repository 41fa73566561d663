//! Floating and arbitrary-precision decimal constructors.

use core::str::FromStr;

use bigdecimal::BigDecimal;

use crate::{
    NumberKind,
    error::ErrorKind,
    literal::{Literal, Suffix},
};

/// Plain decimal or scientific notation with at most an `f`/`d` marker.
/// Overflow saturates to infinity and underflow to zero, never an error.
pub(crate) fn parse_decimal_float<F: FromStr>(text: &str) -> Result<F, ErrorKind> {
    let literal = Literal::decompose(text)?;
    match (literal.suffix, literal.suffix_char()) {
        (Suffix::Long, Some(ch)) => Err(ErrorKind::InvalidSuffix(ch)),
        _ => parse_normalized(&literal),
    }
}

/// Parses an already decomposed literal, suffix ignored.
pub(crate) fn parse_normalized<F: FromStr>(literal: &Literal<'_>) -> Result<F, ErrorKind> {
    literal
        .normalized()
        .parse()
        .map_err(|_| ErrorKind::MissingDigits)
}

/// Exact decimal value of `text`. Blank text and type suffixes are rejected.
pub(crate) fn parse_big_decimal(text: &str) -> Result<BigDecimal, ErrorKind> {
    if text.trim().is_empty() {
        return Err(ErrorKind::Blank);
    }
    let literal = Literal::decompose(text)?;
    if let Some(ch) = literal.suffix_char() {
        return Err(ErrorKind::InvalidSuffix(ch));
    }
    big_decimal_of(&literal)
}

pub(crate) fn big_decimal_of(literal: &Literal<'_>) -> Result<BigDecimal, ErrorKind> {
    // Only an exponent beyond the scale range gets past `decompose` and
    // still fails here.
    BigDecimal::from_str(&literal.normalized())
        .map_err(|_| ErrorKind::Overflow(NumberKind::BigDecimal))
}

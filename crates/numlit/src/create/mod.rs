//! Text to number: the single-type constructors and [`create_number`], which
//! picks the narrowest type that holds a literal exactly.
//!
//! Each constructor returns `Ok(None)` for `None` input, `Err` for malformed
//! or out-of-range text, and the parsed value otherwise.
//!
//! [`create_number`] walks a promotion ladder. An explicit type suffix pins
//! the result kind; without one, integral literals try `i32`, `i64`, then
//! `BigInt`, and fractional or exponent literals try `f32`, `f64`, then
//! `BigDecimal`. A narrower candidate is dropped when it overflows, when it
//! underflows to zero although the literal has a nonzero digit, or (for
//! `f32`/`f64`) when it does not reproduce the wider candidate exactly.

mod float;
mod radix;


use core::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use tracing::trace;

use crate::{
    Number, NumberFormatError, NumberKind,
    error::ErrorKind,
    literal::{Literal, Suffix, hex_digits},
};
pub(crate) use float::{parse_big_decimal, parse_decimal_float};
use float::{big_decimal_of, parse_normalized};
use radix::decode;

/// Parses `[sign] [0x | 0X | # | 0] digits` as an `i32`.
///
/// # Errors
///
/// Fails on malformed text or a value outside the `i32` range.
pub fn create_integer(text: Option<&str>) -> Result<Option<i32>, NumberFormatError> {
    construct(text, decode)
}

/// Parses `[sign] [0x | 0X | # | 0] digits` as an `i64`.
///
/// # Errors
///
/// Fails on malformed text or a value outside the `i64` range.
pub fn create_long(text: Option<&str>) -> Result<Option<i64>, NumberFormatError> {
    construct(text, decode)
}

/// Parses `[sign] [0x | 0X | # | 0] digits` as a [`BigInt`].
///
/// # Errors
///
/// Fails on malformed text.
pub fn create_big_integer(text: Option<&str>) -> Result<Option<BigInt>, NumberFormatError> {
    construct(text, decode)
}

/// Parses decimal or scientific notation as an `f32`, saturating to
/// infinity on overflow. A trailing `f`/`F`/`d`/`D` marker is allowed.
///
/// # Errors
///
/// Fails on malformed text.
pub fn create_float(text: Option<&str>) -> Result<Option<f32>, NumberFormatError> {
    construct(text, parse_decimal_float)
}

/// Parses decimal or scientific notation as an `f64`, saturating to
/// infinity on overflow. A trailing `f`/`F`/`d`/`D` marker is allowed.
///
/// # Errors
///
/// Fails on malformed text.
pub fn create_double(text: Option<&str>) -> Result<Option<f64>, NumberFormatError> {
    construct(text, parse_decimal_float)
}

/// Parses decimal or scientific notation exactly.
///
/// # Errors
///
/// Fails on blank or malformed text, and on type suffixes.
pub fn create_big_decimal(text: Option<&str>) -> Result<Option<BigDecimal>, NumberFormatError> {
    construct(text, parse_big_decimal)
}

fn construct<T>(
    text: Option<&str>,
    parse: impl FnOnce(&str) -> Result<T, ErrorKind>,
) -> Result<Option<T>, NumberFormatError> {
    text.map(|t| parse(t).map_err(|kind| kind.at(t))).transpose()
}

/// Parses a numeric literal into the narrowest [`Number`] that holds it.
///
/// ```rust
/// use numlit::{Number, create_number};
///
/// assert_eq!(create_number(Some("3")), Ok(Some(Number::Int(3))));
/// assert_eq!(create_number(Some("3000000000")), Ok(Some(Number::Long(3_000_000_000))));
/// assert_eq!(create_number(Some("0x1A")), Ok(Some(Number::Int(26))));
/// assert_eq!(create_number(Some("1.5")), Ok(Some(Number::Float(1.5))));
/// assert_eq!(create_number(Some("1.1")), Ok(Some(Number::Double(1.1))));
/// assert_eq!(create_number(None), Ok(None));
/// assert!(create_number(Some("123.4L")).is_err());
/// ```
///
/// # Errors
///
/// Fails on blank text and on anything outside the literal grammar. Range
/// overflow of a narrower type is never an error; it promotes.
pub fn create_number(text: Option<&str>) -> Result<Option<Number>, NumberFormatError> {
    text.map(create_number_str).transpose()
}

pub(crate) fn create_number_str(text: &str) -> Result<Number, NumberFormatError> {
    if text.trim().is_empty() {
        return Err(ErrorKind::Blank.at(text));
    }
    let number = match hex_digits(text) {
        Some(digits) => create_hex(text, digits),
        None => Literal::decompose(text).and_then(|literal| create_decimal(text, &literal)),
    };
    #[cfg(any(test, feature = "fuzzing"))]
    assert!(
        !matches!(number, Ok(Number::Float(v)) if !v.is_finite())
            && !matches!(number, Ok(Number::Double(v)) if !v.is_finite()),
        "Internal error: non-finite floating result for {text:?}"
    );
    number.map_err(|kind| kind.at(text))
}

/// Hex literals are sized by digit count and never become floating types.
fn create_hex(text: &str, digits: &str) -> Result<Number, ErrorKind> {
    let significant = digits.trim_start_matches('0');
    let first = significant.chars().next().unwrap_or('0');
    let count = significant.chars().count();
    let exceeds = |width: usize| count > width || (count == width && first > '7');

    if exceeds(16) {
        decode(text).map(Number::BigInteger)
    } else if exceeds(8) {
        decode(text).map(Number::Long)
    } else {
        decode(text).map(Number::Int)
    }
}

fn create_decimal(text: &str, literal: &Literal<'_>) -> Result<Number, ErrorKind> {
    match literal.suffix {
        Suffix::Long if literal.is_integral() => create_long_or_big(literal.numeric),
        Suffix::Long => Err(ErrorKind::FractionalLong),
        Suffix::Float => {
            let value = parse_normalized::<f32>(literal)?;
            if accepts(value.is_finite(), value == 0.0, literal) {
                return Ok(Number::Float(value));
            }
            trace!(text, value, "f32 candidate rejected, widening");
            create_double_or_decimal(text, literal)
        }
        Suffix::Double => create_double_or_decimal(text, literal),
        Suffix::None if literal.is_integral() => create_integral(text),
        Suffix::None => create_floating(text, literal),
    }
}

/// `i32`, then `i64`, then `BigInt`. Only overflow moves up the ladder.
fn create_integral(text: &str) -> Result<Number, ErrorKind> {
    match decode::<i32>(text) {
        Err(ErrorKind::Overflow(_)) => {
            trace!(text, from = %NumberKind::Int, "overflow, promoting");
            create_long_or_big(text)
        }
        result => result.map(Number::Int),
    }
}

fn create_long_or_big(text: &str) -> Result<Number, ErrorKind> {
    match decode::<i64>(text) {
        Err(ErrorKind::Overflow(_)) => {
            trace!(text, from = %NumberKind::Long, "overflow, promoting");
            decode(text).map(Number::BigInteger)
        }
        result => result.map(Number::Long),
    }
}

fn create_double_or_decimal(text: &str, literal: &Literal<'_>) -> Result<Number, ErrorKind> {
    let value = parse_normalized::<f64>(literal)?;
    if accepts(value.is_finite(), value == 0.0, literal) {
        return Ok(Number::Double(value));
    }
    trace!(text, value, "f64 candidate rejected, using BigDecimal");
    big_decimal_of(literal).map(Number::BigDecimal)
}

/// No suffix, with a fraction or exponent.
fn create_floating(text: &str, literal: &Literal<'_>) -> Result<Number, ErrorKind> {
    let float = parse_normalized::<f32>(literal)?;
    let double = parse_normalized::<f64>(literal)?;

    if accepts(float.is_finite(), float == 0.0, literal)
        && f64::from(float).to_string() == double.to_string()
    {
        return Ok(Number::Float(float));
    }
    trace!(text, float, double, "f32 candidate rejected");

    let exact = big_decimal_of(literal)?;
    if accepts(double.is_finite(), double == 0.0, literal) {
        if BigDecimal::from_str(&double.to_string()).is_ok_and(|d| d == exact) {
            return Ok(Number::Double(double));
        }
        trace!(text, double, "f64 loses precision");
    }
    Ok(Number::BigDecimal(exact))
}

/// A floating candidate is usable when finite and not a zero produced by
/// underflowing nonzero digits.
fn accepts(finite: bool, zero: bool, literal: &Literal<'_>) -> bool {
    finite && !(zero && !literal.all_zeros())
}

//! Lenient fixed-width conversions: plain decimal text in, the parsed value
//! or a caller-supplied default out. None of these accept radix prefixes or
//! type suffixes; use [`create_number`](crate::create_number) for those.

use core::str::FromStr;

use crate::create::parse_decimal_float;

fn parse_or<T: FromStr>(text: Option<&str>, default: T) -> T {
    text.and_then(|t| t.parse().ok()).unwrap_or(default)
}

/// `text` as an `i32`, or `default` when absent, malformed or out of range.
///
/// ```rust
/// use numlit::to_int;
///
/// assert_eq!(to_int(Some("-12"), 0), -12);
/// assert_eq!(to_int(Some("0x1A"), 7), 7);
/// assert_eq!(to_int(None, 7), 7);
/// ```
#[must_use]
pub fn to_int(text: Option<&str>, default: i32) -> i32 {
    parse_or(text, default)
}

/// `text` as an `i64`, or `default`.
#[must_use]
pub fn to_long(text: Option<&str>, default: i64) -> i64 {
    parse_or(text, default)
}

/// `text` as an `i16`, or `default`.
#[must_use]
pub fn to_short(text: Option<&str>, default: i16) -> i16 {
    parse_or(text, default)
}

/// `text` as an `i8`, or `default`.
#[must_use]
pub fn to_byte(text: Option<&str>, default: i8) -> i8 {
    parse_or(text, default)
}

/// `text` as an `f32`, or `default`. Decimal and scientific notation only;
/// `inf` and `NaN` spellings are not numbers here.
#[must_use]
pub fn to_float(text: Option<&str>, default: f32) -> f32 {
    text.and_then(|t| parse_decimal_float(t).ok()).unwrap_or(default)
}

/// `text` as an `f64`, or `default`.
#[must_use]
pub fn to_double(text: Option<&str>, default: f64) -> f64 {
    text.and_then(|t| parse_decimal_float(t).ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::is_parsable;

    #[rstest]
    #[case(Some("12"), 12)]
    #[case(Some("+12"), 12)]
    #[case(Some("-12"), -12)]
    #[case(Some("2147483648"), 5)]
    #[case(Some("1.5"), 5)]
    #[case(Some(""), 5)]
    #[case(Some(" 1"), 5)]
    #[case(None, 5)]
    fn int_with_default(#[case] text: Option<&str>, #[case] expected: i32) {
        assert_eq!(to_int(text, 5), expected);
    }

    #[test]
    fn narrow_widths() {
        assert_eq!(to_long(Some("3000000000"), 0), 3_000_000_000);
        assert_eq!(to_short(Some("32767"), 0), i16::MAX);
        assert_eq!(to_short(Some("32768"), 1), 1);
        assert_eq!(to_byte(Some("-128"), 0), i8::MIN);
        assert_eq!(to_byte(Some("128"), 1), 1);
    }

    #[rstest]
    #[case(Some("1.5"), 1.5)]
    #[case(Some("-2e2"), -200.0)]
    #[case(Some("1.5f"), 1.5)]
    #[case(Some("inf"), 9.0)]
    #[case(Some("NaN"), 9.0)]
    #[case(Some("1.2.3"), 9.0)]
    #[case(None, 9.0)]
    fn double_with_default(#[case] text: Option<&str>, #[case] expected: f64) {
        assert_eq!(to_double(text, 9.0), expected);
    }

    #[test]
    fn float_with_default() {
        assert_eq!(to_float(Some("0.25"), 0.0), 0.25);
        assert_eq!(to_float(Some("x"), 1.0), 1.0);
    }

    #[test]
    fn parsable_text_converts() {
        for text in ["0", "-7", "123", "-0.5", ".25", "10.0"] {
            assert!(is_parsable(Some(text)));
            assert!(to_double(Some(text), f64::NAN).is_finite(), "{text:?}");
        }
    }
}

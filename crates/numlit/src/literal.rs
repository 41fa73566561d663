//! Lexical structure of a numeric literal.
//!
//! A literal is an optional sign, an optional radix prefix (`0x`, `0X`, `#`
//! for hexadecimal, a lone leading `0` for octal), a mantissa with optional
//! fraction and exponent, and an optional one-letter type suffix:
//!
//! ```text
//! literal  = [sign] ( hex | decimal [suffix] )
//! hex      = ("0x" | "0X" | "#") hexdigit+
//! decimal  = digit* ["." digit*] [("e" | "E") [sign] digit+]
//! suffix   = "l" | "L" | "f" | "F" | "d" | "D"
//! ```
//!
//! Octal is not a separate production: it is a decimal-looking integer with a
//! leading zero, and only the integral constructors interpret it.

use crate::error::ErrorKind;

/// Numeral base implied by a literal's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Radix {
    /// No prefix.
    Decimal = 10,
    /// A leading `0` followed by more digits.
    Octal = 8,
    /// `0x`, `0X` or `#`.
    Hexadecimal = 16,
}

impl Radix {
    /// The base as a number, for `from_str_radix`.
    #[must_use]
    pub fn value(self) -> u32 {
        self as u32
    }

    /// Splits the radix prefix from an unsigned integral literal.
    ///
    /// `0x`, `0X` and `#` select hexadecimal; a `0` followed by at least one
    /// more character selects octal; anything else is decimal. The returned
    /// digits are not validated.
    #[must_use]
    pub fn detect(unsigned: &str) -> (Self, &str) {
        if let Some(digits) = strip_hex_prefix(unsigned) {
            (Self::Hexadecimal, digits)
        } else if unsigned.len() > 1 && unsigned.starts_with('0') {
            (Self::Octal, &unsigned[1..])
        } else {
            (Self::Decimal, unsigned)
        }
    }
}

/// Trailing type marker of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suffix {
    /// No marker; the value decides the type.
    #[default]
    None,
    /// `l` or `L`
    Long,
    /// `f` or `F`
    Float,
    /// `d` or `D`
    Double,
}

impl Suffix {
    /// Reads a suffix character in either case.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'l' | 'L' => Some(Self::Long),
            'f' | 'F' => Some(Self::Float),
            'd' | 'D' => Some(Self::Double),
            _ => None,
        }
    }
}

/// Splits one leading `+` or `-`. Returns `true` for a negative sign.
pub(crate) fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

fn strip_hex_prefix(unsigned: &str) -> Option<&str> {
    unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .or_else(|| unsigned.strip_prefix('#'))
}

/// Digits following a hex prefix, if `text` (after an optional sign) has one.
pub(crate) fn hex_digits(text: &str) -> Option<&str> {
    strip_hex_prefix(split_sign(text).1)
}

/// A decimal literal split into its parts. All slices borrow from the
/// original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    /// The text without its type suffix, sign included.
    pub numeric: &'a str,
    /// A leading `-` was present.
    pub negative: bool,
    /// Digits before the decimal point or exponent marker.
    pub mantissa: &'a str,
    /// Digits after the decimal point, `Some("")` for a trailing point.
    pub fraction: Option<&'a str>,
    /// Exponent digits with their optional sign.
    pub exponent: Option<&'a str>,
    /// The type suffix, [`Suffix::None`] if absent.
    pub suffix: Suffix,
    suffix_char: Option<char>,
}

impl<'a> Literal<'a> {
    /// Splits `text` into sign, mantissa, fraction, exponent and suffix,
    /// rejecting anything outside the decimal grammar.
    ///
    /// Hex literals are not decimal literals and fail here. Callers route
    /// them through [`Radix::detect`] first.
    ///
    /// # Errors
    ///
    /// Returns the [`ErrorKind`] describing the first structural defect.
    pub fn decompose(text: &'a str) -> Result<Self, ErrorKind> {
        let Some(last) = text.chars().next_back() else {
            return Err(ErrorKind::Empty);
        };

        let (numeric, suffix, suffix_char) = if last.is_ascii_digit() || last == '.' {
            (text, Suffix::None, None)
        } else if matches!(last, 'e' | 'E') {
            return Err(ErrorKind::DanglingExponent);
        } else {
            let suffix = Suffix::from_char(last).ok_or(ErrorKind::InvalidSuffix(last))?;
            (&text[..text.len() - last.len_utf8()], suffix, Some(last))
        };

        let (negative, unsigned) = split_sign(numeric);

        let mut points = unsigned.match_indices('.').map(|(i, _)| i);
        let point = points.next();
        if points.next().is_some() {
            return Err(ErrorKind::MultipleDecimalPoints);
        }
        let mut markers = unsigned.match_indices(['e', 'E']).map(|(i, _)| i);
        let marker = markers.next();
        if markers.next().is_some() {
            return Err(ErrorKind::MultipleExponents);
        }

        let (mantissa, fraction, exponent) = match (point, marker) {
            (Some(p), Some(e)) if e < p => return Err(ErrorKind::DecimalPointInExponent),
            (Some(p), Some(e)) => (
                &unsigned[..p],
                Some(&unsigned[p + 1..e]),
                Some(&unsigned[e + 1..]),
            ),
            (Some(p), None) => (&unsigned[..p], Some(&unsigned[p + 1..]), None),
            (None, Some(e)) => (&unsigned[..e], None, Some(&unsigned[e + 1..])),
            (None, None) => (unsigned, None, None),
        };

        check_digits(mantissa)?;
        check_digits(fraction.unwrap_or_default())?;
        if mantissa.is_empty() && fraction.is_none_or(str::is_empty) {
            return Err(ErrorKind::MissingDigits);
        }
        if let Some(exponent) = exponent {
            let digits = split_sign(exponent).1;
            if digits.is_empty() {
                return Err(ErrorKind::DanglingExponent);
            }
            check_digits(digits)?;
        }

        Ok(Self {
            numeric,
            negative,
            mantissa,
            fraction,
            exponent,
            suffix,
            suffix_char,
        })
    }

    /// The suffix character exactly as written.
    #[must_use]
    pub fn suffix_char(&self) -> Option<char> {
        self.suffix_char
    }

    /// No fraction and no exponent.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.fraction.is_none() && self.exponent.is_none()
    }

    /// `true` when every written digit is `0`, so a zero result is genuine
    /// rather than an underflow.
    #[must_use]
    pub fn all_zeros(&self) -> bool {
        let zeros = |s: &str| s.chars().all(|c| c == '0');
        zeros(self.mantissa)
            && self.fraction.is_none_or(zeros)
            && self.exponent.is_none_or(|e| zeros(split_sign(e).1))
    }

    /// The numeric part rewritten as `[-]int[.frac][e[sign]exp]` with no
    /// empty segments, for consumers that reject `1.` or `.5`.
    pub(crate) fn normalized(&self) -> String {
        let mut out = String::with_capacity(self.numeric.len() + 1);
        if self.negative {
            out.push('-');
        }
        out.push_str(if self.mantissa.is_empty() { "0" } else { self.mantissa });
        if let Some(fraction) = self.fraction.filter(|f| !f.is_empty()) {
            out.push('.');
            out.push_str(fraction);
        }
        if let Some(exponent) = self.exponent {
            out.push('e');
            out.push_str(exponent);
        }
        out
    }
}

fn check_digits(digits: &str) -> Result<(), ErrorKind> {
    match digits.chars().find(|c| !c.is_ascii_digit()) {
        None => Ok(()),
        Some('+' | '-') => Err(ErrorKind::MisplacedSign),
        Some(ch) => Err(ErrorKind::InvalidDigit { ch, radix: 10 }),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0x1A", Radix::Hexadecimal, "1A")]
    #[case("0X1a", Radix::Hexadecimal, "1a")]
    #[case("#ff", Radix::Hexadecimal, "ff")]
    #[case("017", Radix::Octal, "17")]
    #[case("00", Radix::Octal, "0")]
    #[case("0", Radix::Decimal, "0")]
    #[case("123", Radix::Decimal, "123")]
    fn detects_radix(#[case] unsigned: &str, #[case] radix: Radix, #[case] digits: &str) {
        assert_eq!(Radix::detect(unsigned), (radix, digits));
    }

    #[test]
    fn hex_digits_allow_sign() {
        assert_eq!(hex_digits("-0x10"), Some("10"));
        assert_eq!(hex_digits("+#10"), Some("10"));
        assert_eq!(hex_digits("-10"), None);
    }

    #[test]
    fn decomposes_full_literal() {
        let lit = Literal::decompose("-12.50e+3d").unwrap();
        assert!(lit.negative);
        assert_eq!(lit.numeric, "-12.50e+3");
        assert_eq!(lit.mantissa, "12");
        assert_eq!(lit.fraction, Some("50"));
        assert_eq!(lit.exponent, Some("+3"));
        assert_eq!(lit.suffix, Suffix::Double);
        assert_eq!(lit.suffix_char(), Some('d'));
        assert_eq!(lit.normalized(), "-12.50e+3");
    }

    #[test]
    fn trailing_and_leading_points() {
        let lit = Literal::decompose("1.").unwrap();
        assert_eq!(lit.fraction, Some(""));
        assert_eq!(lit.normalized(), "1");

        let lit = Literal::decompose(".5").unwrap();
        assert_eq!(lit.mantissa, "");
        assert_eq!(lit.normalized(), "0.5");
    }

    #[rstest]
    #[case("", ErrorKind::Empty)]
    #[case(".", ErrorKind::MissingDigits)]
    #[case("-", ErrorKind::InvalidSuffix('-'))]
    #[case("L", ErrorKind::MissingDigits)]
    #[case("1e", ErrorKind::DanglingExponent)]
    #[case("1e+", ErrorKind::InvalidSuffix('+'))]
    #[case("1e+f", ErrorKind::DanglingExponent)]
    #[case("1.2.3", ErrorKind::MultipleDecimalPoints)]
    #[case("1e2E3", ErrorKind::MultipleExponents)]
    #[case("1e2.5", ErrorKind::DecimalPointInExponent)]
    #[case("1x", ErrorKind::InvalidSuffix('x'))]
    #[case("1-2", ErrorKind::MisplacedSign)]
    #[case("--1", ErrorKind::MisplacedSign)]
    #[case("1a2", ErrorKind::InvalidDigit { ch: 'a', radix: 10 })]
    fn rejects_malformed(#[case] text: &str, #[case] kind: ErrorKind) {
        assert_eq!(Literal::decompose(text), Err(kind));
    }

    #[rstest]
    #[case("0", true)]
    #[case("000.000", true)]
    #[case("0e0", true)]
    #[case("0e-00", true)]
    #[case("0e5", false)]
    #[case("0.001", false)]
    #[case("1e-400", false)]
    fn all_zeros_looks_at_every_digit(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(Literal::decompose(text).unwrap().all_zeros(), expected);
    }
}

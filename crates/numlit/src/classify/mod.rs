//! Classifiers: decide whether text is a numeric literal without building a
//! value.
//!
//! [`is_creatable`] accepts the full literal grammar (hex and octal
//! prefixes, fractions, exponents and type suffixes) and agrees with
//! [`create_number`](crate::create_number): anything it accepts parses.
//! [`is_parsable`] accepts only plain signed decimals, the subset the
//! fixed-width `to_*` conversions understand.
//!
//! The decimal scan is an explicit state machine. [`ScanState`] holds the
//! four flags, [`ScanState::step`] is the transition for every character
//! but the last, and [`ScanState::accept_last`] decides the final
//! character, which may be a type suffix.

use crate::literal::split_sign;


/// State of the decimal-literal scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// A `.` has been consumed.
    pub has_decimal_point: bool,
    /// An `e`/`E` has been consumed.
    pub has_exponent: bool,
    /// Set right after an exponent marker; a sign may follow.
    pub allow_sign: bool,
    /// A digit has been seen since the start, or since the exponent sign.
    pub found_digit: bool,
}

impl ScanState {
    /// Consumes one character. `None` rejects the literal.
    #[must_use]
    pub fn step(self, ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Self {
                found_digit: true,
                allow_sign: false,
                ..self
            }),
            '.' if self.has_decimal_point || self.has_exponent => None,
            '.' => Some(Self {
                has_decimal_point: true,
                ..self
            }),
            'e' | 'E' if self.has_exponent || !self.found_digit => None,
            'e' | 'E' => Some(Self {
                has_exponent: true,
                allow_sign: true,
                ..self
            }),
            '+' | '-' if self.allow_sign => Some(Self {
                allow_sign: false,
                found_digit: false,
                ..self
            }),
            _ => None,
        }
    }

    /// Decides the literal given its final character.
    #[must_use]
    pub fn accept_last(self, ch: char) -> bool {
        match ch {
            '0'..='9' => true,
            // single trailing point after a non-exponent mantissa
            '.' => !self.has_decimal_point && !self.has_exponent && self.found_digit,
            'f' | 'F' | 'd' | 'D' => !self.allow_sign && self.found_digit,
            'l' | 'L' => self.found_digit && !self.has_exponent && !self.has_decimal_point,
            _ => false,
        }
    }

    /// Result when the text ends before any final character is examined.
    #[must_use]
    pub fn accept_end(self) -> bool {
        !self.allow_sign && self.found_digit
    }
}

/// Checks whether `text` is a valid numeric literal: decimal with optional
/// fraction, exponent and `l`/`f`/`d` suffix, `0x` hex, or `0`-prefixed
/// octal. `None`, empty and blank text are rejected.
///
/// ```rust
/// use numlit::is_creatable;
///
/// assert!(is_creatable(Some("0x1A")));
/// assert!(is_creatable(Some("-1.5e-3f")));
/// assert!(!is_creatable(Some("1e")));
/// assert!(!is_creatable(None));
/// ```
#[must_use]
pub fn is_creatable(text: Option<&str>) -> bool {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return false;
    };
    let unsigned = split_sign(text).1;

    if let Some(radix_prefixed) = check_prefixed_integer(unsigned, text.contains('.')) {
        return radix_prefixed;
    }

    let mut chars = unsigned.chars();
    let Some(last) = chars.next_back() else {
        return ScanState::default().accept_end();
    };
    chars
        .try_fold(ScanState::default(), ScanState::step)
        .is_some_and(|state| state.accept_last(last))
}

/// Hex (`0x`) and octal (leading `0` then a digit) literals have their own
/// digit sets. `None` means the text is not radix-prefixed.
fn check_prefixed_integer(unsigned: &str, has_decimal_point: bool) -> Option<bool> {
    let mut chars = unsigned.chars();
    if has_decimal_point || chars.next() != Some('0') {
        return None;
    }
    match chars.next()? {
        'x' | 'X' => {
            let digits = chars.as_str();
            Some(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit()))
        }
        c if c.is_ascii_digit() => Some(unsigned.chars().all(|c| matches!(c, '0'..='7'))),
        _ => None,
    }
}

/// Checks whether `text` is a plain decimal: an optional leading `-`,
/// digits, and at most one `.` that is not the last character.
///
/// ```rust
/// use numlit::is_parsable;
///
/// assert!(is_parsable(Some("-1.5")));
/// assert!(is_parsable(Some(".5")));
/// assert!(!is_parsable(Some("1.")));
/// assert!(!is_parsable(Some("1e5")));
/// ```
#[must_use]
pub fn is_parsable(text: Option<&str>) -> bool {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return false;
    };
    if text.ends_with('.') {
        return false;
    }
    let body = text.strip_prefix('-').unwrap_or(text);
    if body.is_empty() {
        return false;
    }
    let mut points = 0;
    body.chars().all(|c| match c {
        '.' => {
            points += 1;
            points == 1
        }
        c => c.is_ascii_digit(),
    })
}

/// `true` when `text` is non-empty and made only of ASCII digits.
#[must_use]
pub fn is_digits(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()))
}

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;

use crate::{NumberFormatError, create::parse_big_decimal};

/// How [`to_scaled_big_decimal_opts`] rescales a value.
///
/// # Examples
///
/// ```rust
/// use bigdecimal::RoundingMode;
/// use numlit::ScaleOptions;
///
/// let options = ScaleOptions {
///     scale: 4,
///     ..Default::default()
/// };
/// assert_eq!(options.rounding, RoundingMode::HalfEven);
/// ```
///
/// # Default
///
/// Two digits after the point, rounding half to even.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleOptions {
    /// Number of digits after the decimal point. May be negative, which
    /// rounds to a power of ten.
    ///
    /// # Default
    ///
    /// `2`
    pub scale: i64,

    /// Rounding applied when digits are dropped.
    ///
    /// # Default
    ///
    /// [`RoundingMode::HalfEven`]
    pub rounding: RoundingMode,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            scale: 2,
            rounding: RoundingMode::HalfEven,
        }
    }
}

/// Rescales `value` to two decimal places, rounding half to even. `None`
/// yields zero at that scale.
#[must_use]
pub fn to_scaled_big_decimal(value: Option<&BigDecimal>) -> BigDecimal {
    to_scaled_big_decimal_opts(value, ScaleOptions::default())
}

/// Rescales `value` to `scale` decimal places. A missing rounding mode means
/// half to even.
///
/// ```rust
/// use std::str::FromStr;
///
/// use bigdecimal::{BigDecimal, RoundingMode};
/// use numlit::to_scaled_big_decimal_with;
///
/// let value = BigDecimal::from_str("2.345").unwrap();
/// let scaled = to_scaled_big_decimal_with(Some(&value), 1, Some(RoundingMode::Down));
/// assert_eq!(scaled, BigDecimal::from_str("2.3").unwrap());
/// ```
#[must_use]
pub fn to_scaled_big_decimal_with(
    value: Option<&BigDecimal>,
    scale: i64,
    rounding: Option<RoundingMode>,
) -> BigDecimal {
    to_scaled_big_decimal_opts(
        value,
        ScaleOptions {
            scale,
            rounding: rounding.unwrap_or(ScaleOptions::default().rounding),
        },
    )
}

/// Rescales `value` as `options` says; `None` yields zero at that scale.
#[must_use]
pub fn to_scaled_big_decimal_opts(value: Option<&BigDecimal>, options: ScaleOptions) -> BigDecimal {
    match value {
        Some(value) => value.with_scale_round(options.scale, options.rounding),
        None => BigDecimal::zero().with_scale(options.scale),
    }
}

/// Parses `text` exactly, then rescales it.
///
/// # Errors
///
/// Fails when `text` is blank or not a decimal literal.
pub fn to_scaled_big_decimal_str(
    text: Option<&str>,
    options: ScaleOptions,
) -> Result<BigDecimal, NumberFormatError> {
    let value = text
        .map(|t| parse_big_decimal(t).map_err(|kind| kind.at(t)))
        .transpose()?;
    Ok(to_scaled_big_decimal_opts(value.as_ref(), options))
}

use core::{fmt, str::FromStr};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{NumberFormatError, create::create_number_str};

/// A parsed numeric literal, held in the narrowest type that represents it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    /// Fits 32 bits.
    Int(i32),
    /// Fits 64 bits but not 32.
    Long(i64),
    /// Wider than 64 bits.
    BigInteger(BigInt),
    /// Exact in single precision.
    Float(f32),
    /// Exact in double precision.
    Double(f64),
    /// Anything `f64` cannot hold exactly.
    BigDecimal(BigDecimal),
}

/// The type tag of a [`Number`], also used to name the target of an
/// overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum NumberKind {
    Int,
    Long,
    BigInteger,
    Float,
    Double,
    BigDecimal,
}

impl NumberKind {
    /// Integral kinds never carry a fraction or exponent.
    #[must_use]
    pub fn is_integral(self) -> bool {
        matches!(self, Self::Int | Self::Long | Self::BigInteger)
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "i32",
            Self::Long => "i64",
            Self::BigInteger => "BigInt",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::BigDecimal => "BigDecimal",
        })
    }
}

impl Number {
    /// The type this value was parsed into.
    #[must_use]
    pub fn kind(&self) -> NumberKind {
        match self {
            Self::Int(_) => NumberKind::Int,
            Self::Long(_) => NumberKind::Long,
            Self::BigInteger(_) => NumberKind::BigInteger,
            Self::Float(_) => NumberKind::Float,
            Self::Double(_) => NumberKind::Double,
            Self::BigDecimal(_) => NumberKind::BigDecimal,
        }
    }

    /// Exact decimal value of this number, for comparing across kinds.
    ///
    /// Floating values convert through their shortest round-trip rendering,
    /// so `Float(1.5)` and `Int(…)`/`Double(…)` of the same written value
    /// compare equal. Returns `None` for non-finite floats.
    #[must_use]
    pub fn to_big_decimal(&self) -> Option<BigDecimal> {
        match self {
            Self::Int(v) => Some(BigDecimal::from(*v)),
            Self::Long(v) => Some(BigDecimal::from(*v)),
            Self::BigInteger(v) => Some(BigDecimal::new(v.clone(), 0)),
            Self::Float(v) if v.is_finite() => BigDecimal::from_str(&v.to_string()).ok(),
            Self::Double(v) if v.is_finite() => BigDecimal::from_str(&v.to_string()).ok(),
            Self::Float(_) | Self::Double(_) => None,
            Self::BigDecimal(v) => Some(v.clone()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => v.fmt(f),
            Self::Long(v) => v.fmt(f),
            Self::BigInteger(v) => v.fmt(f),
            Self::Float(v) => v.fmt(f),
            Self::Double(v) => v.fmt(f),
            Self::BigDecimal(v) => v.fmt(f),
        }
    }
}

impl FromStr for Number {
    type Err = NumberFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        create_number_str(s)
    }
}

impl ToPrimitive for Number {
    fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(i64::from(*v)),
            Self::Long(v) => Some(*v),
            Self::BigInteger(v) => v.to_i64(),
            Self::Float(v) => v.to_i64(),
            Self::Double(v) => v.to_i64(),
            Self::BigDecimal(v) => v.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Int(v) => v.to_u64(),
            Self::Long(v) => v.to_u64(),
            Self::BigInteger(v) => v.to_u64(),
            Self::Float(v) => v.to_u64(),
            Self::Double(v) => v.to_u64(),
            Self::BigDecimal(v) => v.to_u64(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(f64::from(*v)),
            Self::Long(v) => v.to_f64(),
            Self::BigInteger(v) => v.to_f64(),
            Self::Float(v) => Some(f64::from(*v)),
            Self::Double(v) => Some(*v),
            Self::BigDecimal(v) => v.to_f64(),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    i32 => Int,
    i64 => Long,
    BigInt => BigInteger,
    f32 => Float,
    f64 => Double,
    BigDecimal => BigDecimal,
}

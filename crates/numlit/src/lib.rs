//! Classification and narrowest-type parsing of numeric literals.
//!
//! The literal grammar covers signed decimals with optional fraction and
//! exponent, `0x`/`#` hexadecimal and `0`-prefixed octal integers, and a
//! trailing `l`/`f`/`d` type suffix (either case). [`create_number`] parses
//! a literal into the narrowest [`Number`] that holds it exactly;
//! [`is_creatable`] answers whether it would succeed without building a
//! value.
//!
//! ```rust
//! use numlit::{Number, NumberKind, create_number, is_creatable};
//!
//! let n: Number = "99999999999999999999999999".parse().unwrap();
//! assert_eq!(n.kind(), NumberKind::BigInteger);
//!
//! assert!(is_creatable(Some("1.5e-3f")));
//! assert_eq!(create_number(Some("1.5e-3f")).unwrap().unwrap().kind(), NumberKind::Float);
//! ```
//!
//! Every entry point is a pure function and takes `Option<&str>`: `None`
//! makes classifiers answer `false` and constructors answer `Ok(None)`.

mod classify;
mod convert;
mod create;
mod error;
mod literal;
mod number;
mod scale;

#[cfg(test)]
mod tests;

pub use bigdecimal::{BigDecimal, RoundingMode};
pub use classify::{ScanState, is_creatable, is_digits, is_parsable};
pub use convert::{to_byte, to_double, to_float, to_int, to_long, to_short};
pub use create::{
    create_big_decimal, create_big_integer, create_double, create_float, create_integer,
    create_long, create_number,
};
pub use error::{ErrorKind, NumberFormatError};
pub use literal::{Literal, Radix, Suffix};
pub use num_bigint::BigInt;
pub use number::{Number, NumberKind};
pub use scale::{
    ScaleOptions, to_scaled_big_decimal, to_scaled_big_decimal_opts, to_scaled_big_decimal_str,
    to_scaled_big_decimal_with,
};

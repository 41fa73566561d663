//! Integral constructors: sign, radix prefix, then digits in that radix.

use std::borrow::Cow;

use num_bigint::BigInt;
use num_traits::Num;

use crate::{
    NumberKind,
    error::ErrorKind,
    literal::{Radix, split_sign},
};

/// Target of an integral parse. Digits handed to `from_radix` are already
/// validated, so `None` only ever means the value does not fit.
pub(crate) trait Integral: Sized {
    const KIND: NumberKind;

    fn from_radix(signed_digits: &str, radix: u32) -> Option<Self>;
}

macro_rules! impl_integral {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Integral for $ty {
                const KIND: NumberKind = NumberKind::$kind;

                fn from_radix(signed_digits: &str, radix: u32) -> Option<Self> {
                    <$ty>::from_str_radix(signed_digits, radix).ok()
                }
            }
        )*
    };
}

impl_integral! {
    i32 => Int,
    i64 => Long,
}

impl Integral for BigInt {
    const KIND: NumberKind = NumberKind::BigInteger;

    fn from_radix(signed_digits: &str, radix: u32) -> Option<Self> {
        <BigInt as Num>::from_str_radix(signed_digits, radix).ok()
    }
}

/// Parses `[sign] [0x | 0X | # | 0] digits` into `T`.
///
/// The sign goes before the prefix. A leading `0` followed by more digits is
/// octal; a lone `0` is decimal zero.
pub(crate) fn decode<T: Integral>(text: &str) -> Result<T, ErrorKind> {
    let (negative, unsigned) = split_sign(text);
    let (radix, digits) = Radix::detect(unsigned);
    check_digits(digits, radix)?;

    // Parse with the sign attached so the most negative value fits.
    let signed: Cow<'_, str> = if negative {
        Cow::Owned(format!("-{digits}"))
    } else {
        Cow::Borrowed(digits)
    };
    T::from_radix(&signed, radix.value()).ok_or(ErrorKind::Overflow(T::KIND))
}

fn check_digits(digits: &str, radix: Radix) -> Result<(), ErrorKind> {
    let radix = radix.value();
    match digits.chars().next() {
        None => Err(ErrorKind::Empty),
        Some('+' | '-') => Err(ErrorKind::MisplacedSign),
        Some(_) => match digits.chars().find(|c| !c.is_digit(radix)) {
            Some(ch) => Err(ErrorKind::InvalidDigit { ch, radix }),
            None => Ok(()),
        },
    }
}

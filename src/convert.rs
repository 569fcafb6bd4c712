// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversion between `Decimal` and integer types.

use crate::decimal::Decimal;
use crate::uint::pow10;
use crate::DecimalConvertError;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::convert::TryFrom;

// u128::MAX has 39 digits
const MAX_INTEGRAL_DIGITS: i64 = 39;

macro_rules! impl_from_int {
    ($ty: ty) => {
        impl From<$ty> for Decimal {
            #[inline]
            fn from(val: $ty) -> Self {
                Decimal::from_parts(BigUint::from(val), 0, false)
            }
        }
    };
    (SIGNED $ty: ty) => {
        impl From<$ty> for Decimal {
            #[inline]
            fn from(val: $ty) -> Decimal {
                Decimal::from_parts(BigUint::from(val.unsigned_abs()), 0, val < 0)
            }
        }
    };
    ($($ty: ty), * $(,)?) => {
        $(impl_from_int!($ty);)*
    };
    (SIGNED $($ty: ty), * $(,)?) => {
        $(impl_from_int!(SIGNED $ty);)*
    }
}

impl_from_int!(u8, u16, u32, u64, usize, u128);
impl_from_int!(SIGNED i8, i16, i32, i64, isize, i128);

impl From<BigUint> for Decimal {
    #[inline]
    fn from(val: BigUint) -> Self {
        Decimal::from_parts(val, 0, false)
    }
}

impl From<BigInt> for Decimal {
    #[inline]
    fn from(val: BigInt) -> Self {
        let (sign, int_val) = val.into_parts();
        Decimal::from_parts(int_val, 0, sign == Sign::Minus)
    }
}

/// Returns the integral value of `value`, failing if it has a nonzero fractional part.
fn to_integral(value: &Decimal) -> Result<BigInt, DecimalConvertError> {
    if value.is_zero() {
        return Ok(BigInt::zero());
    }

    let adjusted = value.adjusted();
    if adjusted > MAX_INTEGRAL_DIGITS {
        return Err(DecimalConvertError::Overflow);
    }

    let int_val = if value.scale <= 0 {
        &value.int_val * pow10(value.scale.unsigned_abs())
    } else {
        // a nonzero magnitude below one
        if adjusted <= 0 {
            return Err(DecimalConvertError::Invalid);
        }

        let (quot, rem) = value.int_val.div_rem(&pow10(value.scale as u64));
        if !rem.is_zero() {
            return Err(DecimalConvertError::Invalid);
        }
        quot
    };

    let sign = if value.negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, int_val))
}

macro_rules! impl_into_int {
    ($ty: ty, $to: ident) => {
        impl TryFrom<&Decimal> for $ty {
            type Error = DecimalConvertError;

            #[inline]
            fn try_from(value: &Decimal) -> Result<Self, Self::Error> {
                to_integral(value)?
                    .$to()
                    .ok_or(DecimalConvertError::Overflow)
            }
        }

        impl TryFrom<Decimal> for $ty {
            type Error = DecimalConvertError;

            #[inline]
            fn try_from(value: Decimal) -> Result<Self, Self::Error> {
                <$ty>::try_from(&value)
            }
        }
    };
}

impl_into_int!(u8, to_u8);
impl_into_int!(u16, to_u16);
impl_into_int!(u32, to_u32);
impl_into_int!(u64, to_u64);
impl_into_int!(usize, to_usize);
impl_into_int!(u128, to_u128);
impl_into_int!(i8, to_i8);
impl_into_int!(i16, to_i16);
impl_into_int!(i32, to_i32);
impl_into_int!(i64, to_i64);
impl_into_int!(isize, to_isize);
impl_into_int!(i128, to_i128);

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryInto;
    use std::fmt::Debug;

    fn assert_from<V: Into<Decimal>>(val: V, expected: &str) {
        let decimal = val.into();
        let expected = expected.parse::<Decimal>().unwrap();
        assert_eq!(decimal, expected);
    }

    #[test]
    fn test_from_signed() {
        assert_from(0i8, "0");
        assert_from(-128i8, "-128");
        assert_from(32767i16, "32767");
        assert_from(-2147483648i32, "-2147483648");
        assert_from(i64::MIN, "-9223372036854775808");
        assert_from(-1isize, "-1");
        assert_from(i128::MIN, "-170141183460469231731687303715884105728");
        assert_from(i128::MAX, "170141183460469231731687303715884105727");
    }

    #[test]
    fn test_from_unsigned() {
        assert_from(0u8, "0");
        assert_from(255u8, "255");
        assert_from(65535u16, "65535");
        assert_from(4294967295u32, "4294967295");
        assert_from(u64::MAX, "18446744073709551615");
        assert_from(1usize, "1");
        assert_from(u128::MAX, "340282366920938463463374607431768211455");
    }

    #[test]
    fn test_from_bigint() {
        let big = "-123456789012345678901234567890123456789012345678901234567890"
            .parse::<BigInt>()
            .unwrap();
        assert_from(big, "-123456789012345678901234567890123456789012345678901234567890");
        assert_from(BigUint::from(42u32), "42");
        assert_from(BigInt::zero(), "0");
    }

    fn assert_try_into<T: TryFrom<Decimal, Error = DecimalConvertError> + PartialEq + Debug>(
        val: &str,
        expected: T,
    ) {
        let decimal = val.parse::<Decimal>().unwrap();
        let result: T = decimal.try_into().unwrap();
        assert_eq!(result, expected);
    }

    fn assert_try_into_err<T: TryFrom<Decimal, Error = DecimalConvertError> + Debug>(
        val: &str,
        expected: DecimalConvertError,
    ) {
        let decimal = val.parse::<Decimal>().unwrap();
        let result: Result<T, _> = decimal.try_into();
        assert_eq!(result.unwrap_err(), expected);
    }

    fn assert_try_into_overflow<T: TryFrom<Decimal, Error = DecimalConvertError> + Debug>(val: &str) {
        assert_try_into_err::<T>(val, DecimalConvertError::Overflow);
    }

    fn assert_try_into_invalid<T: TryFrom<Decimal, Error = DecimalConvertError> + Debug>(val: &str) {
        assert_try_into_err::<T>(val, DecimalConvertError::Invalid);
    }

    #[test]
    fn test_into_u128() {
        assert_try_into("0", 0u128);
        assert_try_into("1", 1u128);
        assert_try_into("1.000", 1u128);
        assert_try_into("12e3", 12000u128);
        assert_try_into("340282366920938463463374607431768211455", u128::MAX);
        assert_try_into_overflow::<u128>("340282366920938463463374607431768211456");
        assert_try_into_overflow::<u128>("1e39");
        assert_try_into_overflow::<u128>("1e999999999999");
        assert_try_into_overflow::<u128>("-1");
        assert_try_into_invalid::<u128>("1.5");
    }

    #[test]
    fn test_into_i128() {
        assert_try_into("0", 0i128);
        assert_try_into("-1", -1i128);
        assert_try_into("-170141183460469231731687303715884105728", i128::MIN);
        assert_try_into_overflow::<i128>("170141183460469231731687303715884105728");
        assert_try_into_overflow::<i128>("1e39");
        assert_try_into_invalid::<i128>("-0.5");
    }

    #[test]
    fn test_into_u64() {
        assert_try_into("0", 0u64);
        assert_try_into("0.000", 0u64);
        assert_try_into("18446744073709551615", u64::MAX);
        assert_try_into("18446744073709551615.000", u64::MAX);
        assert_try_into_overflow::<u64>("18446744073709551616");
        assert_try_into_overflow::<u64>("-1");
        assert_try_into_invalid::<u64>("0.000001");
        assert_try_into_invalid::<u64>("1e-1000000000");
        assert_try_into_invalid::<u64>("18446744073709551614.5");
    }

    #[test]
    fn test_into_i64() {
        assert_try_into("0", 0i64);
        assert_try_into("-1", -1i64);
        assert_try_into("9223372036854775807", i64::MAX);
        assert_try_into("-9223372036854775808", i64::MIN);
        assert_try_into("-92233720368547758.08e2", i64::MIN);
        assert_try_into_overflow::<i64>("9223372036854775808");
        assert_try_into_overflow::<i64>("-9223372036854775809");
        assert_try_into_invalid::<i64>("3.14");
    }

    #[test]
    fn test_into_small_int() {
        assert_try_into("255", 255u8);
        assert_try_into("-128", -128i8);
        assert_try_into("65535", 65535u16);
        assert_try_into("-32768", -32768i16);
        assert_try_into("4294967295", 4294967295u32);
        assert_try_into("-2147483648", -2147483648i32);
        assert_try_into("7", 7usize);
        assert_try_into("-7", -7isize);
        assert_try_into_overflow::<u8>("256");
        assert_try_into_overflow::<i8>("-129");
        assert_try_into_overflow::<u16>("-1");
        assert_try_into_overflow::<i32>("2147483648");

        let pi = "3.14159".parse::<Decimal>().unwrap();
        assert_eq!(u32::try_from(&pi), Err(DecimalConvertError::Invalid));
    }
}

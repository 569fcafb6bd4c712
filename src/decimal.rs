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

//! Decimal implementation.

use crate::context::RoundingMode;
use crate::uint::{checked_pow10, count_digits, pow10, round_shift};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Arbitrary precision decimal.
///
/// The value is `(-1)^negative * int_val * 10^-scale`. A zero `int_val` is never negative.
#[derive(Clone, Debug, Eq)]
pub struct Decimal {
    pub(crate) int_val: BigUint,
    // A positive scale means a negative power of 10
    pub(crate) scale: i64,
    pub(crate) negative: bool,
}

impl Decimal {
    /// Creates a `Decimal` equal to `int_val * 10^-scale`.
    ///
    /// ```
    /// use decimal_pi::Decimal;
    ///
    /// assert_eq!(Decimal::new(-31415, 4).to_string(), "-3.1415");
    /// assert_eq!(Decimal::new(24, -2).to_string(), "2400");
    /// ```
    #[inline]
    pub fn new(int_val: i64, scale: i64) -> Decimal {
        Decimal::from_parts(BigUint::from(int_val.unsigned_abs()), scale, int_val < 0)
    }

    /// Creates a `Decimal` from parts, a zero `int_val` drops the sign.
    #[inline]
    pub fn from_parts(int_val: BigUint, scale: i64, negative: bool) -> Decimal {
        let negative = negative && !int_val.is_zero();
        Decimal {
            int_val,
            scale,
            negative,
        }
    }

    /// Consumes the `Decimal`, returning `(int_val, scale, negative)`.
    #[inline]
    pub fn into_parts(self) -> (BigUint, i64, bool) {
        (self.int_val, self.scale, self.negative)
    }

    /// Returns the precision, i.e. the count of significant digits in this decimal.
    #[inline]
    pub fn precision(&self) -> u64 {
        count_digits(&self.int_val)
    }

    /// Returns the scale, i.e. the count of decimal digits in the fractional part.
    /// A positive scale means a negative power of 10.
    #[inline]
    pub const fn scale(&self) -> i64 {
        self.scale
    }

    /// Returns `-1`, `0` or `1` following the sign of `self`.
    #[inline]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns `true` if the sign bit of the decimal is negative.
    #[inline]
    pub const fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` if the sign bit of the decimal is positive.
    #[inline]
    pub const fn is_sign_positive(&self) -> bool {
        !self.negative
    }

    /// Checks if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.int_val.is_zero()
    }

    /// Computes the absolute value of `self`.
    #[inline]
    pub fn abs(&self) -> Decimal {
        let mut abs_val = self.clone();
        abs_val.negative = false;
        abs_val
    }

    /// Position of the leading digit: `10^(adjusted - 1) <= |self| < 10^adjusted`.
    #[inline]
    pub(crate) fn adjusted(&self) -> i64 {
        count_digits(&self.int_val) as i64 - self.scale
    }

    /// Returns the coefficient of `self` expressed at the finer `scale`, or `None` when
    /// the power of ten needed is out of range.
    #[inline]
    fn checked_rescale_int(&self, scale: i64) -> Option<BigUint> {
        debug_assert!(scale >= self.scale);

        if self.is_zero() || scale == self.scale {
            return Some(self.int_val.clone());
        }

        let exp = scale.checked_sub(self.scale)?;
        Some(&self.int_val * checked_pow10(exp as u64)?)
    }

    /// Returns the coefficient of `self` expressed at the finer `scale`.
    #[inline]
    fn rescale_int(&self, scale: i64) -> BigUint {
        debug_assert!(scale >= self.scale);

        if self.is_zero() || scale == self.scale {
            return self.int_val.clone();
        }

        &self.int_val * pow10((scale - self.scale) as u64)
    }

    /// Truncate a value to have `scale` digits after the decimal point.
    /// We allow negative `scale`, implying a truncation before the decimal
    /// point.
    #[inline]
    pub fn trunc(&self, scale: i64) -> Decimal {
        self.round_with(scale, RoundingMode::Down)
    }

    /// Round a value half up to have `scale` digits after the decimal point.
    /// We allow negative `scale`, implying rounding before the decimal
    /// point.
    ///
    /// ```
    /// use decimal_pi::Decimal;
    ///
    /// let pi: Decimal = "3.14159265358979".parse().unwrap();
    /// assert_eq!(pi.round(4).to_string(), "3.1416");
    /// ```
    #[inline]
    pub fn round(&self, scale: i64) -> Decimal {
        self.round_with(scale, RoundingMode::HalfUp)
    }

    /// Round a value to have `scale` digits after the decimal point using `mode`.
    ///
    /// A value that already has at most `scale` fractional digits is returned as is.
    #[inline]
    pub fn round_with(&self, scale: i64, mode: RoundingMode) -> Decimal {
        if self.scale <= scale {
            return self.clone();
        }

        let e = self.scale.saturating_sub(scale) as u64;
        let int_val = round_shift(&self.int_val, e, mode, false);
        Decimal::from_parts(int_val, scale, self.negative)
    }

    /// Rounds `self` to at most `precision` significant digits.
    ///
    /// `sticky` tells that nonzero digits were discarded below `self` before.
    pub(crate) fn round_to_precision(self, precision: u32, mode: RoundingMode, sticky: bool) -> Decimal {
        let precision = precision as u64;
        let digits = count_digits(&self.int_val);
        if digits <= precision {
            return self;
        }

        let shift = digits - precision;
        let mut int_val = round_shift(&self.int_val, shift, mode, sticky);
        let mut scale = self.scale - shift as i64;

        // 99..9 rounded up to 100..0
        if int_val >= pow10(precision) {
            int_val /= 10u32;
            scale -= 1;
        }

        Decimal::from_parts(int_val, scale, self.negative)
    }

    /// Strips trailing zeros while the scale stays above `min_scale`.
    pub(crate) fn reduce_to(self, min_scale: i64) -> Decimal {
        if self.is_zero() {
            return self;
        }

        let ten = BigUint::from(10u32);
        let Decimal {
            mut int_val,
            mut scale,
            negative,
        } = self;

        while scale > min_scale {
            let (quot, rem) = int_val.div_rem(&ten);
            if !rem.is_zero() {
                break;
            }

            int_val = quot;
            scale -= 1;
        }

        Decimal {
            int_val,
            scale,
            negative,
        }
    }

    /// Normalize a `Decimal` by removing trailing zeros of its coefficient.
    ///
    /// Zero normalizes to a zero scale, other values may end with a negative scale.
    #[inline]
    pub fn normalize(&self) -> Decimal {
        if self.is_zero() {
            return Decimal::zero();
        }

        self.clone().reduce_to(i64::MIN)
    }

    /// Exact sum of `self` and `other` where `other` takes the sign `other_negative`.
    ///
    /// Fails when the scales are too far apart to line up the coefficients.
    pub(crate) fn add_exact(&self, other: &Decimal, other_negative: bool) -> Option<Decimal> {
        let scale = self.scale.max(other.scale);
        let left = self.checked_rescale_int(scale)?;
        let right = other.checked_rescale_int(scale)?;

        if self.negative == other_negative {
            return Some(Decimal::from_parts(left + right, scale, self.negative));
        }

        let sum = if left >= right {
            Decimal::from_parts(left - right, scale, self.negative)
        } else {
            Decimal::from_parts(right - left, scale, other_negative)
        };
        Some(sum)
    }

    /// Exact product of `self` and `other`, `None` if the scale overflows.
    #[inline]
    pub(crate) fn mul_exact(&self, other: &Decimal) -> Option<Decimal> {
        let scale = self.scale.checked_add(other.scale)?;
        Some(Decimal::from_parts(
            &self.int_val * &other.int_val,
            scale,
            self.negative ^ other.negative,
        ))
    }

    /// Add two decimals exactly,
    /// returning `None` if the scale gap between them is too large to represent.
    ///
    /// ```
    /// use decimal_pi::Decimal;
    ///
    /// let one = Decimal::from(1u32);
    /// let tiny: Decimal = "1e-4294967306".parse().unwrap();
    /// assert_eq!(one.checked_add(&tiny), None);
    /// ```
    #[inline]
    pub fn checked_add(&self, other: &Decimal) -> Option<Decimal> {
        self.add_exact(other, other.negative)
    }

    /// Subtract one decimal from another exactly,
    /// returning `None` if the scale gap between them is too large to represent.
    #[inline]
    pub fn checked_sub(&self, other: &Decimal) -> Option<Decimal> {
        self.add_exact(other, !other.is_zero() && !other.negative)
    }

    /// Multiply two decimals exactly,
    /// returning `None` if the resulting scale overflows.
    #[inline]
    pub fn checked_mul(&self, other: &Decimal) -> Option<Decimal> {
        self.mul_exact(other)
    }

    #[inline]
    fn cmp_magnitude(&self, other: &Decimal) -> Ordering {
        // different leading digit positions also bound the rescale below
        let adjusted = self.adjusted().cmp(&other.adjusted());
        if adjusted != Ordering::Equal {
            return adjusted;
        }

        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.int_val.cmp(&other.int_val),
            Ordering::Less => self.rescale_int(other.scale).cmp(&other.int_val),
            Ordering::Greater => self.int_val.cmp(&other.rescale_int(self.scale)),
        }
    }

    /// Writes the unsigned digits of `self`, padding fractional zeros up to `precision`.
    ///
    /// `self` must already be rounded to `precision`.
    #[inline]
    pub(crate) fn fmt_internal<W: fmt::Write>(&self, precision: Option<usize>, mut w: W) -> fmt::Result {
        let digits = self.int_val.to_str_radix(10);
        if self.scale <= 0 {
            w.write_str(&digits)?;
            if !self.is_zero() {
                write_zeros(&mut w, self.scale.unsigned_abs())?;
            }
            if let Some(prec) = precision {
                if prec != 0 {
                    w.write_char('.')?;
                    write_zeros(&mut w, prec as u64)?;
                }
            }
        } else {
            let scale = self.scale as usize;
            let len = digits.len();
            if len <= scale {
                w.write_str("0.")?;
                write_zeros(&mut w, (scale - len) as u64)?;
                w.write_str(&digits)?;
            } else {
                let (int_digits, frac_digits) = digits.split_at(len - scale);
                w.write_str(int_digits)?;
                w.write_char('.')?;
                w.write_str(frac_digits)?;
            }
            if let Some(prec) = precision {
                if prec > scale {
                    write_zeros(&mut w, (prec - scale) as u64)?;
                }
            }
        }

        Ok(())
    }
}

#[inline]
fn write_zeros<W: fmt::Write>(w: &mut W, mut count: u64) -> fmt::Result {
    const ZERO_BUF: &str = "0000000000000000000000000000000000000000000000000000000000000000";

    while count > 0 {
        let n = count.min(ZERO_BUF.len() as u64);
        w.write_str(&ZERO_BUF[..n as usize])?;
        count -= n;
    }

    Ok(())
}

impl fmt::Display for Decimal {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rounded;
        let dec = match f.precision() {
            // a value rounded to zero prints without sign
            Some(prec) => {
                rounded = self.round(prec as i64);
                &rounded
            }
            None => self,
        };

        let mut buf = String::new();
        dec.fmt_internal(f.precision(), &mut buf)?;
        f.pad_integral(dec.is_sign_positive(), "", &buf)
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Decimal::zero()
    }
}

impl Zero for Decimal {
    #[inline]
    fn zero() -> Self {
        Decimal::from_parts(BigUint::zero(), 0, false)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.int_val.is_zero()
    }
}

impl One for Decimal {
    #[inline]
    fn one() -> Self {
        Decimal::from_parts(BigUint::one(), 0, false)
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialEq<&Decimal> for Decimal {
    #[inline]
    fn eq(&self, other: &&Decimal) -> bool {
        self.eq(*other)
    }
}

impl PartialEq<Decimal> for &Decimal {
    #[inline]
    fn eq(&self, other: &Decimal) -> bool {
        (*self).eq(other)
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => {
                return if other.negative {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
            (false, true) => {
                return if self.negative {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
            (false, false) => {}
        }

        // sign is different
        if self.negative != other.negative {
            return if self.negative {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        if self.negative {
            // both are negative, so reverse cmp
            other.cmp_magnitude(self)
        } else {
            self.cmp_magnitude(other)
        }
    }
}

impl Hash for Decimal {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalize();
        n.int_val.hash(state);
        n.scale.hash(state);
        n.negative.hash(state);
    }
}

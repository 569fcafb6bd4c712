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

//! Arithmetic bounded by a precision and a rounding mode.

use crate::decimal::Decimal;
use crate::error::DecimalError;
use crate::uint::{count_digits, pow10};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use std::borrow::Cow;

/// Rounding applied to the last retained digit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties away from zero.
    HalfUp,
    /// Round to nearest, ties to the even neighbour.
    HalfEven,
    /// Truncate toward zero.
    Down,
}

impl Default for RoundingMode {
    #[inline]
    fn default() -> Self {
        RoundingMode::HalfUp
    }
}

/// Working precision and rounding mode of a computation.
///
/// `precision` is the maximum count of significant digits an operation keeps.
/// A context is never changed once built, every operation returns a new decimal.
///
/// ```
/// use decimal_pi::{Context, Decimal};
///
/// let ctx = Context::new(5).unwrap();
/// let one: Decimal = "1".parse().unwrap();
/// let three: Decimal = "3".parse().unwrap();
/// assert_eq!(ctx.div(&one, &three).unwrap().to_string(), "0.33333");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Context {
    precision: u32,
    rounding: RoundingMode,
}

impl Context {
    /// Creates a context rounding half up to `precision` significant digits.
    #[inline]
    pub fn new(precision: u32) -> Result<Context, DecimalError> {
        if precision == 0 {
            return Err(DecimalError::InvalidPrecision(0));
        }

        Ok(Context {
            precision,
            rounding: RoundingMode::HalfUp,
        })
    }

    /// Returns a copy of this context using `rounding`.
    #[inline]
    pub const fn with_rounding(self, rounding: RoundingMode) -> Context {
        Context {
            precision: self.precision,
            rounding,
        }
    }

    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Rounds `value` to the context precision.
    #[inline]
    pub fn round(&self, value: &Decimal) -> Decimal {
        value.clone().round_to_precision(self.precision, self.rounding, false)
    }

    /// Computes `a + b`, rounded only when the exact sum has more digits than the precision.
    #[inline]
    pub fn add(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.add_signed(a, b, b.negative)
    }

    /// Computes `a - b`, rounded only when the exact difference has more digits than the precision.
    #[inline]
    pub fn sub(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.add_signed(a, b, !b.is_zero() && !b.negative)
    }

    /// Computes `a * b` rounded to the context precision.
    ///
    /// Panics if the scale of the exact product overflows `i64`.
    #[inline]
    pub fn mul(&self, a: &Decimal, b: &Decimal) -> Decimal {
        match a.mul_exact(b) {
            Some(prod) => prod.round_to_precision(self.precision, self.rounding, false),
            None => panic!("Multiplication overflowed"),
        }
    }

    /// Computes `a / b` to the context precision.
    ///
    /// The dividend is scaled so the integer quotient carries at least one digit past the
    /// precision, the remainder only tells whether anything nonzero follows.
    pub fn div(&self, a: &Decimal, b: &Decimal) -> Result<Decimal, DecimalError> {
        if b.is_zero() {
            return Err(DecimalError::DivideByZero);
        }

        let ideal_scale = a.scale - b.scale;
        if a.is_zero() {
            return Ok(Decimal::from_parts(BigUint::zero(), ideal_scale, false));
        }

        // a * 10^shift / b must have at least precision + 1 digits
        let a_digits = count_digits(&a.int_val) as i64;
        let b_digits = count_digits(&b.int_val) as i64;
        let shift = (self.precision as i64 + 1 + b_digits - a_digits).max(0);

        let dividend = &a.int_val * pow10(shift as u64);
        let (quot, rem) = dividend.div_rem(&b.int_val);
        let exact = rem.is_zero();

        let result = Decimal::from_parts(quot, ideal_scale + shift, a.negative ^ b.negative).round_to_precision(
            self.precision,
            self.rounding,
            !exact,
        );

        if exact {
            Ok(result.reduce_to(ideal_scale))
        } else {
            Ok(result)
        }
    }

    fn add_signed(&self, a: &Decimal, b: &Decimal, b_negative: bool) -> Decimal {
        let (a, b) = if a.adjusted() >= b.adjusted() {
            (Cow::Borrowed(a), self.collapse_far(a, b))
        } else {
            (self.collapse_far(b, a), Cow::Borrowed(b))
        };

        // collapse_far keeps the scale gap within the digits of the operands
        match a.add_exact(&b, b_negative) {
            Some(sum) => sum.round_to_precision(self.precision, self.rounding, false),
            None => panic!("Addition overflowed"),
        }
    }

    /// Replaces `lo` by a single unit far below every rounding boundary of `hi + lo`
    /// when `lo` is too small to change any retained digit.
    ///
    /// The unit sits two places below both the last digit of `hi` and the lowest digit
    /// that rounding to the precision may inspect, so the rounding outcome is the same.
    fn collapse_far<'a>(&self, hi: &Decimal, lo: &'a Decimal) -> Cow<'a, Decimal> {
        if hi.is_zero() || lo.is_zero() {
            return Cow::Borrowed(lo);
        }

        let place = (hi.adjusted() - 4 - self.precision as i64).min(-hi.scale - 1);
        if lo.adjusted() > place + 1 || lo.scale <= -place {
            return Cow::Borrowed(lo);
        }

        Cow::Owned(Decimal::from_parts(BigUint::from(1u32), -place, lo.negative))
    }
}

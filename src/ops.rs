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

//! Ops implementation.
//!
//! Operators are exact: sums keep the larger scale and products add scales.
//! Division is inexact in general, it lives on [`Context`](crate::Context) only.
//! Operators panic where the `checked_*` methods of [`Decimal`] return `None`.

use crate::decimal::Decimal;
use num_traits::{One, Zero};
use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};

impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Add<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, other: &Decimal) -> Self::Output {
        match self.checked_add(other) {
            Some(sum) => sum,
            None => panic!("Addition overflowed"),
        }
    }
}

impl Sub<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, other: &Decimal) -> Self::Output {
        match self.checked_sub(other) {
            Some(diff) => diff,
            None => panic!("Subtraction overflowed"),
        }
    }
}

impl Mul<&'_ Decimal> for &'_ Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, other: &Decimal) -> Self::Output {
        match self.checked_mul(other) {
            Some(prod) => prod,
            None => panic!("Multiplication overflowed"),
        }
    }
}

impl Sum for Decimal {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    #[inline]
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::zero(), |acc, val| &acc + val)
    }
}

impl Product for Decimal {
    #[inline]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal::one(), Mul::mul)
    }
}

impl<'a> Product<&'a Decimal> for Decimal {
    #[inline]
    fn product<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::one(), |acc, val| &acc * val)
    }
}

macro_rules! impl_arith {
    ($op: ident { $method: ident }) => {
        impl $op for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, other: Self) -> Self::Output {
                (&self).$method(&other)
            }
        }

        impl $op<&'_ Decimal> for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, other: &Decimal) -> Self::Output {
                (&self).$method(other)
            }
        }

        impl $op<Decimal> for &'_ Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, other: Decimal) -> Self::Output {
                self.$method(&other)
            }
        }
    };
}

impl_arith!(Add { add });
impl_arith!(Sub { sub });
impl_arith!(Mul { mul });

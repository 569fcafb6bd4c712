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

//! Coefficient helpers over `BigUint`: powers of ten, digit counting and rounding.

use crate::context::RoundingMode;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::convert::TryFrom;

pub static POWERS_10: [u64; 20] = [
    1,
    10,
    100,
    1000,
    10000,
    100000,
    1000000,
    10000000,
    100000000,
    1000000000,
    10000000000,
    100000000000,
    1000000000000,
    10000000000000,
    100000000000000,
    1000000000000000,
    10000000000000000,
    100000000000000000,
    1000000000000000000,
    10000000000000000000,
];

/// Returns `10^exp`, or `None` when `exp` does not fit in `u32`.
#[inline]
pub fn checked_pow10(exp: u64) -> Option<BigUint> {
    if exp < POWERS_10.len() as u64 {
        return Some(BigUint::from(POWERS_10[exp as usize]));
    }

    let exp = u32::try_from(exp).ok()?;
    Some(BigUint::from(10u32).pow(exp))
}

/// Returns `10^exp`.
///
/// # Panics
///
/// Panics if `exp` does not fit in `u32`.
#[inline]
pub fn pow10(exp: u64) -> BigUint {
    match checked_pow10(exp) {
        Some(power) => power,
        None => panic!("Power of ten overflowed"),
    }
}

/// Returns the count of decimal digits of `val`, `1` for zero.
#[inline]
pub fn count_digits(val: &BigUint) -> u64 {
    if let Some(small) = val.to_u64() {
        return match POWERS_10.binary_search(&small) {
            Ok(pos) => pos as u64 + 1,
            Err(pos) => {
                if pos == 0 {
                    1
                } else {
                    pos as u64
                }
            }
        };
    }

    // 2^(bits - 1) <= val, and 0.30102 < log10(2), so `digits` starts as a lower bound.
    let bits = val.bits();
    let mut digits = (bits - 1) * 30102 / 100000 + 1;
    let mut power = pow10(digits);
    while &power <= val {
        power *= 10u32;
        digits += 1;
    }
    digits
}

/// Divides `val` by `10^shift` and rounds the quotient according to `mode`.
///
/// `sticky` tells that nonzero digits were already discarded below `val`,
/// so a remainder of exactly one half is really above one half.
#[inline]
pub fn round_shift(val: &BigUint, shift: u64, mode: RoundingMode, sticky: bool) -> BigUint {
    if shift == 0 {
        return val.clone();
    }

    // the first discarded digit is a leading zero, nothing rounds up
    if shift > count_digits(val) {
        return BigUint::zero();
    }

    let (quot, rem) = val.div_rem(&pow10(shift));
    if rem.is_zero() && !sticky {
        return quot;
    }

    let round_up = match mode {
        RoundingMode::Down => false,
        RoundingMode::HalfUp => cmp_half(&rem, shift) != Ordering::Less,
        RoundingMode::HalfEven => match cmp_half(&rem, shift) {
            Ordering::Greater => true,
            Ordering::Equal => sticky || quot.is_odd(),
            Ordering::Less => false,
        },
    };

    if round_up {
        quot + 1u32
    } else {
        quot
    }
}

/// Compares `rem` with half of `10^shift`.
#[inline]
fn cmp_half(rem: &BigUint, shift: u64) -> Ordering {
    debug_assert!(shift > 0);
    let half = pow10(shift - 1) * 5u32;
    rem.cmp(&half)
}

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

//! Verification of computed π against a reference literal.

use crate::context::Context;
use crate::decimal::Decimal;
use crate::error::{DecimalError, DecimalParseError, VerifyError};
use std::cmp::Ordering;

/// π to 286 significant digits.
pub const PI_REFERENCE: &str = "3.141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117067982148086513282306647093844609550582231725359408128481117450284102701938521105559644622948954930381964428810975665933446128475648233786783165271201909145648566923460348610454326648213394";

/// Compares computed values with the reference rounded to the same precision.
#[derive(Clone, Debug)]
pub struct Oracle {
    reference: Decimal,
}

impl Default for Oracle {
    #[inline]
    fn default() -> Self {
        Oracle::new()
    }
}

impl Oracle {
    /// Creates an oracle over [`PI_REFERENCE`].
    #[inline]
    pub fn new() -> Oracle {
        Oracle::from_reference(PI_REFERENCE).expect("PI_REFERENCE is a valid decimal")
    }

    /// Creates an oracle over another reference value.
    #[inline]
    pub fn from_reference(reference: &str) -> Result<Oracle, DecimalParseError> {
        Ok(Oracle {
            reference: reference.parse()?,
        })
    }

    #[inline]
    pub fn reference(&self) -> &Decimal {
        &self.reference
    }

    /// Returns the reference rounded half up to `target_precision` significant digits.
    ///
    /// A precision beyond the digits of the reference cannot be checked and fails
    /// with `ResourceExhausted`.
    pub fn expected(&self, target_precision: i64) -> Result<Decimal, DecimalError> {
        if target_precision <= 0 {
            return Err(DecimalError::InvalidPrecision(target_precision));
        }

        let digits = self.reference.precision();
        if target_precision as u64 > digits {
            return Err(DecimalError::ResourceExhausted {
                requested: target_precision as u64,
                max: digits,
            });
        }

        let ctx = Context::new(target_precision as u32)?;
        Ok(ctx.round(&self.reference))
    }

    /// Tells whether `computed` equals the reference at `target_precision`.
    ///
    /// Values are compared numerically, `"3.141592650"` matches at nine digits.
    #[inline]
    pub fn matches(&self, computed: &str, target_precision: i64) -> Result<bool, VerifyError> {
        let expected = self.expected(target_precision)?;
        let computed: Decimal = computed.parse()?;
        Ok(expected.cmp(&computed) == Ordering::Equal)
    }

    /// Fails with `Mismatch` unless `computed` equals the reference at `target_precision`.
    ///
    /// ```
    /// use decimal_pi::{Oracle, PiSeries};
    ///
    /// let pi = PiSeries::new().compute(19).unwrap();
    /// assert!(Oracle::new().verify(&pi.to_string(), 19).is_ok());
    /// ```
    pub fn verify(&self, computed: &str, target_precision: i64) -> Result<(), VerifyError> {
        let expected = self.expected(target_precision)?;
        let actual: Decimal = computed.parse()?;
        if expected.cmp(&actual) != Ordering::Equal {
            return Err(VerifyError::Mismatch {
                expected: expected.to_string(),
                actual: computed.to_string(),
            });
        }

        Ok(())
    }
}

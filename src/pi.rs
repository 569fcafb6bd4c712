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

//! Convergent series for π.
//!
//! Starting from `s = t = 3`, every step grows the numerator factor `n` by an
//! increment that itself grows by 8, grows the denominator `d` by an increment
//! that grows by 32, then adds `t = t * n / d` to the sum. The sum stops
//! moving once the terms fall below the working precision.

use crate::context::{Context, RoundingMode};
use crate::decimal::Decimal;
use crate::error::DecimalError;
use num_traits::Zero;
use std::mem;

/// Growth of the numerator increment per step.
pub const NA_STEP: u32 = 8;
/// First denominator increment.
pub const DA_SEED: u32 = 24;
/// Growth of the denominator increment per step.
pub const DA_STEP: u32 = 32;

/// Guard ratio numerator, the working precision is `ceil(p * 11 / 10)`.
pub const GUARD_NUMERATOR: u64 = 11;
/// Guard ratio denominator.
pub const GUARD_DENOMINATOR: u64 = 10;

/// Default ceiling on the working precision.
pub const DEFAULT_MAX_PRECISION: u32 = 100_000;

/// Returns the working precision used for `target_precision` significant digits.
///
/// ```
/// use decimal_pi::pi::working_precision;
///
/// assert_eq!(working_precision(9).unwrap(), 10);
/// assert_eq!(working_precision(100).unwrap(), 110);
/// ```
#[inline]
pub fn working_precision(target_precision: i64) -> Result<u64, DecimalError> {
    if target_precision <= 0 {
        return Err(DecimalError::InvalidPrecision(target_precision));
    }

    let precision = target_precision as u64;
    Ok(precision
        .saturating_mul(GUARD_NUMERATOR)
        .saturating_add(GUARD_DENOMINATOR - 1)
        / GUARD_DENOMINATOR)
}

/// Result of a converged run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PiOutcome {
    /// π rounded to the target precision.
    pub value: Decimal,
    /// Steps taken until the sum stopped changing.
    pub iterations: u64,
    pub working_precision: u32,
}

/// Computes π with the series above.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PiSeries {
    max_precision: u32,
}

impl Default for PiSeries {
    #[inline]
    fn default() -> Self {
        PiSeries::new()
    }
}

impl PiSeries {
    #[inline]
    pub const fn new() -> PiSeries {
        PiSeries {
            max_precision: DEFAULT_MAX_PRECISION,
        }
    }

    /// Sets the ceiling on the working precision, beyond it `compute` fails
    /// with `ResourceExhausted` instead of starting.
    #[inline]
    pub const fn with_max_precision(self, max_precision: u32) -> PiSeries {
        PiSeries { max_precision }
    }

    #[inline]
    pub const fn max_precision(&self) -> u32 {
        self.max_precision
    }

    fn context(&self, target_precision: i64) -> Result<Context, DecimalError> {
        let work = working_precision(target_precision)?;
        let max = self.max_precision as u64;
        if work > max {
            return Err(DecimalError::ResourceExhausted {
                requested: work,
                max,
            });
        }

        Ok(Context::new(work as u32)?.with_rounding(RoundingMode::HalfUp))
    }

    /// Returns π rounded half up to `target_precision` significant digits.
    ///
    /// ```
    /// use decimal_pi::PiSeries;
    ///
    /// let pi = PiSeries::new().compute(9).unwrap();
    /// assert_eq!(pi.to_string(), "3.14159265");
    /// ```
    #[inline]
    pub fn compute(&self, target_precision: i64) -> Result<Decimal, DecimalError> {
        self.run(target_precision).map(|outcome| outcome.value)
    }

    /// Runs the series to its fixed point and reports how it got there.
    pub fn run(&self, target_precision: i64) -> Result<PiOutcome, DecimalError> {
        let mut sums = self.partial_sums(target_precision)?;
        for sum in &mut sums {
            sum?;
        }

        let working_precision = sums.context.precision();
        let iterations = sums.iterations;

        tracing::debug!(
            target_precision,
            working_precision,
            iterations,
            "pi series converged"
        );

        // scale counts digits after the point, π has one before it
        let value = sums.sum.round(target_precision - 1);
        Ok(PiOutcome {
            value,
            iterations,
            working_precision,
        })
    }

    /// Returns the successive partial sums at the working precision of
    /// `target_precision`. The last item repeats the one before it.
    pub fn partial_sums(&self, target_precision: i64) -> Result<PartialSums, DecimalError> {
        let context = self.context(target_precision)?;
        Ok(PartialSums::new(context))
    }
}

/// Iterator over the partial sums of the series.
#[derive(Clone, Debug)]
pub struct PartialSums {
    context: Context,
    previous: Decimal,
    sum: Decimal,
    term: Decimal,
    n: Decimal,
    na: Decimal,
    d: Decimal,
    da: Decimal,
    iterations: u64,
    done: bool,
}

impl PartialSums {
    fn new(context: Context) -> PartialSums {
        PartialSums {
            context,
            previous: Decimal::zero(),
            sum: Decimal::from(3u32),
            term: Decimal::from(3u32),
            n: Decimal::from(1u32),
            na: Decimal::zero(),
            d: Decimal::zero(),
            da: Decimal::from(DA_SEED),
            iterations: 0,
            done: false,
        }
    }

    /// Steps taken so far.
    #[inline]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    #[inline]
    pub fn is_converged(&self) -> bool {
        self.done
    }

    fn step(&mut self) -> Result<(), DecimalError> {
        let ctx = &self.context;

        self.n = ctx.add(&self.n, &self.na);
        self.na = ctx.add(&self.na, &Decimal::from(NA_STEP));
        self.d = ctx.add(&self.d, &self.da);
        self.da = ctx.add(&self.da, &Decimal::from(DA_STEP));

        let product = ctx.mul(&self.term, &self.n);
        self.term = ctx.div(&product, &self.d)?;

        let sum = ctx.add(&self.sum, &self.term);
        self.previous = mem::replace(&mut self.sum, sum);
        self.iterations += 1;
        Ok(())
    }
}

impl Iterator for PartialSums {
    type Item = Result<Decimal, DecimalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Err(e) = self.step() {
            self.done = true;
            return Some(Err(e));
        }

        tracing::trace!(iteration = self.iterations, sum = %self.sum, "pi series partial sum");

        if self.sum == self.previous {
            self.done = true;
        }

        Some(Ok(self.sum.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_pi(precision: i64, expected: &str) {
        let pi = PiSeries::new().compute(precision).unwrap();
        assert_eq!(pi.to_string(), expected, "precision {}", precision);
    }

    #[test]
    fn test_compute() {
        assert_pi(1, "3");
        assert_pi(2, "3.1");
        assert_pi(3, "3.14");
        assert_pi(9, "3.14159265");
        assert_pi(19, "3.141592653589793238");
        assert_pi(38, "3.1415926535897932384626433832795028842");
        assert_pi(
            100,
            "3.141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117068",
        );
    }

    #[test]
    fn test_compute_invalid_precision() {
        let series = PiSeries::new();
        assert_eq!(series.compute(0), Err(DecimalError::InvalidPrecision(0)));
        assert_eq!(series.compute(-5), Err(DecimalError::InvalidPrecision(-5)));
        assert_eq!(series.compute(i64::MIN), Err(DecimalError::InvalidPrecision(i64::MIN)));
        assert!(series.partial_sums(0).is_err());
    }

    #[test]
    fn test_resource_exhausted() {
        let series = PiSeries::new().with_max_precision(10);
        assert_eq!(series.max_precision(), 10);
        assert_eq!(
            series.compute(10),
            Err(DecimalError::ResourceExhausted {
                requested: 11,
                max: 10
            })
        );
        assert_eq!(series.compute(9).unwrap().to_string(), "3.14159265");

        assert_eq!(
            PiSeries::default().compute(i64::MAX),
            Err(DecimalError::ResourceExhausted {
                requested: u64::MAX / GUARD_DENOMINATOR,
                max: DEFAULT_MAX_PRECISION as u64
            })
        );
    }

    #[test]
    fn test_working_precision() {
        assert_eq!(working_precision(1), Ok(2));
        assert_eq!(working_precision(9), Ok(10));
        assert_eq!(working_precision(10), Ok(11));
        assert_eq!(working_precision(19), Ok(21));
        assert_eq!(working_precision(38), Ok(42));
        assert_eq!(working_precision(100), Ok(110));
        assert_eq!(working_precision(0), Err(DecimalError::InvalidPrecision(0)));
    }

    #[test]
    fn test_run() {
        let outcome = PiSeries::new().run(9).unwrap();
        assert_eq!(outcome.value.to_string(), "3.14159265");
        assert_eq!(outcome.working_precision, 10);

        let count = PiSeries::new().partial_sums(9).unwrap().count() as u64;
        assert_eq!(outcome.iterations, count);
        assert!(outcome.iterations > 1);
    }

    #[test]
    fn test_partial_sums_converge_monotonically() {
        for precision in [1, 2, 9, 19, 38, 100].iter() {
            let mut sums = PiSeries::new().partial_sums(*precision).unwrap();
            let mut values = vec![Decimal::from(3u32)];
            for sum in &mut sums {
                values.push(sum.unwrap());
            }
            assert!(sums.is_converged());
            assert_eq!(sums.iterations() as usize, values.len() - 1);

            let n = values.len();
            assert_eq!(values[n - 1], values[n - 2], "precision {}", precision);

            let mut last_diff: Option<Decimal> = None;
            for pair in values.windows(2) {
                assert!(pair[1] >= pair[0], "precision {}", precision);
                let diff = &pair[1] - &pair[0];
                if let Some(last) = &last_diff {
                    assert!(diff < *last, "precision {}: {} !< {}", precision, diff, last);
                }
                last_diff = Some(diff);
            }
        }
    }

    #[test]
    fn test_partial_sums_stop_after_fixed_point() {
        let mut sums = PiSeries::new().partial_sums(2).unwrap();
        while sums.next().is_some() {}
        assert!(sums.is_converged());
        assert!(sums.next().is_none());
    }
}

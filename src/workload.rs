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

//! String in, string out entry points over an arithmetic engine.
//!
//! Operands are decimal strings, results are formatted with `Display`.

use crate::context::Context;
use crate::decimal::Decimal;
use crate::error::{DecimalError, VerifyError};
use crate::oracle::Oracle;
use crate::pi::PiSeries;
use std::convert::TryFrom;

/// Fractional digits kept by [`round`].
pub const ROUND_SCALE: i64 = 18;

/// The operations every arithmetic engine offers to the workload.
pub trait DecimalArithmetic {
    /// Engine name, for reports.
    fn name(&self) -> &'static str;

    /// π to `precision` significant digits.
    fn pi(&self, precision: i64) -> Result<String, DecimalError>;

    fn add(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError>;

    fn sub(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError>;

    fn mul(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError>;

    fn div(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError>;

    /// `x` rounded half up to [`ROUND_SCALE`] fractional digits.
    fn round(&self, x: &str) -> Result<String, DecimalError>;
}

/// The engine of this crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Native {
    series: PiSeries,
}

impl Native {
    #[inline]
    pub const fn new() -> Native {
        Native {
            series: PiSeries::new(),
        }
    }

    /// Uses `series` for [`DecimalArithmetic::pi`].
    #[inline]
    pub const fn with_series(series: PiSeries) -> Native {
        Native { series }
    }
}

#[inline]
fn context(precision: i64) -> Result<Context, DecimalError> {
    if precision <= 0 {
        return Err(DecimalError::InvalidPrecision(precision));
    }

    let precision = u32::try_from(precision).map_err(|_| DecimalError::ResourceExhausted {
        requested: precision as u64,
        max: u32::MAX as u64,
    })?;
    Context::new(precision)
}

#[inline]
fn operands(x: &str, y: &str) -> Result<(Decimal, Decimal), DecimalError> {
    Ok((x.parse()?, y.parse()?))
}

impl DecimalArithmetic for Native {
    #[inline]
    fn name(&self) -> &'static str {
        "decimal-pi"
    }

    #[inline]
    fn pi(&self, precision: i64) -> Result<String, DecimalError> {
        Ok(self.series.compute(precision)?.to_string())
    }

    #[inline]
    fn add(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
        let ctx = context(precision)?;
        let (x, y) = operands(x, y)?;
        Ok(ctx.add(&x, &y).to_string())
    }

    #[inline]
    fn sub(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
        let ctx = context(precision)?;
        let (x, y) = operands(x, y)?;
        Ok(ctx.sub(&x, &y).to_string())
    }

    #[inline]
    fn mul(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
        let ctx = context(precision)?;
        let (x, y) = operands(x, y)?;
        Ok(ctx.mul(&x, &y).to_string())
    }

    #[inline]
    fn div(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
        let ctx = context(precision)?;
        let (x, y) = operands(x, y)?;
        Ok(ctx.div(&x, &y)?.to_string())
    }

    #[inline]
    fn round(&self, x: &str) -> Result<String, DecimalError> {
        let x: Decimal = x.parse()?;
        Ok(x.round(ROUND_SCALE).to_string())
    }
}

/// Computes π with `engine` and checks it against the reference.
pub fn check_pi<A: DecimalArithmetic + ?Sized>(engine: &A, precision: i64) -> Result<(), VerifyError> {
    let output = engine.pi(precision)?;
    let result = Oracle::new().verify(&output, precision);
    if let Err(VerifyError::Mismatch { .. }) = &result {
        tracing::debug!(engine = engine.name(), precision, "pi mismatch");
    }
    result
}

/// π to `precision` significant digits.
///
/// ```
/// assert_eq!(decimal_pi::workload::pi(19).unwrap(), "3.141592653589793238");
/// ```
#[inline]
pub fn pi(precision: i64) -> Result<String, DecimalError> {
    Native::new().pi(precision)
}

#[inline]
pub fn add(x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
    Native::new().add(x, y, precision)
}

#[inline]
pub fn sub(x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
    Native::new().sub(x, y, precision)
}

#[inline]
pub fn mul(x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
    Native::new().mul(x, y, precision)
}

#[inline]
pub fn div(x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
    Native::new().div(x, y, precision)
}

/// `x` rounded half up to 18 fractional digits.
#[inline]
pub fn round(x: &str) -> Result<String, DecimalError> {
    Native::new().round(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecimalParseError;

    #[test]
    fn test_pi() {
        assert_eq!(pi(9).unwrap(), "3.14159265");
        assert_eq!(pi(19).unwrap(), "3.141592653589793238");
        assert_eq!(pi(0), Err(DecimalError::InvalidPrecision(0)));

        let small = Native::with_series(PiSeries::new().with_max_precision(20));
        assert_eq!(
            small.pi(38),
            Err(DecimalError::ResourceExhausted {
                requested: 42,
                max: 20
            })
        );
    }

    #[test]
    fn test_elementary() {
        assert_eq!(add("1.5", "2.25", 10).unwrap(), "3.75");
        assert_eq!(add("9.9999", "0.00005", 5).unwrap(), "10.000");
        assert_eq!(sub("1", "0.0000001", 3).unwrap(), "1.00");
        assert_eq!(sub("  5 ", "8", 10).unwrap(), "-3");
        assert_eq!(
            mul("123456789.987654321", "987654321.123456789", 38).unwrap(),
            "121932632103337905.662094193112635269"
        );
        assert_eq!(
            mul("123456789.987654321", "987654321.123456789", 18).unwrap(),
            "121932632103337906"
        );
        assert_eq!(div("1", "3", 20).unwrap(), "0.33333333333333333333");
        assert_eq!(div("2", "3", 5).unwrap(), "0.66667");
        assert_eq!(div("1", "4", 20).unwrap(), "0.25");
    }

    #[test]
    fn test_elementary_errors() {
        assert_eq!(div("1", "0", 10), Err(DecimalError::DivideByZero));
        assert_eq!(div("1", "0.000", 10), Err(DecimalError::DivideByZero));
        assert_eq!(
            add("1", "x", 10),
            Err(DecimalError::Parse(DecimalParseError::Invalid))
        );
        assert_eq!(
            mul("", "1", 10),
            Err(DecimalError::Parse(DecimalParseError::Empty))
        );
        assert_eq!(sub("1", "2", 0), Err(DecimalError::InvalidPrecision(0)));
        assert_eq!(add("1", "2", -7), Err(DecimalError::InvalidPrecision(-7)));
        assert_eq!(
            add("1", "2", i64::MAX),
            Err(DecimalError::ResourceExhausted {
                requested: i64::MAX as u64,
                max: u32::MAX as u64
            })
        );
    }

    #[test]
    fn test_round() {
        fn assert_round(x: &str, expected: &str) {
            assert_eq!(round(x).unwrap(), expected);
        }

        assert_round(
            "3.14159265358979323846264338327950288",
            "3.141592653589793238",
        );
        assert_round("2.0000000000000000005", "2.000000000000000001");
        assert_round("-2.0000000000000000005", "-2.000000000000000001");
        assert_round("2.0000000000000000004", "2.000000000000000000");
        assert_round("1.5", "1.5");
        assert_round("12345", "12345");
        assert_eq!(round("1.2.3"), Err(DecimalError::Parse(DecimalParseError::Invalid)));
    }

    #[test]
    fn test_check_pi() {
        let engine = Native::new();
        assert_eq!(engine.name(), "decimal-pi");
        for precision in [9, 19, 38, 100].iter() {
            check_pi(&engine, *precision).unwrap();
        }

        let dyn_engine: &dyn DecimalArithmetic = &engine;
        check_pi(dyn_engine, 9).unwrap();

        assert!(matches!(check_pi(&engine, 6), Err(VerifyError::Mismatch { .. })));
        assert_eq!(
            check_pi(&engine, 0),
            Err(VerifyError::Decimal(DecimalError::InvalidPrecision(0)))
        );
    }

    /// Prints π with extra trailing zeros.
    struct Padded(Native);

    impl DecimalArithmetic for Padded {
        fn name(&self) -> &'static str {
            "padded"
        }

        fn pi(&self, precision: i64) -> Result<String, DecimalError> {
            Ok(format!("{}000", self.0.pi(precision)?))
        }

        fn add(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
            self.0.add(x, y, precision)
        }

        fn sub(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
            self.0.sub(x, y, precision)
        }

        fn mul(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
            self.0.mul(x, y, precision)
        }

        fn div(&self, x: &str, y: &str, precision: i64) -> Result<String, DecimalError> {
            self.0.div(x, y, precision)
        }

        fn round(&self, x: &str) -> Result<String, DecimalError> {
            self.0.round(x)
        }
    }

    #[test]
    fn test_check_pi_trailing_zeros() {
        let engine = Padded(Native::new());
        assert_eq!(engine.pi(9).unwrap(), "3.14159265000");
        for precision in [9, 19, 38].iter() {
            check_pi(&engine, *precision).unwrap();
        }
    }
}

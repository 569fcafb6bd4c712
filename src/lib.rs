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

//! Arbitrary precision decimal with a convergent series for π.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, `Decimal` implements the `serde::Serialize` and
//! `serde::Deserialize` traits.
//!
//! ## Usage
//!
//! To build a decimal, use [`Decimal`]:
//!
//! ```
//! use decimal_pi::Decimal;
//!
//! let n1: Decimal = "123".parse().unwrap();
//! let n2: Decimal = "456".parse().unwrap();
//! let result = n1 + n2;
//! assert_eq!(result.to_string(), "579");
//! ```
//!
//! To build a decimal from Rust primitive types:
//!
//! ```
//! use decimal_pi::Decimal;
//!
//! let n1 = Decimal::from(123_i32);
//! let n2 = Decimal::from(456_i32);
//! let result = n1 + n2;
//! assert_eq!(result, Decimal::from(579_i32));
//! ```
//!
//! Operators are exact, a [`Context`] bounds the significant digits of a result.
//!
//! ```
//! use decimal_pi::{Context, Decimal};
//!
//! let n1: Decimal = "123456789.987654321".parse().unwrap();
//! let n2: Decimal = "987654321.123456789".parse().unwrap();
//! assert_eq!((&n1 * &n2).to_string(), "121932632103337905.662094193112635269");
//!
//! let ctx = Context::new(20).unwrap();
//! assert_eq!(ctx.mul(&n1, &n2).to_string(), "121932632103337905.66");
//! assert_eq!(ctx.div(&n1, &n2).unwrap().to_string(), "0.12499999984531250018");
//! ```
//!
//! π to any precision, checked against the reference digits:
//!
//! ```
//! use decimal_pi::{Oracle, PiSeries};
//!
//! let pi = PiSeries::new().compute(38).unwrap();
//! assert_eq!(pi.to_string(), "3.1415926535897932384626433832795028842");
//! Oracle::new().verify(&pi.to_string(), 38).unwrap();
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod context;
mod convert;
mod decimal;
mod error;
mod ops;
pub mod oracle;
mod parse;
pub mod pi;
mod uint;
pub mod workload;

#[cfg(feature = "serde")]
mod serde;

pub use crate::context::{Context, RoundingMode};
pub use crate::decimal::Decimal;
pub use crate::error::{DecimalConvertError, DecimalError, DecimalParseError, VerifyError};
pub use crate::oracle::{Oracle, PI_REFERENCE};
pub use crate::pi::{PartialSums, PiOutcome, PiSeries};
pub use crate::workload::{DecimalArithmetic, Native};

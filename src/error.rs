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

//! Decimal error definitions.

use thiserror::Error;

/// An error which can be returned when parsing a decimal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalParseError {
    /// Empty string.
    #[error("cannot parse number from empty string")]
    Empty,
    /// Invalid decimal.
    #[error("invalid number")]
    Invalid,
    /// Exponent is out of the scale range.
    #[error("exponent overflows number format")]
    Overflow,
}

/// An error which can be returned when a conversion between decimal and other type fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DecimalConvertError {
    /// Decimal has a fractional part.
    #[error("invalid number")]
    Invalid,
    /// Decimal is overflowed.
    #[error("numeric overflow")]
    Overflow,
}

/// An error which can be returned by context arithmetic and the pi series.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DecimalError {
    /// Divisor is zero.
    #[error("division by zero")]
    DivideByZero,
    /// Precision is not positive.
    #[error("invalid precision {0}, precision must be positive")]
    InvalidPrecision(i64),
    /// Precision exceeds the configured ceiling.
    #[error("precision {requested} exceeds maximum precision {max}")]
    ResourceExhausted { requested: u64, max: u64 },
    /// Operand is not a valid decimal.
    #[error(transparent)]
    Parse(#[from] DecimalParseError),
}

/// An error which can be returned when verifying a computed value against the reference.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum VerifyError {
    /// Computed value differs from the rounded reference.
    #[error("bad output:\nwant: {expected:?}\ngot : {actual:?}")]
    Mismatch { expected: String, actual: String },
    #[error(transparent)]
    Decimal(#[from] DecimalError),
}

impl From<DecimalParseError> for VerifyError {
    #[inline]
    fn from(e: DecimalParseError) -> Self {
        VerifyError::Decimal(DecimalError::Parse(e))
    }
}

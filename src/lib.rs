//! Storage-oriented bfloat16 scalar.
//!
//! [`BFloat16`] keeps the 8-bit exponent of an IEEE-754 `f32` and truncates
//! the mantissa to 7 bits, following the
//! [BF16 hardware numerics](https://en.wikipedia.org/wiki/Bfloat16_floating-point_format):
//! round to nearest even on narrowing, subnormals flushed to signed zero and
//! every NaN narrowed to a quiet NaN.
use std::num::ParseFloatError;

mod bfloat16;
pub mod logger;

pub use bfloat16::BFloat16;

/// Returned when a string is not a valid floating-point literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bfloat16 literal: {0}")]
pub struct ParseBFloat16Error(#[from] ParseFloatError);

#[derive(Debug, thiserror::Error)]
pub enum BFloatError {
    #[error(transparent)]
    Parse(#[from] ParseBFloat16Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type BFloatResult<T> = Result<T, BFloatError>;

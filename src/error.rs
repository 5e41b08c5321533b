//! Error type for field element construction and arithmetic.

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

/// Precondition violations reported by [`FieldElement`](crate::FieldElement).
///
/// Every variant is a caller mistake rather than a transient condition, so
/// nothing is retried internally and no partial result is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FieldError {
    /// The value does not lie in `[0, order)`.
    #[error("value {value} is not in the range [0, {order})")]
    OutOfRange { value: BigInt, order: BigInt },

    /// A binary operation was given elements of two different fields.
    #[error("operands belong to different fields: expected order {expected}, got {got}")]
    MismatchedField { expected: BigUint, got: BigUint },

    /// The divisor is the zero element.
    #[error("division by zero")]
    DivisionByZero,
}

/// Shorthand used throughout the crate.
pub type Result<T> = core::result::Result<T, FieldError>;

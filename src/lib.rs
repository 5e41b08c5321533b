//! Arithmetic over prime-order finite fields with arbitrary-precision values.
//!
//! The field order is a runtime [`BigUint`](num_bigint::BigUint), so one
//! [`FieldElement`] type serves every GF(p). All binary operations check that
//! their operands share an order and report failures through [`FieldError`].

pub mod error;
pub mod structures;
pub mod utils;

pub use error::{FieldError, Result};
pub use structures::element::FieldElement;
pub use utils::is_prime;

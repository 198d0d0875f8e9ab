//! Primitive types
//!
//! This module defines the numeric value types produced by the samplers
//! that have no counterpart in the standard library.
//!
//! Arbitrary-precision integers come from `num-bigint`. Arbitrary-precision
//! reals are provided here:
//! - `BigFloat`: a binary floating-point number with a configurable
//!   mantissa precision

mod bigfloat;

pub use bigfloat::{BigFloat, DEFAULT_PRECISION};

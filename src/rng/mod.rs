//! Random value generation module
//!
//! This module provides uniformly distributed random values drawn from the
//! operating system's cryptographic generator.
//!
//! It is built around [`BufferedReader`], a thread-safe buffer that
//! amortises calls to an [`EntropySource`], and a set of samplers that turn
//! raw bytes into values that are exactly uniform over their domain:
//! byte ranges, alphabets, integers of any size, and reals of fixed or
//! arbitrary precision.
//!
//! Design goals:
//! - Every output comes from a genuine entropy source, never a seeded PRNG
//! - Exact uniformity: rejection sampling wherever a modulo would bias
//! - Explicit failure: entropy errors are returned, never papered over
//! - Readers are explicit values; the process-wide default is optional

mod alphabet;
mod config;
mod error;
mod float;
mod global;
mod integer;
mod reader;
mod source;

pub use alphabet::{sample_from_alphabet, sample_string};
pub use config::{DEFAULT_CAPACITY, ReaderConfig};
pub use error::RandomError;
pub use float::{
    uniform_bigfloat, uniform_bigfloat_digits, uniform_bigfloat_digits_with_precision,
    uniform_bigfloat_with_precision, uniform_f64,
};
pub use global::default_reader;
pub(crate) use global::resolve;
pub use integer::{
    uniform_bigint, uniform_bigint_digits, uniform_biguint, uniform_int, uniform_int_range,
};
pub use reader::BufferedReader;
pub use source::{EntropySource, OsEntropy};

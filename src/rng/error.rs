//! Error types for random value generation.

use std::io;

use thiserror::Error;

/// Errors returned by the reader and the samplers.
///
/// Every validation error is raised before any entropy is consumed.
/// `EntropyUnavailable` is never retried or replaced by a fallback
/// generator.
#[derive(Debug, Error)]
pub enum RandomError {
    /// Buffer capacity or working precision must be greater than zero.
    #[error("size must be greater than 0")]
    InvalidSize,

    /// Requested output length must be greater than zero.
    #[error("length must be greater than 0")]
    InvalidLength,

    /// Byte range with a lower bound above its upper bound.
    #[error("invalid byte range [{lo}, {hi}]")]
    InvalidRange { lo: u8, hi: u8 },

    /// Integer interval whose lower bound is not below its exclusive upper
    /// bound.
    #[error("invalid interval [{min}, {max})")]
    InvalidInterval { min: i64, max: i64 },

    /// Exclusive upper bound must be greater than zero.
    #[error("maximum must be greater than 0")]
    InvalidBound,

    /// Alphabet has no symbols to choose from.
    #[error("alphabet must not be empty")]
    EmptyAlphabet,

    /// The operating system entropy source failed.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[source] io::Error),
}

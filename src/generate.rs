//! Random value generation API
//!
//! This module exposes one function per value shape. Each returns a
//! [`RandomValue`] and takes an optional reader: pass `Some(&reader)` to
//! draw from a reader you own, or `None` to use the process-wide
//! [`default_reader`](crate::rng::default_reader).
//!
//! Arguments are validated before any entropy is consumed, and a call
//! either returns a fully populated value or an error, never a partial
//! result.
//!
//! ```rust, ignore
//! use cryptal_rand::generate;
//!
//! let token = generate::alphanumeric(None, 32)?.to_text();
//! let roll = generate::int(None, 6)?.to_int()? + 1;
//! ```

use num_bigint::{BigInt, Sign};

use crate::charset;
use crate::primitives::BigFloat;
use crate::rng::{self, BufferedReader, RandomError, resolve};
use crate::value::RandomValue;

/// `n` random bytes.
pub fn bytes(reader: Option<&BufferedReader>, n: usize) -> Result<RandomValue, RandomError> {
    if n == 0 {
        return Err(RandomError::InvalidLength);
    }

    let reader = resolve(reader)?;
    Ok(RandomValue::Bytes(reader.bytes(n)?))
}

/// Uniform integer in `[0, max)`.
pub fn int(reader: Option<&BufferedReader>, max: i64) -> Result<RandomValue, RandomError> {
    if max <= 0 {
        return Err(RandomError::InvalidBound);
    }

    let reader = resolve(reader)?;
    Ok(RandomValue::Int(rng::uniform_int(reader, max)?))
}

/// Uniform integer in `[min, max)`.
pub fn int_range(reader: Option<&BufferedReader>, min: i64, max: i64) -> Result<RandomValue, RandomError> {
    if min >= max {
        return Err(RandomError::InvalidInterval { min, max });
    }

    let reader = resolve(reader)?;
    Ok(RandomValue::Int(rng::uniform_int_range(reader, min, max)?))
}

/// Uniform arbitrary-precision integer in `[0, max)`.
pub fn bigint(reader: Option<&BufferedReader>, max: &BigInt) -> Result<RandomValue, RandomError> {
    if max.sign() != Sign::Plus {
        return Err(RandomError::InvalidBound);
    }

    let reader = resolve(reader)?;
    Ok(RandomValue::BigInt(rng::uniform_bigint(reader, max)?))
}

/// Uniform integer with exactly `length` decimal digits.
pub fn bigint_digits(reader: Option<&BufferedReader>, length: usize) -> Result<RandomValue, RandomError> {
    if length == 0 {
        return Err(RandomError::InvalidLength);
    }

    let reader = resolve(reader)?;
    Ok(RandomValue::BigInt(rng::uniform_bigint_digits(reader, length)?))
}

/// Uniform double in `[0, max)`.
pub fn float(reader: Option<&BufferedReader>, max: f64) -> Result<RandomValue, RandomError> {
    if !(max > 0.0 && max.is_finite()) {
        return Err(RandomError::InvalidBound);
    }

    let reader = resolve(reader)?;
    Ok(RandomValue::Float(rng::uniform_f64(reader, max)?))
}

/// Uniform arbitrary-precision real in `[0, max)`.
pub fn bigfloat(reader: Option<&BufferedReader>, max: &BigFloat) -> Result<RandomValue, RandomError> {
    if !max.is_positive() {
        return Err(RandomError::InvalidBound);
    }

    let reader = resolve(reader)?;
    Ok(RandomValue::BigFloat(rng::uniform_bigfloat(reader, max)?))
}

/// Real with a `length`-digit integer part and an independent fraction.
pub fn bigfloat_digits(reader: Option<&BufferedReader>, length: usize) -> Result<RandomValue, RandomError> {
    if length == 0 {
        return Err(RandomError::InvalidLength);
    }

    let reader = resolve(reader)?;
    Ok(RandomValue::BigFloat(rng::uniform_bigfloat_digits(reader, length)?))
}

/// `n` bytes drawn uniformly from `set`.
///
/// `set` is a byte alphabet, but its length is not limited to 256: longer
/// sets (with repeated bytes) draw each index as a big integer. Alphabets of
/// other symbol types have no `RandomValue` shape; sample them with
/// [`rng::sample_from_alphabet`], passing
/// [`default_reader`](crate::rng::default_reader) for the shared reader.
pub fn from_set(reader: Option<&BufferedReader>, n: usize, set: &[u8]) -> Result<RandomValue, RandomError> {
    if n == 0 {
        return Err(RandomError::InvalidLength);
    }
    if set.is_empty() {
        return Err(RandomError::EmptyAlphabet);
    }

    let reader = resolve(reader)?;
    Ok(RandomValue::Bytes(rng::sample_from_alphabet(reader, n, set)?))
}

fn text_from(reader: Option<&BufferedReader>, n: usize, set: &[u8]) -> Result<RandomValue, RandomError> {
    if n == 0 {
        return Err(RandomError::InvalidLength);
    }

    let reader = resolve(reader)?;
    Ok(RandomValue::Text(rng::sample_string(reader, n, set)?))
}

/// `n` characters from `a-z`.
pub fn lower_chars(reader: Option<&BufferedReader>, n: usize) -> Result<RandomValue, RandomError> {
    text_from(reader, n, charset::LOWER)
}

/// `n` characters from `A-Z`.
pub fn upper_chars(reader: Option<&BufferedReader>, n: usize) -> Result<RandomValue, RandomError> {
    text_from(reader, n, charset::UPPER)
}

/// `n` characters from `!@#$%^&*`.
pub fn symbol_chars(reader: Option<&BufferedReader>, n: usize) -> Result<RandomValue, RandomError> {
    text_from(reader, n, charset::SYMBOLS)
}

/// `n` characters from `A-Z` and `a-z`.
pub fn letters(reader: Option<&BufferedReader>, n: usize) -> Result<RandomValue, RandomError> {
    text_from(reader, n, charset::LETTERS)
}

/// `n` characters from `A-Z`, `a-z` and `0-9`.
pub fn alphanumeric(reader: Option<&BufferedReader>, n: usize) -> Result<RandomValue, RandomError> {
    text_from(reader, n, charset::ALPHANUMERIC)
}

/// `n` characters from letters, digits and `!@#$%^&*`.
pub fn all_chars(reader: Option<&BufferedReader>, n: usize) -> Result<RandomValue, RandomError> {
    text_from(reader, n, charset::ALL)
}

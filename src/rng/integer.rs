//! Uniform integer sampling
//!
//! Integers in `[0, max)` are produced by rejection sampling over the
//! smallest power-of-two range covering `max`: draw `k = bits(max)` random
//! bits, reject the candidate if it is `>= max`, and draw again. Because
//! `max > 2^(k-1)`, a candidate is accepted with probability above 1/2, so
//! the expected number of draws is below 2 whatever the value of `max`.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use tracing::trace;

use super::error::RandomError;
use super::reader::BufferedReader;

/// Returns a uniform `BigUint` in `[0, max)`.
///
/// # Errors
/// `InvalidBound` if `max` is zero.
pub fn uniform_biguint(reader: &BufferedReader, max: &BigUint) -> Result<BigUint, RandomError> {
    if max.is_zero() {
        return Err(RandomError::InvalidBound);
    }

    let bits = max.bits();
    let len = bits.div_ceil(8) as usize;
    // Clears the bits of the leading byte that lie above `bits`.
    let mask = 0xFFu8 >> (len as u64 * 8 - bits);

    let mut buf = vec![0u8; len];
    let mut attempts = 1u32;

    loop {
        reader.read_exact(&mut buf)?;
        buf[0] &= mask;

        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < max {
            trace!(bits, attempts, "bigint sample accepted");
            return Ok(candidate);
        }

        attempts += 1;
    }
}

/// Returns a uniform `BigInt` in `[0, max)`.
///
/// # Errors
/// `InvalidBound` if `max <= 0`.
pub fn uniform_bigint(reader: &BufferedReader, max: &BigInt) -> Result<BigInt, RandomError> {
    if max.sign() != Sign::Plus {
        return Err(RandomError::InvalidBound);
    }

    let value = uniform_biguint(reader, max.magnitude())?;
    Ok(BigInt::from(value))
}

/// Returns a uniform `i64` in `[0, max)`.
///
/// Uses the same covering-range rejection as [`uniform_biguint`] on a
/// native word.
///
/// # Errors
/// `InvalidBound` if `max <= 0`.
pub fn uniform_int(reader: &BufferedReader, max: i64) -> Result<i64, RandomError> {
    if max <= 0 {
        return Err(RandomError::InvalidBound);
    }

    Ok(uniform_u64(reader, max as u64)? as i64)
}

/// Returns a uniform `i64` in `[min, max)`.
///
/// The span is computed in 128 bits, so every interval inside the `i64`
/// range is accepted, up to `[i64::MIN, i64::MAX)`.
///
/// # Errors
/// `InvalidInterval` if `min >= max`.
pub fn uniform_int_range(reader: &BufferedReader, min: i64, max: i64) -> Result<i64, RandomError> {
    if min >= max {
        return Err(RandomError::InvalidInterval { min, max });
    }

    let span = (i128::from(max) - i128::from(min)) as u64;
    let offset = uniform_u64(reader, span)?;

    Ok((i128::from(min) + i128::from(offset)) as i64)
}

/// Returns a uniform `u64` in `[0, max)`. Requires `max > 0`.
fn uniform_u64(reader: &BufferedReader, max: u64) -> Result<u64, RandomError> {
    let bits = u64::BITS - max.leading_zeros();
    let len = bits.div_ceil(8) as usize;
    let mask = u64::MAX >> (u64::BITS - bits);

    let mut buf = [0u8; 8];

    loop {
        reader.read_exact(&mut buf[8 - len..])?;

        let candidate = u64::from_be_bytes(buf) & mask;
        if candidate < max {
            return Ok(candidate);
        }
    }
}

/// Returns a uniform integer with exactly `length` decimal digits.
///
/// The result is uniform over `[10^(length-1), 10^length)`, so it never
/// has a leading zero. A length of 1 covers `1..=9`.
///
/// # Errors
/// `InvalidLength` if `length` is zero or does not fit a `u32` exponent.
pub fn uniform_bigint_digits(reader: &BufferedReader, length: usize) -> Result<BigInt, RandomError> {
    let exponent = u32::try_from(length).map_err(|_| RandomError::InvalidLength)?;
    if exponent == 0 {
        return Err(RandomError::InvalidLength);
    }

    let ten = BigUint::from(10u32);
    let low = ten.pow(exponent - 1);
    let high = ten.pow(exponent);

    let offset = uniform_biguint(reader, &(&high - &low))?;

    Ok(BigInt::from(offset + low))
}

/// Returns `2^bits` as a `BigUint`.
pub(crate) fn pow2(bits: u32) -> BigUint {
    BigUint::one() << bits
}

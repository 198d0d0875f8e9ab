//! Uniform real-valued sampling
//!
//! Two paths are provided:
//!
//! - [`uniform_f64`] draws 52 random mantissa bits and is appropriate when
//!   the bound fits comfortably in double precision.
//! - [`uniform_bigfloat`] draws a uniform `P`-bit integer `r` and returns
//!   `r / 2^P * max`, computed and rounded at precision `P` throughout.
//!
//! [`uniform_bigfloat_digits`] adds an independent integer part with a
//! fixed decimal digit count to a fractional part drawn in `[0, 1)`. The
//! sum is uniform within each part separately but is *not* a jointly
//! uniform real over `[10^(length-1), 10^length)`: a carry from the
//! fractional part never reaches the integer part's last digit.

use super::error::RandomError;
use super::integer::{pow2, uniform_biguint, uniform_bigint_digits};
use super::reader::BufferedReader;
use crate::primitives::{BigFloat, DEFAULT_PRECISION};

/// Exponent bits of `1.0_f64`; OR-ing a 52-bit mantissa into them gives a
/// double in `[1, 2)`.
const ONE_EXPONENT: u64 = 0x3FF0_0000_0000_0000;
const MANTISSA_MASK: u64 = (1 << 52) - 1;

/// Returns a uniform `f64` in `[0, max)`.
///
/// The low 52 bits of a random word become the mantissa of a double in
/// `[1, 2)`; subtracting one leaves one of `2^52` equally likely dyadic
/// values in `[0, 1)`, which is then scaled by `max`.
///
/// # Errors
/// `InvalidBound` unless `max` is finite and greater than zero.
pub fn uniform_f64(reader: &BufferedReader, max: f64) -> Result<f64, RandomError> {
    if !(max > 0.0 && max.is_finite()) {
        return Err(RandomError::InvalidBound);
    }

    let mut bytes = [0u8; 8];
    reader.read_exact(&mut bytes)?;

    let bits = u64::from_be_bytes(bytes) & MANTISSA_MASK;
    let unit = f64::from_bits(ONE_EXPONENT | bits) - 1.0;

    Ok(unit * max)
}

/// Returns a uniform `BigFloat` in `[0, max)` at [`DEFAULT_PRECISION`].
pub fn uniform_bigfloat(reader: &BufferedReader, max: &BigFloat) -> Result<BigFloat, RandomError> {
    uniform_bigfloat_with_precision(reader, max, DEFAULT_PRECISION)
}

/// Returns a uniform `BigFloat` in `[0, max)` with `precision` bits of
/// resolution.
///
/// # Errors
/// - `InvalidBound` if `max <= 0`
/// - `InvalidSize` if `precision` is zero
pub fn uniform_bigfloat_with_precision(
    reader: &BufferedReader,
    max: &BigFloat,
    precision: u32,
) -> Result<BigFloat, RandomError> {
    if !max.is_positive() {
        return Err(RandomError::InvalidBound);
    }
    if precision == 0 {
        return Err(RandomError::InvalidSize);
    }

    let ratio = unit_interval(reader, precision)?;

    Ok(ratio.mul(max, precision))
}

/// Returns a value whose integer part has exactly `length` decimal digits
/// plus an independent fractional part in `[0, 1)`, at
/// [`DEFAULT_PRECISION`].
pub fn uniform_bigfloat_digits(reader: &BufferedReader, length: usize) -> Result<BigFloat, RandomError> {
    uniform_bigfloat_digits_with_precision(reader, length, DEFAULT_PRECISION)
}

/// Precision-explicit form of [`uniform_bigfloat_digits`].
///
/// The integer part is rounded to `precision` bits before the sum, so for
/// lengths beyond roughly `precision * log10(2)` digits its low digits are
/// not preserved.
///
/// # Errors
/// - `InvalidLength` if `length` is zero
/// - `InvalidSize` if `precision` is zero
pub fn uniform_bigfloat_digits_with_precision(
    reader: &BufferedReader,
    length: usize,
    precision: u32,
) -> Result<BigFloat, RandomError> {
    if precision == 0 {
        return Err(RandomError::InvalidSize);
    }

    let integer = uniform_bigint_digits(reader, length)?;
    let fraction = unit_interval(reader, precision)?;

    Ok(BigFloat::from_bigint(&integer, precision).add(&fraction, precision))
}

/// Draws `r` uniform in `[0, 2^precision)` and returns `r / 2^precision`.
///
/// Both the draw and the scaling are exact.
fn unit_interval(reader: &BufferedReader, precision: u32) -> Result<BigFloat, RandomError> {
    let numerator = uniform_biguint(reader, &pow2(precision))?;

    Ok(BigFloat::from_biguint(numerator, precision).mul_pow2(-i64::from(precision)))
}

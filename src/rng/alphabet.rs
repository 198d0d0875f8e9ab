//! Uniform sampling from an alphabet
//!
//! An alphabet is an ordered, non-empty sequence of symbols. Sampling maps
//! uniformly distributed indices onto it, choosing one of three strategies
//! by alphabet size `S` so that no index is favoured:
//!
//! - `S > 256`: an index does not fit in a byte; each symbol costs one
//!   big-integer draw in `[0, S)`.
//! - `S == 256`: every byte value is an index; raw bytes are used as is.
//! - `S < 256`: bytes are restricted to `[0, max_byte]`, a range whose size
//!   is a multiple of `S`, before reducing modulo `S`. Reducing an
//!   unrestricted byte would make the low indices more likely whenever `S`
//!   does not divide 256.

use num_bigint::BigUint;

use super::error::RandomError;
use super::integer::uniform_biguint;
use super::reader::BufferedReader;

/// Returns the largest byte value such that `max_byte + 1` is a multiple
/// of `size`. Requires `1 <= size < 256`.
fn max_byte(size: usize) -> u8 {
    u8::MAX - (256 % size) as u8
}

/// Draws `n` symbols uniformly and independently from `alphabet`.
///
/// # Errors
/// - `InvalidLength` if `n` is zero
/// - `EmptyAlphabet` if `alphabet` is empty
pub fn sample_from_alphabet<T: Clone>(
    reader: &BufferedReader,
    n: usize,
    alphabet: &[T],
) -> Result<Vec<T>, RandomError> {
    if n == 0 {
        return Err(RandomError::InvalidLength);
    }
    if alphabet.is_empty() {
        return Err(RandomError::EmptyAlphabet);
    }

    let size = alphabet.len();

    if size > 256 {
        let bound = BigUint::from(size);
        let mut out = Vec::with_capacity(n);

        for _ in 0..n {
            let index = uniform_biguint(reader, &bound)?;
            // index < size, so it is a single digit (or none for zero).
            let index = index.iter_u64_digits().next().unwrap_or(0) as usize;
            out.push(alphabet[index].clone());
        }

        return Ok(out);
    }

    let mut indices = vec![0u8; n];

    if size == 256 {
        reader.read_exact(&mut indices)?;
    } else {
        reader.read_range(&mut indices, 0, max_byte(size))?;
    }

    Ok(indices
        .into_iter()
        .map(|byte| alphabet[byte as usize % size].clone())
        .collect())
}

/// Draws `n` characters from an ASCII byte alphabet into a `String`.
///
/// Bytes are mapped to `char` one to one, so non-ASCII bytes come out as
/// their Latin-1 code points.
pub fn sample_string(reader: &BufferedReader, n: usize, alphabet: &[u8]) -> Result<String, RandomError> {
    let symbols = sample_from_alphabet(reader, n, alphabet)?;
    Ok(symbols.into_iter().map(char::from).collect())
}

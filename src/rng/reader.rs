//! Buffered entropy reader
//!
//! This module implements `BufferedReader`, a thread-safe byte buffer that
//! amortises calls to an [`EntropySource`] and serves random bytes one at
//! a time, in bulk, or restricted to a byte range.
//!
//! The reader owns a fixed-capacity buffer and a cursor. Bytes before the
//! cursor have been handed out and are never served again. When the cursor
//! reaches the end of the buffer, the whole buffer is refilled from the
//! source before any further byte is read.
//!
//! All operations run under a single lock per reader. Concurrent callers
//! sharing one instance observe a total order over byte consumption and
//! refills: no two callers receive the same byte, and no read interleaves
//! with a refill. Independent readers share no state.

use std::fmt;
use std::io;

use parking_lot::Mutex;
use rand_core::{CryptoRng, RngCore};
use tracing::{debug, error, trace};
use zeroize::Zeroize;

use super::config::ReaderConfig;
use super::error::RandomError;
use super::source::{EntropySource, OsEntropy};

/// Thread-safe buffered reader over an entropy source.
///
/// Share it by reference (or behind an `Arc`) across threads; every method
/// takes `&self`.
pub struct BufferedReader {
    inner: Mutex<Inner>,
    capacity: usize,
}

struct Inner {
    buffer: Box<[u8]>,
    /// Index of the next unconsumed byte, in `0..=buffer.len()`.
    cursor: usize,
    source: Box<dyn EntropySource>,
}

impl Inner {
    /// Replaces the entire buffer from the source and rewinds the cursor.
    ///
    /// On failure the cursor is left where it was, so an exhausted buffer
    /// stays exhausted.
    fn refill(&mut self) -> Result<(), RandomError> {
        if let Err(err) = self.source.fill(&mut self.buffer) {
            error!(error = %err, capacity = self.buffer.len(), "entropy source failed");
            return Err(RandomError::EntropyUnavailable(err));
        }

        self.cursor = 0;
        trace!(capacity = self.buffer.len(), "entropy buffer refilled");

        Ok(())
    }

    fn next_byte(&mut self) -> Result<u8, RandomError> {
        if self.cursor == self.buffer.len() {
            self.refill()?;
        }

        let byte = self.buffer[self.cursor];
        self.cursor += 1;

        Ok(byte)
    }
}

impl BufferedReader {
    /// Opens a reader backed by the operating system's generator.
    ///
    /// The buffer is filled once before returning.
    ///
    /// # Errors
    /// - `InvalidSize` if the configured capacity is zero
    /// - `EntropyUnavailable` if the initial fill fails
    pub fn open(config: ReaderConfig) -> Result<Self, RandomError> {
        Self::with_source(config, OsEntropy)
    }

    /// Opens a reader backed by a caller-supplied entropy source.
    pub fn with_source<S>(config: ReaderConfig, source: S) -> Result<Self, RandomError>
    where
        S: EntropySource + 'static,
    {
        config.validate()?;

        let mut inner = Inner {
            buffer: vec![0u8; config.capacity].into_boxed_slice(),
            cursor: config.capacity,
            source: Box::new(source),
        };
        inner.refill()?;

        debug!(capacity = config.capacity, "entropy reader opened");

        Ok(Self {
            inner: Mutex::new(inner),
            capacity: config.capacity,
        })
    }

    /// Size of the internal buffer, in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reads a single random byte, refilling the buffer if it is exhausted.
    pub fn read_byte(&self) -> Result<u8, RandomError> {
        self.inner.lock().next_byte()
    }

    /// Fills `dest` completely with random bytes.
    ///
    /// The current buffer is drained first, then refilled as many times as
    /// needed. The lock is held for the whole call, so the bytes written are
    /// contiguous in the reader's stream. An empty `dest` returns at once
    /// without touching the buffer.
    pub fn read_exact(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        if dest.is_empty() {
            return Ok(());
        }

        let mut inner = self.inner.lock();
        let mut copied = 0;

        while copied < dest.len() {
            if inner.cursor == inner.buffer.len() {
                inner.refill()?;
            }

            let available = inner.buffer.len() - inner.cursor;
            let to_copy = available.min(dest.len() - copied);
            let start = inner.cursor;

            dest[copied..copied + to_copy].copy_from_slice(&inner.buffer[start..start + to_copy]);

            inner.cursor += to_copy;
            copied += to_copy;
        }

        Ok(())
    }

    /// Fills `dest` with random bytes uniformly distributed over `[lo, hi]`.
    ///
    /// Each position is produced by rejection sampling: bytes outside the
    /// range are discarded and another is drawn. A single draw is accepted
    /// with probability `(hi - lo + 1) / 256`, so the expected number of
    /// underlying reads per output byte is at most `256 / (hi - lo + 1)`.
    ///
    /// # Errors
    /// `InvalidRange` if `lo > hi`, checked before any byte is consumed.
    pub fn read_range(&self, dest: &mut [u8], lo: u8, hi: u8) -> Result<(), RandomError> {
        if lo > hi {
            return Err(RandomError::InvalidRange { lo, hi });
        }
        if dest.is_empty() {
            return Ok(());
        }

        let mut inner = self.inner.lock();

        for slot in dest.iter_mut() {
            *slot = loop {
                let byte = inner.next_byte()?;
                if (lo..=hi).contains(&byte) {
                    break byte;
                }
            };
        }

        Ok(())
    }

    /// Returns `n` fresh random bytes.
    ///
    /// # Errors
    /// `InvalidLength` if `n` is zero.
    pub fn bytes(&self, n: usize) -> Result<Vec<u8>, RandomError> {
        if n == 0 {
            return Err(RandomError::InvalidLength);
        }

        let mut out = vec![0u8; n];
        self.read_exact(&mut out)?;

        Ok(out)
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.buffer.zeroize();
    }
}

impl fmt::Debug for BufferedReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedReader")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl io::Read for &BufferedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match BufferedReader::read_exact(*self, buf) {
            Ok(()) => Ok(buf.len()),
            Err(RandomError::EntropyUnavailable(err)) => Err(err),
            Err(err) => Err(io::Error::other(err)),
        }
    }
}

impl RngCore for &BufferedReader {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    /// # Panics
    /// Panics if the entropy source fails. Use `try_fill_bytes` to handle
    /// that case.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = self.try_fill_bytes(dest) {
            panic!("entropy source unavailable: {err}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        BufferedReader::read_exact(*self, dest).map_err(rand_core::Error::new)
    }
}

impl CryptoRng for &BufferedReader {}

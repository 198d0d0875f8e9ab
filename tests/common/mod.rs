#![allow(dead_code)]

use std::io;

use cryptal_rand::rng::{BufferedReader, EntropySource, ReaderConfig};

/// Emits 0, 1, 2, ..., 255, 0, 1, ... across fills.
pub struct CyclingSource {
    next: u8,
}

impl EntropySource for CyclingSource {
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()> {
        for byte in dest.iter_mut() {
            *byte = self.next;
            self.next = self.next.wrapping_add(1);
        }
        Ok(())
    }
}

/// Repeats a fixed script of bytes forever.
pub struct ScriptedSource {
    script: Vec<u8>,
    pos: usize,
}

impl EntropySource for ScriptedSource {
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()> {
        for byte in dest.iter_mut() {
            *byte = self.script[self.pos];
            self.pos = (self.pos + 1) % self.script.len();
        }
        Ok(())
    }
}

/// Writes an incrementing big-endian `u32` into every 4-byte chunk.
pub struct CounterSource {
    next: u32,
}

impl EntropySource for CounterSource {
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()> {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next.to_be_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
            self.next += 1;
        }
        Ok(())
    }
}

/// Succeeds for `fills` calls, then fails forever.
pub struct FailAfter {
    fills: usize,
}

impl EntropySource for FailAfter {
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()> {
        if self.fills == 0 {
            return Err(io::Error::other("entropy exhausted"));
        }
        self.fills -= 1;
        dest.fill(0xA5);
        Ok(())
    }
}

pub fn cycling_reader(capacity: usize) -> BufferedReader {
    BufferedReader::with_source(ReaderConfig::with_capacity(capacity), CyclingSource { next: 0 })
        .unwrap()
}

pub fn scripted_reader(script: &[u8]) -> BufferedReader {
    let source = ScriptedSource {
        script: script.to_vec(),
        pos: 0,
    };
    BufferedReader::with_source(ReaderConfig::with_capacity(script.len()), source).unwrap()
}

pub fn constant_reader(byte: u8) -> BufferedReader {
    scripted_reader(&[byte])
}

pub fn counter_reader() -> BufferedReader {
    BufferedReader::with_source(ReaderConfig::with_capacity(4), CounterSource { next: 0 }).unwrap()
}

pub fn failing_reader(capacity: usize, fills: usize) -> Result<BufferedReader, cryptal_rand::rng::RandomError> {
    BufferedReader::with_source(ReaderConfig::with_capacity(capacity), FailAfter { fills })
}

pub fn os_reader() -> BufferedReader {
    BufferedReader::open(ReaderConfig::default()).unwrap()
}

/// Chi-square statistic of observed counts against a uniform expectation.
pub fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Loose upper bound for a chi-square statistic with `df` degrees of
/// freedom; a uniform sampler exceeds it with negligible probability.
pub fn chi_square_limit(df: usize) -> f64 {
    let df = df as f64;
    df + 10.0 * (2.0 * df).sqrt() + 10.0
}

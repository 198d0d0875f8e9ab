//! Entropy sources
//!
//! An entropy source is the trust root of every distribution produced by
//! this crate. It is treated as a blocking, infinite stream of unbiased
//! bytes that may fail outright but never returns short.

use std::io;

use crate::os::sys_random;

/// A provider of cryptographically unbiased random bytes.
///
/// Implementations must either fill `dest` completely or return an error.
/// They are only ever called by a [`BufferedReader`](super::BufferedReader)
/// while it holds its lock, so they need not be `Sync`.
pub trait EntropySource: Send {
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()>;
}

/// Entropy from the operating system's cryptographic generator.
///
/// Linux uses `getrandom(2)`, macOS `arc4random_buf`, Windows
/// `BCryptGenRandom`, other Unix systems `/dev/urandom`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()> {
        sys_random(dest)
    }
}

impl<F> EntropySource for F
where
    F: FnMut(&mut [u8]) -> io::Result<()> + Send,
{
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()> {
        self(dest)
    }
}

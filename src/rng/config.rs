//! Reader configuration.

use super::error::RandomError;

/// Buffer capacity used by [`ReaderConfig::default`], in bytes.
pub const DEFAULT_CAPACITY: usize = 256;

/// Configuration for a [`BufferedReader`](super::BufferedReader).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Size of the reusable entropy buffer, in bytes (minimum 1).
    ///
    /// Larger buffers amortise more system calls per refill at the cost of
    /// holding more unconsumed random bytes in memory.
    pub capacity: usize,
}

impl ReaderConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    pub(crate) fn validate(&self) -> Result<(), RandomError> {
        if self.capacity == 0 {
            return Err(RandomError::InvalidSize);
        }

        Ok(())
    }
}

impl Default for ReaderConfig {
    /// Default configuration: 256-byte buffer.
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

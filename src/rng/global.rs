//! Process-wide default reader.

use once_cell::sync::OnceCell;
use tracing::debug;

use super::config::ReaderConfig;
use super::error::RandomError;
use super::reader::BufferedReader;

static DEFAULT_READER: OnceCell<BufferedReader> = OnceCell::new();

/// Returns the shared reader used when callers do not supply their own.
///
/// The reader is opened on first use with [`ReaderConfig::default`]. If
/// opening fails the error is returned and the next call tries again; a
/// process that cannot obtain entropy gets an error, never a weaker
/// generator.
pub fn default_reader() -> Result<&'static BufferedReader, RandomError> {
    DEFAULT_READER.get_or_try_init(|| {
        debug!("initialising default entropy reader");
        BufferedReader::open(ReaderConfig::default())
    })
}

/// Uses `reader` when given, the default reader otherwise.
pub(crate) fn resolve(reader: Option<&BufferedReader>) -> Result<&BufferedReader, RandomError> {
    match reader {
        Some(reader) => Ok(reader),
        None => default_reader(),
    }
}

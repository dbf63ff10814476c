//! Configuration for the streaming filter driver.

use crate::error::{FilterError, Result};

/// Nominal number of samples pulled from the input per read.
///
/// Matches the granularity the filter was originally deployed with. Chunk
/// size is purely a throughput parameter; output is identical for any value.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Streaming driver configuration
///
/// Use `ProcessingConfig::default()` for sensible defaults.
///
/// # Example
/// ```
/// use lp9k::config::ProcessingConfig;
///
/// let mut config = ProcessingConfig::default();
/// config.chunk_size = 1024;
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    /// Nominal samples per input read; the final chunk of a stream may be
    /// shorter and is processed as-is
    pub chunk_size: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ProcessingConfig {
    /// Check that the configuration is usable.
    ///
    /// # Errors
    /// Returns `FilterError::Config` if `chunk_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(FilterError::Config(
                "chunk_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

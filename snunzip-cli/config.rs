//! Configuration types and constants for the snunzip CLI.

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Suffix carried by Snappy framed files
pub const SNAPPY_SUFFIX: &str = ".snappy";

/// Suffix appended to outputs whose input lacks [`SNAPPY_SUFFIX`]
pub const UNCOMPRESSED_SUFFIX: &str = ".uncompressed";

/// Configuration for CLI operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Suffix stripped from input names to derive the output name
    pub suffix: String,
    /// Suffix appended when the input does not end with `suffix`
    pub fallback_suffix: String,
    /// Capacity of the read and write buffers
    pub buffer_size: usize,
    /// Show a percentage indicator on stderr while decompressing
    pub progress: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            suffix: SNAPPY_SUFFIX.to_string(),
            fallback_suffix: UNCOMPRESSED_SUFFIX.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            progress: true,
        }
    }
}

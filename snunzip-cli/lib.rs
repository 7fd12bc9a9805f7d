//! Library behind the `snunzip` command-line tool.
//!
//! `snunzip` decompresses Snappy framed files next to their inputs. Every
//! command-line argument is treated as a wildcard pattern; each matching file
//! is decoded into a sibling file named by stripping the `.snappy` suffix (or
//! appending `.uncompressed` when there is none). Existing files are never
//! overwritten, and a failed decode never leaves a partial output behind.

pub mod config;
pub mod error;
pub mod io;
pub mod operations;
pub mod process;
pub mod progress;
pub mod resolve;

pub use config::{CliConfig, DEFAULT_BUFFER_SIZE, SNAPPY_SUFFIX, UNCOMPRESSED_SUFFIX};
pub use error::{CliError, Error, Result, Warning};
pub use io::generate_output_filename;
pub use operations::decompress_stream;
pub use process::{format_diagnostic, process_file, run_cli, RunSummary};
pub use progress::ProgressReader;
pub use resolve::{expand_pattern, resolve_pattern, Resolution};

//! High-level file processing and CLI orchestration.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::config::CliConfig;
use crate::error::{CliError, Error, Result};
use crate::io::{display_name, generate_output_filename, input_size, open_input, open_output};
use crate::operations::decompress_stream;
use crate::progress::ProgressReader;
use crate::resolve::{resolve_pattern, Resolution};

/// Counters describing a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files decompressed successfully
    pub succeeded: usize,
    /// Files that were attempted and failed
    pub failed: usize,
    /// Patterns that matched no file
    pub unmatched: usize,
}

/// Decompresses a single file next to itself.
///
/// The workflow is:
///
/// 1. Opens the input file
/// 2. Derives the output filename
/// 3. Creates the output, refusing to overwrite an existing file
/// 4. Streams the input through the Snappy decoder, with progress on stderr
///    when the input size is known
/// 5. Prints a success line on stdout
///
/// If decoding fails, the partially written output is removed before the
/// error is returned. The input file is never modified.
///
/// # Returns
///
/// The path of the written output file.
///
/// # Errors
///
/// Returns an error if the input cannot be opened, the output name cannot be
/// derived, the output exists or cannot be created, or decompression fails.
pub fn process_file(input_path: &Path, config: &CliConfig) -> Result<PathBuf> {
    let input = open_input(input_path)?;
    let output_path = generate_output_filename(input_path, config)?;
    let output = open_output(&output_path)?;

    let total = if config.progress {
        input_size(&input)
    } else {
        None
    };

    let result = match total {
        Some(total) => {
            let mut progress = ProgressReader::new(input, total, display_name(input_path));
            let result = decompress_stream(&mut progress, &output, config.buffer_size);
            match result {
                Ok(_) => progress.finish(),
                Err(_) => progress.interrupt(),
            }
            result
        }
        None => decompress_stream(input, &output, config.buffer_size),
    };

    // Close the output before it may be removed
    drop(output);

    match result {
        Ok(written) => {
            debug!(
                "{}: wrote {written} bytes to {}",
                input_path.display(),
                output_path.display()
            );
            println!(
                "Successfully decompressed {} to {}",
                input_path.display(),
                output_path.display()
            );
            Ok(output_path)
        }
        Err(source) => {
            if let Err(err) = std::fs::remove_file(&output_path) {
                error!(
                    "failed to remove partial output {}: {err}",
                    output_path.display()
                );
            }
            Err(CliError::from(Error::Decompression {
                path: input_path.to_path_buf(),
                source,
            }))
        }
    }
}

/// Formats a diagnostic line for stderr.
pub fn format_diagnostic(program: &str, err: &CliError) -> String {
    match err {
        CliError::Warning(warning) => format!("{program}: Warning: {warning}"),
        CliError::Error(error) => format!("{program}: Error: {error}"),
    }
}

/// Runs the CLI over every command-line pattern.
///
/// Each pattern is resolved and every resulting path is processed in order.
/// Failures are printed to stderr and never stop the run.
///
/// # Parameters
///
/// * `patterns` - Arguments as given on the command line
/// * `config` - CLI configuration
/// * `program` - Program name used to prefix diagnostics (e.g. "snunzip")
pub fn run_cli<P: AsRef<OsStr>>(patterns: &[P], config: &CliConfig, program: &str) -> RunSummary {
    let mut summary = RunSummary::default();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let resolution = resolve_pattern(pattern);
        match &resolution {
            Resolution::Matches(_) => {}
            Resolution::Literal { warning, .. } => {
                eprintln!(
                    "{}",
                    format_diagnostic(program, &CliError::from(warning.clone()))
                );
            }
            Resolution::NoMatch => {
                let err = CliError::from(Error::NoMatch {
                    pattern: pattern.to_string_lossy().into_owned(),
                });
                eprintln!("{}", format_diagnostic(program, &err));
                summary.unmatched += 1;
                continue;
            }
        }

        for path in resolution.paths() {
            match process_file(path, config) {
                Ok(_) => summary.succeeded += 1,
                Err(err) => {
                    eprintln!(
                        "{program}: Failed to process {}: {err}",
                        path.display()
                    );
                    summary.failed += 1;
                }
            }
        }
    }

    info!(
        "{} succeeded, {} failed, {} pattern(s) without matches",
        summary.succeeded, summary.failed, summary.unmatched
    );

    summary
}

//! File I/O operations and path manipulation for the snunzip CLI.

use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::CliConfig;
use crate::error::{CliError, Error, Result};


/// Generates the output filename for a compressed input.
///
/// If `input` ends with `config.suffix`, that suffix is removed exactly once.
/// Otherwise `config.fallback_suffix` is appended, so the output never reuses
/// the input name.
///
/// # Errors
///
/// Returns [`Error::InvalidOutputFilename`] when the file name consists of the
/// suffix alone and stripping it would leave nothing to create.
pub fn generate_output_filename(input: &Path, config: &CliConfig) -> Result<PathBuf> {
    let suffix = config.suffix.as_str();

    if !suffix.is_empty() {
        if input.file_name() == Some(OsStr::new(suffix)) {
            return Err(CliError::from(Error::InvalidOutputFilename {
                path: input.to_path_buf(),
            }));
        }

        if let Some(stripped) = strip_os_suffix(input.as_os_str(), suffix) {
            return Ok(PathBuf::from(stripped));
        }
    }

    let mut output = input.as_os_str().to_os_string();
    output.push(&config.fallback_suffix);
    Ok(PathBuf::from(output))
}

/// Removes `suffix` from the end of `s`, working on raw bytes where possible.
#[cfg(unix)]
fn strip_os_suffix<'a>(s: &'a OsStr, suffix: &str) -> Option<&'a OsStr> {
    use std::os::unix::ffi::OsStrExt;

    s.as_bytes()
        .strip_suffix(suffix.as_bytes())
        .map(OsStr::from_bytes)
}

#[cfg(not(unix))]
fn strip_os_suffix<'a>(s: &'a OsStr, suffix: &str) -> Option<&'a OsStr> {
    s.to_str()
        .and_then(|s| s.strip_suffix(suffix))
        .map(OsStr::new)
}

/// Opens an input file for reading.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| {
        CliError::from(Error::OpenInput {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Creates the output file, refusing to touch an existing one.
///
/// # Errors
///
/// Returns an error in the following cases:
///
/// - Something already exists at `path` ([`Error::OutputExists`])
/// - The file cannot be created due to permissions, invalid path, etc.
///   ([`Error::CreateOutput`])
pub fn open_output(path: &Path) -> Result<File> {
    if path.exists() {
        return Err(CliError::from(Error::OutputExists {
            path: path.to_path_buf(),
        }));
    }

    // create_new also catches a file that appeared after the check above
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| {
            let err = if source.kind() == io::ErrorKind::AlreadyExists {
                Error::OutputExists {
                    path: path.to_path_buf(),
                }
            } else {
                Error::CreateOutput {
                    path: path.to_path_buf(),
                    source,
                }
            };
            CliError::from(err)
        })
}

/// Returns the size of an open file, or `None` if it cannot be determined.
pub fn input_size(file: &File) -> Option<u64> {
    match file.metadata() {
        Ok(meta) => Some(meta.len()),
        Err(err) => {
            debug!("input size unavailable, progress disabled: {err}");
            None
        }
    }
}

/// Name shown in progress output: the base name of `path`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

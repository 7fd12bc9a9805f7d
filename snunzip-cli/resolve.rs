//! Expansion of command-line arguments into input paths.
//!
//! Shells usually expand wildcards before the program sees them, but quoted
//! patterns (or shells that leave unmatched patterns alone) reach us verbatim,
//! so every argument is matched against the filesystem once more.

use std::ffi::OsStr;
use std::path::PathBuf;

use glob::{glob_with, MatchOptions};
use log::debug;

use crate::error::Warning;

/// `*` and `?` never cross a path separator; dot files are matched like any other.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Outcome of resolving one command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The pattern matched at least one path
    Matches(Vec<PathBuf>),
    /// The argument is not a valid pattern and stands for itself
    Literal {
        /// The argument as a path
        path: PathBuf,
        /// Why pattern matching was abandoned
        warning: Warning,
    },
    /// The pattern is valid but matched nothing
    NoMatch,
}

impl Resolution {
    /// Paths to hand to the decompressor, in matching order.
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Resolution::Matches(paths) => paths,
            Resolution::Literal { path, .. } => std::slice::from_ref(path),
            Resolution::NoMatch => &[],
        }
    }
}

/// Matches `pattern` against the filesystem.
///
/// Entries that cannot be read while walking (for example directories without
/// read permission) are skipped.
///
/// # Errors
///
/// Returns [`Warning::InvalidPattern`] if `pattern` is not syntactically valid.
pub fn expand_pattern(pattern: &str) -> std::result::Result<Vec<PathBuf>, Warning> {
    let entries = glob_with(pattern, MATCH_OPTIONS).map_err(|err| Warning::InvalidPattern {
        pattern: pattern.to_string(),
        message: format!("{} at position {}", err.msg, err.pos),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => paths.push(path),
            Err(err) => debug!("skipping unreadable entry while expanding {pattern}: {err}"),
        }
    }

    Ok(paths)
}

/// Resolves a command-line argument into the paths it denotes.
///
/// An invalid pattern falls back to the argument itself instead of failing.
/// So does an argument that is not valid UTF-8, since it cannot be matched.
pub fn resolve_pattern<P: AsRef<OsStr>>(pattern: P) -> Resolution {
    let pattern = pattern.as_ref();
    let Some(pattern) = pattern.to_str() else {
        return Resolution::Literal {
            path: PathBuf::from(pattern),
            warning: Warning::UnmatchablePattern {
                pattern: pattern.to_string_lossy().into_owned(),
            },
        };
    };

    match expand_pattern(pattern) {
        Ok(paths) if paths.is_empty() => Resolution::NoMatch,
        Ok(paths) => {
            debug!("{pattern} expanded to {} path(s)", paths.len());
            Resolution::Matches(paths)
        }
        Err(warning) => Resolution::Literal {
            path: PathBuf::from(pattern),
            warning,
        },
    }
}

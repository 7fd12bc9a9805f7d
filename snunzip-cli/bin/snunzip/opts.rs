//! Command line argument parsing for the snunzip utility.

use std::ffi::OsString;

use clap::Parser;

/// Snappy decompression utility
///
/// Each argument is expanded as a wildcard pattern. Matching files ending in
/// `.snappy` are decompressed to the same name without the suffix; other files
/// get `.uncompressed` appended. Existing files are never overwritten.
#[derive(Debug, Parser)]
#[command(
    name = "snunzip",
    version,
    about = "Decompress .snappy files",
    after_help = "Example: snunzip 'abc*'"
)]
pub struct SnunzipOpts {
    /// Files or wildcard patterns to decompress
    #[arg(
        value_name = "FILE",
        required = true,
        value_parser = clap::value_parser!(OsString)
    )]
    patterns: Vec<OsString>,
}

impl SnunzipOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Patterns supplied on the command line
    pub fn patterns(&self) -> &[OsString] {
        &self.patterns
    }
}

//! Snappy decompression utility
//!
//! Decompresses every file matching the given patterns into a sibling file.
//! Per-file failures are reported on stderr but never change the exit status;
//! only a missing argument list is fatal.

mod opts;

use log::debug;

use opts::SnunzipOpts;

use snunzip_cli::{run_cli, CliConfig};

const PROGRAM_NAME: &str = "snunzip";

fn main() {
    env_logger::init();

    let opts = SnunzipOpts::parse();
    let config = CliConfig::default();

    let summary = run_cli(opts.patterns(), &config, PROGRAM_NAME);
    debug!("finished: {summary:?}");
}

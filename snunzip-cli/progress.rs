//! Percentage progress display for streaming reads.

use std::io::{self, Read, Write};

/// Pass-through reader that counts bytes and reports a percentage.
///
/// Whenever the integer percentage of `total` changes, the current line of
/// the sink is rewritten with `\rDecompressing <name>: <pct>%`. Nothing is
/// printed when `total` is zero.
#[derive(Debug)]
pub struct ProgressReader<R, W = io::Stderr> {
    inner: R,
    sink: W,
    name: String,
    total: u64,
    read: u64,
    last_percent: Option<u64>,
}

impl<R> ProgressReader<R> {
    /// Creates a reader reporting to stderr.
    pub fn new(inner: R, total: u64, name: impl Into<String>) -> Self {
        Self::with_sink(inner, total, name, io::stderr())
    }
}

impl<R, W: Write> ProgressReader<R, W> {
    /// Creates a reader reporting to `sink`.
    pub fn with_sink(inner: R, total: u64, name: impl Into<String>, sink: W) -> Self {
        Self {
            inner,
            sink,
            name: name.into(),
            total,
            read: 0,
            last_percent: None,
        }
    }

    /// Number of bytes read from the inner reader so far.
    pub fn bytes_read(&self) -> u64 {
        self.read
    }

    /// Expected number of bytes.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Current percentage, or `None` when the total is unknown.
    pub fn percent(&self) -> Option<u64> {
        (self.total > 0).then(|| self.read.saturating_mul(100) / self.total)
    }

    /// Terminates the progress line with a final 100% update.
    ///
    /// Intermediate updates may have been coalesced, so the line is always
    /// rewritten here.
    pub fn finish(&mut self) {
        if self.total > 0 {
            // Progress output is best effort
            let _ = writeln!(self.sink, "\rDecompressing {}: {:3}%", self.name, 100);
            let _ = self.sink.flush();
        }
    }

    /// Ends a progress line left open by an interrupted read.
    pub fn interrupt(&mut self) {
        if self.last_percent.is_some() {
            let _ = writeln!(self.sink);
            let _ = self.sink.flush();
        }
    }

    /// Consumes the wrapper, returning the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn report(&mut self) {
        let Some(percent) = self.percent() else {
            return;
        };
        if self.last_percent != Some(percent) {
            self.last_percent = Some(percent);
            let _ = write!(self.sink, "\rDecompressing {}: {:3}%", self.name, percent);
            let _ = self.sink.flush();
        }
    }
}

impl<R: Read, W: Write> Read for ProgressReader<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.read += n as u64;
            self.report();
        }
        Ok(n)
    }
}

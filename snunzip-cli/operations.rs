//! Decompression operations for the snunzip CLI.

use std::io::{self, BufWriter, Read, Write};

use snap::read::FrameDecoder;

/// Streams Snappy framed data from `input` into `output`.
///
/// The output is buffered with `buffer_size` bytes and flushed before
/// returning.
///
/// # Returns
///
/// The number of decompressed bytes written.
///
/// # Errors
///
/// Returns an [`io::Error`] if the input is not valid Snappy framed data, if
/// reading fails, or if writing to `output` fails.
pub fn decompress_stream<R: Read, W: Write>(
    input: R,
    output: W,
    buffer_size: usize,
) -> io::Result<u64> {
    let mut decoder = FrameDecoder::new(input);
    let mut writer = BufWriter::with_capacity(buffer_size, output);

    let written = io::copy(&mut decoder, &mut writer)?;
    writer.flush()?;

    Ok(written)
}

//! The `io` module provides `std::io::Read` adapters that turn raw input
//! bytes into UTF-8 on-the-fly, so the delimited reader never sees anything
//! but UTF-8.

use std::io::Read;

use encoding_rs::{CoderResult, Encoding, SHIFT_JIS};
use tracing::warn;

use crate::InputEncoding;

mod lazy_quotes;

pub use lazy_quotes::LazyQuoteReader;

const DEFAULT_BUF_SIZE: usize = 8192;

/// A `std::io::Read` wrapper that transcodes a legacy encoding to UTF-8 while reading.
///
/// Malformed input sequences are replaced with U+FFFD; the reader itself never
/// reports an encoding error.
pub struct DecodingReader<R> {
    inner: R,
    decoder: encoding_rs::Decoder,
    input_buf: Box<[u8]>,
    input_pos: usize,
    input_len: usize,
    output_buf: Box<[u8]>,
    output_pos: usize,
    output_size: usize,
    end_of_stream: bool,
    finished: bool,
    reported_replacement: bool,
}

impl<R: Read> DecodingReader<R> {
    /// Wrap `inner`, decoding Shift_JIS input.
    pub fn shift_jis(inner: R) -> Self {
        Self::new(inner, SHIFT_JIS, DEFAULT_BUF_SIZE)
    }

    /// Wrap `inner`, decoding `encoding` with an explicit input buffer size.
    ///
    /// The output buffer is sized for the worst-case UTF-8 expansion of a
    /// full input buffer.
    pub fn new(inner: R, encoding: &'static Encoding, buf_size: usize) -> Self {
        let buf_size = buf_size.max(1);
        let decoder = encoding.new_decoder_without_bom_handling();
        let required = decoder
            .max_utf8_buffer_length(buf_size)
            .unwrap_or(buf_size.saturating_mul(3))
            .max(16);
        Self {
            inner,
            decoder,
            input_buf: vec![0; buf_size].into_boxed_slice(),
            input_pos: 0,
            input_len: 0,
            output_buf: vec![0; required].into_boxed_slice(),
            output_pos: 0,
            output_size: 0,
            end_of_stream: false,
            finished: false,
            reported_replacement: false,
        }
    }

    fn fill_buf(&mut self) -> std::io::Result<()> {
        self.output_pos = 0;
        self.output_size = 0;

        while !self.finished {
            if self.input_pos >= self.input_len && !self.end_of_stream {
                let bytes_read = self.inner.read(&mut self.input_buf)?;
                self.input_pos = 0;
                self.input_len = bytes_read;
                if bytes_read == 0 {
                    self.end_of_stream = true;
                }
            }

            let (result, read, written, replaced) = self.decoder.decode_to_utf8(
                &self.input_buf[self.input_pos..self.input_len],
                &mut self.output_buf,
                self.end_of_stream,
            );
            self.input_pos += read;
            self.output_size = written;

            if replaced && !self.reported_replacement {
                self.reported_replacement = true;
                warn!(
                    encoding = self.decoder.encoding().name(),
                    "malformed input bytes replaced with U+FFFD"
                );
            }
            if self.end_of_stream && result == CoderResult::InputEmpty {
                // The decoder must not be called again after `last` was accepted.
                self.finished = true;
            }
            if written > 0 {
                break;
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for DecodingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.output_pos >= self.output_size {
            self.fill_buf()?;
        }
        if self.output_size == 0 {
            return Ok(0);
        }

        let bytes_now = buf.len().min(self.output_size - self.output_pos);
        buf[..bytes_now]
            .copy_from_slice(&self.output_buf[self.output_pos..self.output_pos + bytes_now]);
        self.output_pos += bytes_now;
        Ok(bytes_now)
    }
}

/// Input with the decoding selected by [`InputEncoding`] applied.
pub enum Decoded<R> {
    /// UTF-8 input, bytes untouched.
    Passthrough(R),
    /// Legacy input, transcoded while read.
    Transcoded(DecodingReader<R>),
}

impl<R: Read> Read for Decoded<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Decoded::Passthrough(r) => r.read(buf),
            Decoded::Transcoded(r) => r.read(buf),
        }
    }
}

impl InputEncoding {
    /// Wrap a reader so it yields UTF-8.
    pub fn wrap_reader<R: Read>(self, reader: R) -> Decoded<R> {
        self.wrap_reader_with_buffer_size(reader, DEFAULT_BUF_SIZE)
    }

    /// Wrap a reader so it yields UTF-8, with an explicit transcoding buffer size.
    pub fn wrap_reader_with_buffer_size<R: Read>(self, reader: R, buf_size: usize) -> Decoded<R> {
        match self {
            InputEncoding::Utf8 => Decoded::Passthrough(reader),
            InputEncoding::ShiftJis => {
                Decoded::Transcoded(DecodingReader::new(reader, SHIFT_JIS, buf_size))
            }
        }
    }
}

/// Extension trait to provide convenient methods on `std::io::Read`.
pub trait ReadExt {
    /// Wrap the reader so it yields UTF-8 decoded from `encoding`.
    fn decode_from(self, encoding: InputEncoding) -> Decoded<Self>
    where
        Self: Sized;
}

impl<R: Read> ReadExt for R {
    fn decode_from(self, encoding: InputEncoding) -> Decoded<Self>
    where
        Self: Sized,
    {
        encoding.wrap_reader(self)
    }
}

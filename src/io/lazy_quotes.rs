use std::io::Read;

use memchr::{memchr, memchr3};

use crate::{Delimiter, LF, QUOTE};

const CR: u8 = b'\r';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    /// Inside a quoted field, right after a `"` whose meaning depends on the next byte.
    QuoteInQuoted,
}

/// A `std::io::Read` adapter that makes bare quotes inside quoted fields literal.
///
/// Inside a quoted field a `"` only closes the field when it is followed by
/// the delimiter, a line break or the end of input, and `""` stays an escaped
/// quote. Any other `"` is kept as text: it is rewritten to `""` so a strict
/// reader downstream sees a well-formed field. Quotes in unquoted fields and
/// unterminated quoted fields pass through untouched.
pub struct LazyQuoteReader<R> {
    inner: R,
    delimiter: u8,
    state: State,
    input_buf: Box<[u8]>,
    output_buf: Vec<u8>,
    output_pos: usize,
    end_of_stream: bool,
}

impl<R: Read> LazyQuoteReader<R> {
    pub fn new(inner: R, delimiter: Delimiter) -> Self {
        Self::with_size(inner, delimiter, 8192)
    }

    pub fn with_size(inner: R, delimiter: Delimiter, buf_size: usize) -> Self {
        let buf_size = buf_size.max(1);
        Self {
            inner,
            delimiter: delimiter.as_byte(),
            state: State::FieldStart,
            input_buf: vec![0; buf_size].into_boxed_slice(),
            // Worst case every input byte is a bare quote that doubles, plus a held quote.
            output_buf: Vec::with_capacity(buf_size * 2 + 1),
            output_pos: 0,
            end_of_stream: false,
        }
    }

    fn fill_buf(&mut self) -> std::io::Result<()> {
        self.output_pos = 0;
        self.output_buf.clear();

        while self.output_buf.is_empty() && !self.end_of_stream {
            let bytes_read = self.inner.read(&mut self.input_buf)?;
            if bytes_read == 0 {
                self.end_of_stream = true;
                if self.state == State::QuoteInQuoted {
                    // A quote right before end of input closes the field.
                    self.output_buf.push(QUOTE);
                    self.state = State::Quoted;
                }
            } else {
                let input_buf = std::mem::take(&mut self.input_buf);
                let mut input = &input_buf[..bytes_read];
                while !input.is_empty() {
                    let consumed = self.step(input);
                    input = &input[consumed..];
                }
                self.input_buf = input_buf;
            }
        }
        Ok(())
    }

    /// Process a prefix of `input`, returning how many bytes were consumed.
    fn step(&mut self, input: &[u8]) -> usize {
        let out = &mut self.output_buf;
        match self.state {
            State::FieldStart => {
                let b = input[0];
                out.push(b);
                self.state = match b {
                    QUOTE => State::Quoted,
                    b if b == self.delimiter || b == LF || b == CR => State::FieldStart,
                    _ => State::Unquoted,
                };
                1
            }
            State::Unquoted => match memchr3(self.delimiter, LF, CR, input) {
                Some(i) => {
                    out.extend_from_slice(&input[..=i]);
                    self.state = State::FieldStart;
                    i + 1
                }
                None => {
                    out.extend_from_slice(input);
                    input.len()
                }
            },
            State::Quoted => match memchr(QUOTE, input) {
                Some(i) => {
                    out.extend_from_slice(&input[..i]);
                    self.state = State::QuoteInQuoted;
                    i + 1
                }
                None => {
                    out.extend_from_slice(input);
                    input.len()
                }
            },
            State::QuoteInQuoted => {
                let b = input[0];
                if b == QUOTE {
                    out.extend_from_slice(&[QUOTE, QUOTE]);
                    self.state = State::Quoted;
                } else if b == self.delimiter || b == LF || b == CR {
                    out.extend_from_slice(&[QUOTE, b]);
                    self.state = State::FieldStart;
                } else {
                    out.extend_from_slice(&[QUOTE, QUOTE, b]);
                    self.state = State::Quoted;
                }
                1
            }
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for LazyQuoteReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.output_pos >= self.output_buf.len() {
            self.fill_buf()?;
        }
        if self.output_buf.is_empty() {
            return Ok(0);
        }

        let bytes_now = buf.len().min(self.output_buf.len() - self.output_pos);
        buf[..bytes_now]
            .copy_from_slice(&self.output_buf[self.output_pos..self.output_pos + bytes_now]);
        self.output_pos += bytes_now;
        Ok(bytes_now)
    }
}

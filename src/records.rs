//! Quote-aware record parsing on top of the `csv` crate.

use std::{io::Read, iter::FusedIterator};

use csv::{ReaderBuilder, StringRecord};
use tracing::error;

use crate::{io::LazyQuoteReader, Delimiter, Error, Result};

/// A lazy, forward-only sequence of records read from a UTF-8 stream.
///
/// Every line is data; there is no header row. Quote handling is lenient:
/// a quote inside a quoted field that is not followed by the delimiter or a
/// line break is kept as text, stray quotes inside unquoted fields are kept
/// as text, and an unterminated quoted field runs to the end of input.
/// All records must have the field count of the first one. After end of
/// input or the first error the iterator only yields `None`.
pub struct Records<R> {
    reader: csv::Reader<LazyQuoteReader<R>>,
    delimiter: Delimiter,
    position: u64,
    done: bool,
}

impl<R: Read> Records<R> {
    pub fn new(input: R, delimiter: Delimiter) -> Self {
        let reader = ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .has_headers(false)
            .flexible(false)
            .quoting(true)
            .double_quote(true)
            .from_reader(LazyQuoteReader::new(input, delimiter));
        Self {
            reader,
            delimiter,
            position: 0,
            done: false,
        }
    }

    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Number of records yielded so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<StringRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => {
                self.position += 1;
                Some(Ok(record))
            }
            Ok(false) => {
                self.done = true;
                None
            }
            Err(source) => {
                self.done = true;
                let number = self.position + 1;
                error!(
                    record = number,
                    fields = ?record.iter().collect::<Vec<_>>(),
                    "malformed record"
                );
                Some(Err(Error::Parse {
                    record: number,
                    source,
                }))
            }
        }
    }
}

impl<R: Read> FusedIterator for Records<R> {}

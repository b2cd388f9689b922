use std::io::Write;

use memchr::{memchr, memchr3};
use tracing::warn;

use crate::{convert::ConvertStats, Delimiter, Error, Result, LF, QUOTE};

/// Writes records as lines of fields joined by a single delimiter.
///
/// Fields are written verbatim. A field containing the delimiter, a quote or
/// a line break makes its line ambiguous in the target format; such fields
/// are counted and reported once, but never re-quoted.
pub struct RecordWriter<W> {
    inner: W,
    delimiter: Delimiter,
    line: Vec<u8>,
    stats: ConvertStats,
    warned: bool,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W, delimiter: Delimiter) -> Self {
        Self {
            inner,
            delimiter,
            line: Vec::new(),
            stats: ConvertStats::default(),
            warned: false,
        }
    }

    /// Write one record followed by a single `\n`.
    ///
    /// A record with no fields still produces an empty line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] if the underlying writer fails.
    pub fn write_record<I, T>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let delimiter = self.delimiter.as_byte();
        self.line.clear();
        for (i, field) in fields.into_iter().enumerate() {
            let field = field.as_ref();
            if i > 0 {
                self.line.push(delimiter);
            }
            if is_ambiguous(field, delimiter) {
                self.stats.ambiguous_fields += 1;
                if !self.warned {
                    self.warned = true;
                    warn!(
                        record = self.stats.records + 1,
                        delimiter = %self.delimiter,
                        "field contains the output delimiter, a quote or a line break; output is not re-quoted"
                    );
                }
            }
            self.line.extend_from_slice(field);
            self.stats.fields += 1;
        }

        self.inner.write_all(&self.line).map_err(Error::Output)?;
        self.inner.write_all(&[LF]).map_err(Error::Output)?;
        self.stats.records += 1;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`Error::Output`] if the underlying writer fails to flush.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(Error::Output)
    }

    #[must_use]
    pub fn stats(&self) -> ConvertStats {
        self.stats
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

fn is_ambiguous(field: &[u8], delimiter: u8) -> bool {
    memchr3(delimiter, QUOTE, LF, field).is_some() || memchr(b'\r', field).is_some()
}

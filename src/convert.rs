//! The conversion pipeline: select input, decode, parse, write.

use std::io::{Read, Write};

use tracing::debug;

use crate::{
    config::RunConfig, input::InputSource, io::ReadExt, records::Records, writer::RecordWriter,
    Direction, Result,
};

/// Counters collected while writing a run's output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Lines written.
    pub records: u64,
    /// Fields written across all lines.
    pub fields: u64,
    /// Fields that contained the output delimiter, a quote or a line break.
    pub ambiguous_fields: u64,
}

/// Convert UTF-8 delimited text from `input` into `output`.
///
/// Records are parsed with the input delimiter of `direction` and written one
/// line each with its output delimiter. Stops at the first failure; lines
/// already written stay written.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] for a malformed record and
/// [`crate::Error::Output`] when `output` fails.
pub fn convert<R: Read, W: Write>(input: R, output: W, direction: Direction) -> Result<ConvertStats> {
    let records = Records::new(input, direction.input_delimiter());
    let mut writer = RecordWriter::new(output, direction.output_delimiter());

    for record in records {
        let record = record?;
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(writer.stats())
}

/// Run a whole conversion described by `config`.
///
/// `stdin` is only consumed when the configured origin is standard input.
///
/// # Errors
///
/// Any [`crate::Error`]; see [`crate::ErrorKind`] for the classification.
pub fn run<S: Read, W: Write>(config: &RunConfig, stdin: S, output: W) -> Result<ConvertStats> {
    let source = InputSource::open(config.origin(), stdin)?;
    let input = source.decode_from(config.encoding());
    let stats = convert(input, output, config.direction())?;
    debug!(?stats, "conversion finished");
    Ok(stats)
}

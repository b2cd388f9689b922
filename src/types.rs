use core::fmt;
use std::{io, path::PathBuf};

pub const COMMA: u8 = b',';
pub const TAB: u8 = b'\t';
pub const QUOTE: u8 = b'"';
pub const LF: u8 = b'\n';

/// Single-byte field separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => COMMA,
            Delimiter::Tab => TAB,
        }
    }

    /// The other delimiter; comma and tab are each other's counterpart.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Delimiter::Comma => Delimiter::Tab,
            Delimiter::Tab => Delimiter::Comma,
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Tab => write!(f, "tab"),
        }
    }
}

/// Conversion direction.
///
/// `CsvToTsv` is the default; `TsvToCsv` is selected with `-r`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    CsvToTsv,
    TsvToCsv,
}

impl Direction {
    #[must_use]
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Direction::TsvToCsv
        } else {
            Direction::CsvToTsv
        }
    }

    /// Delimiter used to split incoming records.
    #[must_use]
    pub fn input_delimiter(self) -> Delimiter {
        match self {
            Direction::CsvToTsv => Delimiter::Comma,
            Direction::TsvToCsv => Delimiter::Tab,
        }
    }

    /// Delimiter used to join outgoing fields. Always the opposite of the input.
    #[must_use]
    pub fn output_delimiter(self) -> Delimiter {
        self.input_delimiter().opposite()
    }
}

/// Character encoding of the raw input bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputEncoding {
    /// Bytes are already UTF-8 and pass through untouched.
    #[default]
    Utf8,
    /// Bytes are Shift_JIS and get transcoded to UTF-8 while being read.
    ShiftJis,
}

impl InputEncoding {
    #[must_use]
    pub fn from_sjis(sjis: bool) -> Self {
        if sjis {
            InputEncoding::ShiftJis
        } else {
            InputEncoding::Utf8
        }
    }
}

impl fmt::Display for InputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEncoding::Utf8 => write!(f, "UTF-8"),
            InputEncoding::ShiftJis => write!(f, "Shift_JIS"),
        }
    }
}

/// Coarse classification of [`Error`], used to pick a diagnostic and an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input file or standard input could not be acquired.
    Resource,
    /// A record could not be parsed, even with lenient quoting.
    Parse,
    /// Standard output rejected a write.
    Output,
}

impl ErrorKind {
    /// Every failure exits the same way; no code is reserved per kind.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Resource | ErrorKind::Parse | ErrorKind::Output => 1,
        }
    }
}

/// Error type for conversion runs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The named input file could not be opened.
    #[error("cannot open input file `{}`: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Standard input is a terminal and no input file was named.
    #[error("no input file given; pass one with -f or pipe data on standard input")]
    MissingInput,

    /// Standard input could not be read to the end.
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    /// Record number `record` (1-based) failed to parse.
    #[error("failed to parse record {record}: {source}")]
    Parse { record: u64, source: csv::Error },

    /// Writing converted output failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Open { .. } | Error::MissingInput | Error::Stdin(_) => ErrorKind::Resource,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Output(_) => ErrorKind::Output,
        }
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

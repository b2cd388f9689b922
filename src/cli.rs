//! CLI argument definitions for csv2tsv.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use csv2tsv::Options;

const USAGE: &str = "\
Usage 1 [file input]:
  csv2tsv -f sample.csv [-s] [-r]
  Show \"sample.csv\" in TSV format.

Usage 2 [pipe input]:
  cat sample.csv | csv2tsv [-s] [-r]
  -f is ignored when data is piped in. Input must be UTF-8 or, with -s,
  Shift_JIS. Convert anything else first, e.g.
  iconv -f original_encoding -t utf8 sample.csv | csv2tsv

Usage 3 [reverse, TSV to CSV]:
  cat sample.tsv | csv2tsv -r
  csv2tsv -f sample-sjis.tsv -r -s";

/// Convert CSV to TSV, or TSV to CSV with -r.
///
/// Reads the file named by -f when standard input is a terminal, and all of
/// standard input otherwise. Converted lines go to standard output.
#[derive(Parser, Debug)]
#[command(name = "csv2tsv")]
#[command(about, long_about = None, after_help = USAGE, disable_version_flag = true)]
pub struct Cli {
    /// File to read
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Input is Shift_JIS encoded
    #[arg(short = 's', long = "sjis")]
    pub sjis: bool,

    /// Reverse: read TSV, write CSV
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Show version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn into_options(self, args_given: bool) -> Options {
        Options {
            file: self.file,
            sjis: self.sjis,
            reverse: self.reverse,
            args_given,
        }
    }
}

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level (default)
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#![doc = include_str!("../README.md")]

pub mod config;
pub mod convert;
pub mod input;
pub mod io;
pub mod records;
mod types;
pub mod writer;

pub use config::{Action, InputOrigin, Options, RunConfig};
pub use convert::{convert, run, ConvertStats};
pub use io::{Decoded, DecodingReader, LazyQuoteReader, ReadExt};
pub use types::*;

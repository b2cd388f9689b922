//! Input selection: a named file when a person is at the terminal, the whole
//! of standard input otherwise.

use std::{
    fs::File,
    io::{self, Cursor, IsTerminal, Read},
};

use tracing::debug;

use crate::{config::InputOrigin, Error, Result};

/// Reports whether a stream is attached to an interactive terminal.
pub trait Interactive {
    fn is_interactive(&self) -> bool;
}

impl Interactive for io::Stdin {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

/// The opened input. The file handle is closed when this value is dropped.
#[derive(Debug)]
pub enum InputSource {
    File(File),
    Buffered(Cursor<Vec<u8>>),
}

impl InputSource {
    /// Open `origin`. Piped standard input is read to the end before returning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened and
    /// [`Error::Stdin`] if `stdin` fails mid-read.
    pub fn open<S: Read>(origin: &InputOrigin, stdin: S) -> Result<Self> {
        match origin {
            InputOrigin::File(path) => {
                let file = File::open(path).map_err(|source| Error::Open {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), "opened input file");
                Ok(InputSource::File(file))
            }
            InputOrigin::Stdin => {
                let bytes = read_all(stdin).map_err(Error::Stdin)?;
                debug!(bytes = bytes.len(), "read standard input");
                Ok(InputSource::Buffered(Cursor::new(bytes)))
            }
        }
    }
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::File(f) => f.read(buf),
            InputSource::Buffered(c) => c.read(buf),
        }
    }
}

fn read_all<R: Read>(mut r: R) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    r.read_to_end(&mut out)?;
    Ok(out)
}

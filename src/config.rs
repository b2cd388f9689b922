//! Run configuration resolved once from command-line options.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{input::Interactive, Delimiter, Direction, Error, InputEncoding, Result};

/// Where the input bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOrigin {
    /// A named file, used when standard input is a terminal.
    File(PathBuf),
    /// Everything piped into standard input.
    Stdin,
}

/// Immutable settings for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    origin: InputOrigin,
    direction: Direction,
    encoding: InputEncoding,
}

impl RunConfig {
    #[must_use]
    pub fn new(origin: InputOrigin) -> Self {
        Self {
            origin,
            direction: Direction::default(),
            encoding: InputEncoding::default(),
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: InputEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn origin(&self) -> &InputOrigin {
        &self.origin
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn encoding(&self) -> InputEncoding {
        self.encoding
    }

    #[must_use]
    pub fn input_delimiter(&self) -> Delimiter {
        self.direction.input_delimiter()
    }

    #[must_use]
    pub fn output_delimiter(&self) -> Delimiter {
        self.direction.output_delimiter()
    }
}

/// What the front-end should do after looking at its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowHelp,
    Convert(RunConfig),
}

/// Parsed command-line options, before the input origin is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub file: Option<PathBuf>,
    pub sjis: bool,
    pub reverse: bool,
    /// Whether any argument at all followed the program name.
    pub args_given: bool,
}

impl Options {
    /// Decide between showing help and converting, given how standard input is attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] when standard input is a terminal,
    /// arguments were given, and none of them named an input file.
    pub fn resolve(self, stdin: &impl Interactive) -> Result<Action> {
        let origin = if stdin.is_interactive() {
            if !self.args_given {
                return Ok(Action::ShowHelp);
            }
            match self.file {
                Some(path) => InputOrigin::File(path),
                None => return Err(Error::MissingInput),
            }
        } else {
            if let Some(path) = self.file.as_deref().map(Path::display) {
                debug!(%path, "standard input is piped; ignoring input file");
            }
            InputOrigin::Stdin
        };

        let config = RunConfig::new(origin)
            .with_direction(Direction::from_reverse(self.reverse))
            .with_encoding(InputEncoding::from_sjis(self.sjis));
        debug!(
            origin = ?config.origin(),
            input = %config.input_delimiter(),
            output = %config.output_delimiter(),
            encoding = %config.encoding(),
            "resolved run configuration"
        );
        Ok(Action::Convert(config))
    }
}

//! # xres
//!
//! A parser for the X resources format.
//!
//! Parses `.Xresources`-style text (resource assignments, `#define` macros,
//! `!` comments, blank lines) into an immutable [`Document`], resolves
//! macro substitutions on read, matches resource identifiers against
//! wildcard patterns, and rebuilds the original text from the parsed
//! statements.
//!
//! ```text
//! #define white #FFFFFF
//! ! terminal colors
//! URxvt*foreground:white
//! ```
//!
//! Parsed with [`parse`], the document above answers
//! `view.resource("URxvt*foreground")` with `#FFFFFF`.

pub mod xres;

pub use crate::xres::{parse, Document, MatchError, ParseError, QueryError};

use std::fmt;
use std::io;
use std::path::Path;

/// Top-level error for the read-file-then-parse wrapper.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "io error: {}", err),
            Error::Parse(err) => write!(f, "parse error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

/// Read the file's whole contents and parse them.
///
/// A thin wrapper around [`parse`]; the core itself never touches the
/// filesystem.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document, Error> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse(&text)?)
}

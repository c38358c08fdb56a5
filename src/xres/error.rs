//! Error types for parsing, wildcard matching, and document queries
//!
//! Three independent taxonomies:
//! - `ParseError` — grammar violations; any of these aborts the whole parse
//!   pass and carries the offending line number.
//! - `MatchError` — a malformed filter pattern or resource identifier handed
//!   to the wildcard matcher.
//! - `QueryError` — a lookup against a built document missed; local to the
//!   single lookup, the document stays valid.

use std::fmt;

/// Errors raised while parsing an X resources text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The cursor ran out of characters where more input was expected.
    EndOfInput,
    /// An expected literal token (e.g. the `!` comment marker) is absent.
    MissingToken { token: char, line: usize },
    /// A line that should be a resource assignment has no `:` separator.
    MalformedResource { text: String, line: usize },
    /// A line starting with `#d` that is not a well-formed `#define name value`.
    MalformedDefine { text: String, line: usize },
    /// A line that starts with whitespace but contains non-whitespace characters.
    MalformedWhitespace { text: String, line: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EndOfInput => write!(f, "unexpected end of input"),
            ParseError::MissingToken { token, line } => {
                write!(f, "missing token '{}' at line {}", token, line)
            }
            ParseError::MalformedResource { text, line } => {
                write!(f, "incorrect resource statement '{}' at line {}", text, line)
            }
            ParseError::MalformedDefine { text, line } => {
                write!(f, "incorrect define statement '{}' at line {}", text, line)
            }
            ParseError::MalformedWhitespace { text, line } => {
                write!(f, "line '{}' at line {} has non-whitespace characters", text, line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors raised by the wildcard matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The identifier or pattern ends with `*` or `?` (or is empty): a
    /// wildcard cannot stand in for the attribute name.
    WildcardAttribute { id: String },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::WildcardAttribute { id } => write!(
                f,
                "invalid resource id '{}': a wildcard character cannot be used as an attribute name",
                id
            ),
        }
    }
}

impl std::error::Error for MatchError {}

/// Errors raised by queries against a built [`Document`](crate::xres::Document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    ResourceNotFound(String),
    DefineNotFound(String),
    NoStatementAt(usize),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::ResourceNotFound(id) => write!(f, "resource '{}' not found", id),
            QueryError::DefineNotFound(name) => write!(f, "define '{}' not found", name),
            QueryError::NoStatementAt(line) => write!(f, "no parsed statement at line {}", line),
        }
    }
}

impl std::error::Error for QueryError {}

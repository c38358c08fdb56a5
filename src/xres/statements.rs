//! Statement types and their per-line recognizers
//!
//! An X resources file is a sequence of logical lines, each one of four
//! statement kinds: a resource assignment, a `#define` macro, a `!` comment,
//! or a blank line. Each concrete statement type carries the 0-based source
//! line it was parsed from and serializes back to source text through
//! `Display`; [`Statement`] is the closed tagged view over all four kinds.
//!
//! Each recognizer consumes exactly one logical line from the cursor.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::xres::cursor::Cursor;
use crate::xres::error::ParseError;

pub const COMMENT_START: char = '!';
pub const RESOURCE_SEP: char = ':';

/// The characters a blank line may consist of.
pub(crate) const WHITESPACE_CHARS: [char; 2] = [' ', '\n'];

// Every character except ':' can be part of a resource identifier.
static RESOURCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^:]+):(.*)$").unwrap());
static DEFINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#define (\w+) (.*)$").unwrap());

/// One `id:value` resource assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceStatement {
    pub resource_id: String,
    pub raw_value: String,
    pub line: usize,
}

impl ResourceStatement {
    /// Recognize one `<id>:<value>` line; both sides are trimmed.
    pub fn parse(cursor: &mut Cursor<'_>, line: usize) -> Result<Self, ParseError> {
        let text = cursor.take_line();
        match RESOURCE_RE.captures(&text) {
            Some(caps) => Ok(ResourceStatement {
                resource_id: caps[1].trim().to_string(),
                raw_value: caps[2].trim().to_string(),
                line,
            }),
            None => Err(ParseError::MalformedResource { text, line }),
        }
    }
}

impl fmt::Display for ResourceStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}{}", self.resource_id, RESOURCE_SEP, self.raw_value)
    }
}

/// One `#define name value` macro statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefineStatement {
    pub name: String,
    pub value: String,
    pub line: usize,
}

impl DefineStatement {
    /// Recognize one `#define <name> <value>` line. The name is a contiguous
    /// word token; the value is the remainder, trimmed, and must be
    /// non-empty.
    pub fn parse(cursor: &mut Cursor<'_>, line: usize) -> Result<Self, ParseError> {
        let text = cursor.take_line();
        let caps = match DEFINE_RE.captures(&text) {
            Some(caps) => caps,
            None => return Err(ParseError::MalformedDefine { text, line }),
        };
        let value = caps[2].trim().to_string();
        if value.is_empty() {
            return Err(ParseError::MalformedDefine { text, line });
        }
        Ok(DefineStatement {
            name: caps[1].to_string(),
            value,
            line,
        })
    }
}

impl fmt::Display for DefineStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#define {} {}", self.name, self.value)
    }
}

/// One `!...` comment line. The text excludes the leading marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentStatement {
    pub text: String,
    pub line: usize,
}

impl CommentStatement {
    pub fn parse(cursor: &mut Cursor<'_>, line: usize) -> Result<Self, ParseError> {
        let text = cursor.take_line();
        if !text.starts_with(COMMENT_START) {
            return Err(ParseError::MissingToken {
                token: COMMENT_START,
                line,
            });
        }
        Ok(CommentStatement {
            text: text[COMMENT_START.len_utf8()..].to_string(),
            line,
        })
    }
}

impl fmt::Display for CommentStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}", COMMENT_START, self.text)
    }
}

/// A line composed entirely of whitespace, the empty line included.
///
/// The original line text (trailing newline included) is kept so the line
/// serializes back exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlankLineStatement {
    pub text: String,
    pub line: usize,
}

impl BlankLineStatement {
    pub fn parse(cursor: &mut Cursor<'_>, line: usize) -> Result<Self, ParseError> {
        let text = cursor.take_line();
        if text.chars().any(|c| !WHITESPACE_CHARS.contains(&c)) {
            return Err(ParseError::MalformedWhitespace { text, line });
        }
        Ok(BlankLineStatement {
            text: format!("{}\n", text),
            line,
        })
    }
}

impl fmt::Display for BlankLineStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A reference to a parsed statement of any kind.
///
/// Dispatched by pattern match; every variant carries the source line and
/// serializes to its exact source text via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    Resource(&'a ResourceStatement),
    Define(&'a DefineStatement),
    Comment(&'a CommentStatement),
    BlankLine(&'a BlankLineStatement),
}

impl Statement<'_> {
    /// The 0-based source line this statement was parsed from.
    pub fn line(&self) -> usize {
        match self {
            Statement::Resource(s) => s.line,
            Statement::Define(s) => s.line,
            Statement::Comment(s) => s.line,
            Statement::BlankLine(s) => s.line,
        }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Resource(s) => fmt::Display::fmt(s, f),
            Statement::Define(s) => fmt::Display::fmt(s, f),
            Statement::Comment(s) => fmt::Display::fmt(s, f),
            Statement::BlankLine(s) => fmt::Display::fmt(s, f),
        }
    }
}

//! Document builder: the single-pass dispatch loop
//!
//! [`Parser`] drives one parse pass over the whole input: peek the next
//! character, classify the line, hand the cursor to the matching statement
//! recognizer, file the result into the matching collection, advance the
//! line counter. Any grammar violation aborts the pass; no partial
//! [`Document`] is ever returned.

use std::collections::HashMap;

use serde::Serialize;

use crate::xres::cursor::Cursor;
use crate::xres::error::ParseError;
use crate::xres::statements::{
    BlankLineStatement, CommentStatement, DefineStatement, ResourceStatement, Statement,
    COMMENT_START, WHITESPACE_CHARS,
};
use crate::xres::views::DocumentView;

/// Parse an X resources text into a [`Document`].
pub fn parse(text: &str) -> Result<Document, ParseError> {
    Parser::new().parse(text)
}

/// The complete parsed result of one input pass.
///
/// Owns every statement instance. Resource and define keys are unique by
/// construction: a repeated key overwrites the prior entry (last occurrence
/// wins). Immutable once the pass completes; queries go through
/// [`Document::view`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub(crate) resources: HashMap<String, ResourceStatement>,
    pub(crate) defines: HashMap<String, DefineStatement>,
    pub(crate) comments: Vec<CommentStatement>,
    pub(crate) blank_lines: Vec<BlankLineStatement>,
    pub(crate) line_count: usize,
}

impl Document {
    /// A read-only query surface over this document.
    pub fn view(&self) -> DocumentView<'_> {
        DocumentView::new(self)
    }

    /// Total number of lines processed by the parse pass.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Resolve a raw resource value against the define table.
    ///
    /// If `raw_value` is exactly the name of a recorded define, the define's
    /// value is substituted; otherwise `raw_value` comes back unchanged.
    /// Resolution is a single hop: a macro value that itself names another
    /// macro is returned literally.
    pub fn resolve<'a>(&'a self, raw_value: &'a str) -> &'a str {
        match self.defines.get(raw_value) {
            Some(define) => define.value.as_str(),
            None => raw_value,
        }
    }

    /// The statement owning `line`, if any line of the pass produced one
    /// that still lives in the document.
    pub(crate) fn statement_at(&self, line: usize) -> Option<Statement<'_>> {
        self.resources
            .values()
            .find(|s| s.line == line)
            .map(Statement::Resource)
            .or_else(|| {
                self.defines
                    .values()
                    .find(|s| s.line == line)
                    .map(Statement::Define)
            })
            .or_else(|| {
                self.comments
                    .iter()
                    .find(|s| s.line == line)
                    .map(Statement::Comment)
            })
            .or_else(|| {
                self.blank_lines
                    .iter()
                    .find(|s| s.line == line)
                    .map(Statement::BlankLine)
            })
    }
}

/// The four line grammars a parse pass can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatementKind {
    Comment,
    BlankLine,
    Define,
    Resource,
}

/// Map the lookahead to a recognizer kind, checked in order: `!` is a
/// comment, a leading whitespace character is a blank line, `#d` starts a
/// define, anything else is a resource attempt. `#include` lines and a lone
/// `#` at end of input fall through to the resource grammar and fail there.
fn classify(first: char, cursor: &mut Cursor<'_>) -> StatementKind {
    if first == COMMENT_START {
        StatementKind::Comment
    } else if WHITESPACE_CHARS.contains(&first) {
        StatementKind::BlankLine
    } else if first == '#' && matches!(cursor.peek(2), Ok('d')) {
        StatementKind::Define
    } else {
        StatementKind::Resource
    }
}

/// A reusable document builder.
///
/// `parse` runs one full pass and moves the collected statements into an
/// immutable [`Document`]; the builder can then be reused for another text.
#[derive(Debug, Default)]
pub struct Parser {
    current_line: usize,
    resources: HashMap<String, ResourceStatement>,
    defines: HashMap<String, DefineStatement>,
    comments: Vec<CommentStatement>,
    blank_lines: Vec<BlankLineStatement>,
}

impl Parser {
    pub fn new() -> Self {
        Parser::default()
    }

    /// Reset all collections and the line counter to start state.
    pub fn clear(&mut self) {
        self.current_line = 0;
        self.resources.clear();
        self.defines.clear();
        self.comments.clear();
        self.blank_lines.clear();
    }

    /// Run one parse pass over `text`.
    pub fn parse(&mut self, text: &str) -> Result<Document, ParseError> {
        self.clear();
        let mut cursor = Cursor::new(text);
        loop {
            let first = match cursor.peek(1) {
                Ok(c) => c,
                Err(_) => break,
            };
            match classify(first, &mut cursor) {
                StatementKind::Comment => {
                    let st = CommentStatement::parse(&mut cursor, self.current_line)?;
                    self.comments.push(st);
                }
                StatementKind::BlankLine => {
                    let st = BlankLineStatement::parse(&mut cursor, self.current_line)?;
                    self.blank_lines.push(st);
                }
                StatementKind::Define => {
                    let st = DefineStatement::parse(&mut cursor, self.current_line)?;
                    self.defines.insert(st.name.clone(), st);
                }
                StatementKind::Resource => {
                    let st = ResourceStatement::parse(&mut cursor, self.current_line)?;
                    self.resources.insert(st.resource_id.clone(), st);
                }
            }
            self.current_line += 1;
        }
        Ok(Document {
            resources: std::mem::take(&mut self.resources),
            defines: std::mem::take(&mut self.defines),
            comments: std::mem::take(&mut self.comments),
            blank_lines: std::mem::take(&mut self.blank_lines),
            line_count: self.current_line,
        })
    }
}

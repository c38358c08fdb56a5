//! Read-only query views over a built document
//!
//! Views borrow the [`Document`] and copy none of its state. Once the
//! owning document is fully built they are pure reads and may be queried
//! concurrently.

use std::collections::HashMap;

use crate::xres::error::{MatchError, QueryError};
use crate::xres::matching::match_resource;
use crate::xres::parser::Document;
use crate::xres::statements::Statement;

/// The query and reconstruction surface of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct DocumentView<'a> {
    doc: &'a Document,
}

impl<'a> DocumentView<'a> {
    pub(crate) fn new(doc: &'a Document) -> Self {
        DocumentView { doc }
    }

    /// The resource mapping, with values macro-resolved on read.
    pub fn resources(&self) -> ResourcesView<'a> {
        ResourcesView { doc: self.doc }
    }

    /// The define table, values raw.
    pub fn defines(&self) -> DefinesView<'a> {
        DefinesView { doc: self.doc }
    }

    /// The macro-resolved value of resource `id`.
    pub fn resource(&self, id: &str) -> Result<&'a str, QueryError> {
        self.resources().get(id)
    }

    /// The raw value of define `name`.
    pub fn define(&self, name: &str) -> Result<&'a str, QueryError> {
        self.defines().get(name)
    }

    /// Comment texts in line order, markers excluded.
    pub fn comments(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.doc.comments.iter().map(|c| c.text.as_str())
    }

    /// Line numbers of blank lines, in line order.
    pub fn blank_lines(&self) -> Vec<usize> {
        self.doc.blank_lines.iter().map(|b| b.line).collect()
    }

    /// A new document holding only the resources whose id matches `pattern`,
    /// plus an unchanged copy of the define table so macro resolution on the
    /// filtered document stays correct. Comments and blank lines are not
    /// carried over; the line count is, so line queries keep working.
    pub fn filter(&self, pattern: &str) -> Result<Document, MatchError> {
        let mut resources = HashMap::new();
        for (id, statement) in &self.doc.resources {
            if match_resource(id, pattern)? {
                resources.insert(id.clone(), statement.clone());
            }
        }
        Ok(Document {
            resources,
            defines: self.doc.defines.clone(),
            comments: Vec::new(),
            blank_lines: Vec::new(),
            line_count: self.doc.line_count,
        })
    }

    /// The statement (of any kind) owning `line`.
    pub fn statement_at(&self, line: usize) -> Result<Statement<'a>, QueryError> {
        self.doc
            .statement_at(line)
            .ok_or(QueryError::NoStatementAt(line))
    }

    /// The serialized source text of the statement at `line`.
    pub fn text_at(&self, line: usize) -> Result<String, QueryError> {
        Ok(self.statement_at(line)?.to_string())
    }

    /// Rebuild the source text from the parsed statements.
    ///
    /// Concatenates `text_at` for every line from 0 up to the document's
    /// line count. Lines whose statement was displaced by a later duplicate
    /// key are skipped; for input without duplicate keys this reproduces the
    /// parsed text exactly, up to the whitespace the grammar itself
    /// discards.
    pub fn full_text(&self) -> String {
        let mut text = String::new();
        for line in 0..self.doc.line_count {
            if let Ok(line_text) = self.text_at(line) {
                text.push_str(&line_text);
            }
        }
        text
    }
}

/// An immutable mapping of resource identifiers to macro-resolved values.
#[derive(Debug, Clone, Copy)]
pub struct ResourcesView<'a> {
    doc: &'a Document,
}

impl<'a> ResourcesView<'a> {
    /// The macro-resolved value of resource `id`.
    pub fn get(&self, id: &str) -> Result<&'a str, QueryError> {
        let statement = self
            .doc
            .resources
            .get(id)
            .ok_or_else(|| QueryError::ResourceNotFound(id.to_string()))?;
        Ok(self.doc.resolve(statement.raw_value.as_str()))
    }

    /// The stored value of resource `id`, without macro resolution.
    pub fn raw(&self, id: &str) -> Result<&'a str, QueryError> {
        self.doc
            .resources
            .get(id)
            .map(|s| s.raw_value.as_str())
            .ok_or_else(|| QueryError::ResourceNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.doc.resources.contains_key(id)
    }

    /// Iterate `(id, resolved value)` pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let doc = self.doc;
        doc.resources
            .iter()
            .map(move |(id, s)| (id.as_str(), doc.resolve(s.raw_value.as_str())))
    }

    pub fn len(&self) -> usize {
        self.doc.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc.resources.is_empty()
    }
}

/// An immutable mapping of define names to their raw values.
#[derive(Debug, Clone, Copy)]
pub struct DefinesView<'a> {
    doc: &'a Document,
}

impl<'a> DefinesView<'a> {
    pub fn get(&self, name: &str) -> Result<&'a str, QueryError> {
        self.doc
            .defines
            .get(name)
            .map(|d| d.value.as_str())
            .ok_or_else(|| QueryError::DefineNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.doc.defines.contains_key(name)
    }

    /// Iterate `(name, value)` pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.doc
            .defines
            .iter()
            .map(|(name, d)| (name.as_str(), d.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.doc.defines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc.defines.is_empty()
    }
}

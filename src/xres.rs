//! Core parsing and querying for the X resources format
//!
//! The pipeline is a single synchronous pass: a lookahead [`Cursor`] feeds
//! four per-line statement recognizers, the [`Parser`] dispatch loop files
//! each statement into a [`Document`], and a [`DocumentView`] answers
//! queries (macro-resolved lookups, wildcard filtering, full-text
//! reconstruction) over the finished document.

pub mod cursor;
pub mod error;
pub mod matching;
pub mod parser;
pub mod statements;
pub mod views;

pub use cursor::Cursor;
pub use error::{MatchError, ParseError, QueryError};
pub use matching::match_resource;
pub use parser::{parse, Document, Parser};
pub use statements::{
    BlankLineStatement, CommentStatement, DefineStatement, ResourceStatement, Statement,
};
pub use views::{DefinesView, DocumentView, ResourcesView};

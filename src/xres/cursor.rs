//! Lookahead cursor over a character stream
//!
//! Every statement recognizer consumes its input through a [`Cursor`]: a
//! single-pass character stream with explicit N-step lookahead. The document
//! builder peeks one or two characters to classify the next line, then the
//! chosen recognizer calls [`Cursor::take_line`] to consume it.

use std::collections::VecDeque;
use std::str::Chars;

use crate::xres::error::ParseError;

/// A stateful, single-pass character stream with `peek(n)` lookahead.
///
/// Not safe to share across concurrent readers; all parser state lives in a
/// per-parse `Cursor`/document pair.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: Chars<'a>,
    lookahead: VecDeque<char>,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source: source.chars(),
            lookahead: VecDeque::new(),
        }
    }

    /// Consume and return the next character.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<char, ParseError> {
        match self.lookahead.pop_front() {
            Some(c) => Ok(c),
            None => self.source.next().ok_or(ParseError::EndOfInput),
        }
    }

    /// Return the character `n` steps ahead (n >= 1) without consuming it.
    ///
    /// Fails with [`ParseError::EndOfInput`] if fewer than `n` characters
    /// remain. Characters pulled into the lookahead buffer are still
    /// delivered by later `next()` calls.
    pub fn peek(&mut self, n: usize) -> Result<char, ParseError> {
        debug_assert!(n >= 1, "peek distance must be a positive non-zero integer");
        while self.lookahead.len() < n {
            match self.source.next() {
                Some(c) => self.lookahead.push_back(c),
                None => return Err(ParseError::EndOfInput),
            }
        }
        Ok(self.lookahead[n - 1])
    }

    /// Consume up to and including the next `\n` and return the passed
    /// characters, newline excluded. At end of input the remainder is
    /// returned as-is.
    pub fn take_line(&mut self) -> String {
        let mut line = String::new();
        while let Ok(c) = self.next() {
            if c == '\n' {
                break;
            }
            line.push(c);
        }
        line
    }
}

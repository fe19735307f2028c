//! Input cursor shared by all identifier grammars.
//!
//! A [`Cursor`] borrows the input text and tracks how much of it has been
//! consumed. Grammars that embed other grammars (an ARN embeds a region, an
//! account ID and a service namespace) hand the same cursor down, so each
//! sub-parser continues where the previous one stopped.

use crate::ParseError;

/// A position within borrowed input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

/// A saved cursor position, see [`Cursor::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the unconsumed input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns true if all input has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the byte offset of the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes `literal` if the remaining input starts with it.
    pub fn eat_literal(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consumes `c` if it is the next character.
    pub fn eat_char(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes exactly `c`, failing on end of input or a different character.
    pub fn expect_char(&mut self, c: char, expected: &'static str) -> Result<(), ParseError> {
        match self.peek() {
            Some(next) if next == c => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(_) => Err(ParseError::unexpected(expected, self.rest())),
            None => Err(ParseError::incomplete(expected)),
        }
    }

    /// Consumes the longest run of characters matching `pred` and returns it.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(idx, _)| idx);
        self.pos += len;
        &rest[..len]
    }

    /// Consumes up to `n` characters matching `pred`, stopping at the first
    /// character that does not match.
    pub fn take_while_max(&mut self, n: usize, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let mut len = 0;
        for c in rest.chars().take(n) {
            if !pred(c) {
                break;
            }
            len += c.len_utf8();
        }
        self.pos += len;
        &rest[..len]
    }

    /// Saves the current position.
    #[must_use]
    pub const fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    /// Rewinds to a previously saved position.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }

    /// Runs `parse`, rewinding the cursor if it fails.
    pub fn attempt<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let start = self.checkpoint();
        let result = parse(self);
        if result.is_err() {
            self.restore(start);
        }
        result
    }
}

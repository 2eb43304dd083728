//! Generic cursor primitives for text parsers.
//!
//! The HTML and CSS parsers are built on the same handful of operations:
//! bounded lookahead, predicate-driven consumption, and whitespace
//! skipping. [`Scanner`] packages those so the concrete parsers only
//! implement grammar, not bookkeeping.
//!
//! The scanner itself evaluates nothing; misuse of [`Scanner::expect`] is
//! the only way it can fail.

use thiserror::Error;

/// Error raised when [`Scanner::expect`] does not find the literal the
/// caller demanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected `{expected}` at byte {at}, found `{found}`")]
pub struct ScanError {
    /// The literal the caller required next.
    pub expected: String,
    /// What the input actually held (truncated to the expected length).
    pub found: String,
    /// Byte offset into the input where the mismatch occurred.
    pub at: usize,
}

/// A cursor over an input string.
///
/// Positions are byte offsets, always kept on `char` boundaries by
/// advancing one codepoint at a time.
#[derive(Debug, Clone)]
pub struct Scanner {
    input: String,
    pos: usize,
}

impl Scanner {
    /// Create a scanner positioned at the start of `input`.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
        }
    }

    /// Byte offset of the cursor into the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Whether the entire input has been consumed.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek at the next character without consuming it.
    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Whether the next character satisfies `predicate`.
    ///
    /// Returns `false` at end of input.
    #[must_use]
    pub fn peek(&self, predicate: impl Fn(char) -> bool) -> bool {
        self.peek_char().is_some_and(predicate)
    }

    /// Whether the unconsumed input begins with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume and return the next `len` characters.
    ///
    /// Stops early at end of input, so the returned string may be shorter
    /// than requested.
    pub fn build(&mut self, len: usize) -> String {
        let built: String = self.rest().chars().take(len).collect();
        self.pos += built.len();
        built
    }

    /// Consume characters until `predicate` matches (or input ends) and
    /// return them. The matching character is left unconsumed.
    pub fn build_until(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut built = String::new();
        while let Some(c) = self.peek_char() {
            if predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
            built.push(c);
        }
        built
    }

    /// Advance the cursor by `count` characters (clamped to end of input).
    pub fn advance(&mut self, count: usize) {
        for _ in 0..count {
            match self.peek_char() {
                Some(c) => self.pos += c.len_utf8(),
                None => break,
            }
        }
    }

    /// Require `literal` to appear next and consume it.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the unconsumed input does not start with
    /// `literal`; the cursor is left unmoved in that case.
    pub fn expect(&mut self, literal: &str) -> Result<(), ScanError> {
        if self.starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(ScanError {
                expected: literal.to_string(),
                found: self.rest().chars().take(literal.chars().count()).collect(),
                at: self.pos,
            })
        }
    }

    /// Consume any run of whitespace at the cursor.
    pub fn skip_whitespace(&mut self) {
        let _ = self.build_until(|c| !c.is_whitespace());
    }

    /// Consume whitespace, then require and consume `literal`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if `literal` does not follow the whitespace.
    pub fn skip_whitespace_then(&mut self, literal: &str) -> Result<(), ScanError> {
        self.skip_whitespace();
        self.expect(literal)
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }
}

/// Trim whitespace from the right end of a string.
#[must_use]
pub fn rtrim(s: &str) -> String {
    s.trim_end().to_string()
}

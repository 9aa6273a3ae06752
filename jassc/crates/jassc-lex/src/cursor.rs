//! Byte cursor for traversing JASS source.
//!
//! This module provides the `Cursor` struct which owns the only mutable
//! scanning state the lexer has: a forward-only byte position and the
//! current line number. Line accounting happens in exactly one place,
//! [`Cursor::skip_newline`], so that `\n`, `\r\n` and `\r` each count as a
//! single line no matter which scanner meets them.

use crate::chars::is_newline;

/// A forward-only cursor over the bytes of a source string.
///
/// # Example
///
/// ```
/// use jassc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\r\nb");
/// cursor.advance();
/// assert_eq!(cursor.current_byte(), Some(b'\r'));
/// cursor.skip_newline();
/// assert_eq!(cursor.current_byte(), Some(b'b'));
/// assert_eq!(cursor.line(), 2);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self::with_line(source, 1)
    }

    /// Creates a new cursor at the start of `source` that continues counting
    /// from `line`.
    pub fn with_line(source: &'a str, line: u32) -> Self {
        Self {
            source,
            position: 0,
            line,
        }
    }

    /// Returns the byte at the cursor, or `None` at end of input.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the byte `offset` bytes ahead of the cursor, or `None` if that
    /// is past the end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use jassc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<<=");
    /// assert_eq!(cursor.peek_byte(2), Some(b'='));
    /// assert_eq!(cursor.peek_byte(3), None);
    /// ```
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    /// Returns true if the byte `offset` bytes ahead is `expected`.
    #[inline]
    pub fn peek_is(&self, offset: usize, expected: u8) -> bool {
        self.peek_byte(offset) == Some(expected)
    }

    /// Matches and consumes the expected byte if present.
    ///
    /// Never use this for line terminators; see [`Cursor::skip_newline`].
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.peek_is(0, expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Advances the cursor by one byte. Does nothing at end of input.
    ///
    /// Does not touch the line counter.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Advances the cursor by `count` bytes, stopping at end of input.
    ///
    /// Does not touch the line counter; callers only use this for byte runs
    /// they know contain no line terminators.
    #[inline]
    pub fn advance_by(&mut self, count: usize) {
        self.position = (self.position + count).min(self.source.len());
    }

    /// Moves the cursor to `position`, which must not lie behind the cursor.
    ///
    /// Positions past the end are clamped to the end.
    #[inline]
    pub fn jump_to(&mut self, position: usize) {
        debug_assert!(position >= self.position, "cursor moved backwards");
        self.position = position.clamp(self.position, self.source.len());
    }

    /// Skips exactly one logical line terminator and bumps the line counter.
    ///
    /// `\n` and a lone `\r` are one byte, `\r\n` is two. If the cursor is not
    /// on a terminator nothing happens and `false` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use jassc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("\r\r\n");
    /// assert!(cursor.skip_newline());
    /// assert_eq!(cursor.position(), 1);
    /// assert!(cursor.skip_newline());
    /// assert_eq!(cursor.position(), 3);
    /// assert_eq!(cursor.line(), 3);
    /// ```
    pub fn skip_newline(&mut self) -> bool {
        match self.current_byte() {
            Some(b'\n') => self.position += 1,
            Some(b'\r') => {
                self.position += 1;
                self.match_byte(b'\n');
            },
            _ => return false,
        }
        self.line += 1;
        true
    }

    /// Advances past one byte, or past one whole line terminator if the
    /// cursor is on one. Used by the delimited-region scanners.
    #[inline]
    pub fn bump(&mut self) {
        match self.current_byte() {
            Some(b) if is_newline(b) => {
                self.skip_newline();
            },
            Some(_) => self.position += 1,
            None => {},
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source bytes.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.source.as_bytes()
    }

    /// Returns the source bytes from the cursor to the end.
    #[inline]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.source.as_bytes()[self.position..]
    }
}

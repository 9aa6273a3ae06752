//! Comment and preprocessor lexing.
//!
//! `//` comments are dropped. `/* */` comments nest and become
//! `BlockComment` tokens covering their body. `//!` lines are vJass
//! preprocessor directives and become `Preprocessor` tokens covering the
//! text after the marker.

use tracing::trace;

use super::core::Scanner;
use crate::chars::is_newline;
use crate::token::{Token, TokenKind};

impl<'a, K: AsRef<str>> Scanner<'a, K> {
    /// Lexes slash, slash-assign, or anything that starts a comment.
    ///
    /// Handles: `/`, `/=`, `//`, `//!`, `/* */`
    pub(crate) fn lex_slash(&mut self) {
        match self.cursor.peek_byte(1) {
            Some(b'*') => self.lex_block_comment(),
            Some(b'/') if self.cursor.peek_is(2, b'!') => self.lex_preprocessor(),
            Some(b'/') => self.skip_line_comment(),
            Some(b'=') => {
                let start = self.cursor.position();
                self.cursor.advance_by(2);
                self.emit(TokenKind::DivideAssign, start);
            },
            _ => self.lex_single(TokenKind::Divide),
        }
    }

    /// Lexes a nested block comment.
    ///
    /// Each `/*` opens a level and each `*/` closes one. Both delimiters
    /// consume two bytes, so `/*/` opens a single level.
    fn lex_block_comment(&mut self) {
        let line = self.cursor.line();
        self.cursor.advance_by(2);
        let body_start = self.cursor.position();

        let mut depth = 1usize;
        let body_end = loop {
            match self.cursor.current_byte() {
                None => {
                    trace!(offset = body_start, depth, "unterminated block comment");
                    break self.cursor.position();
                },
                Some(b'*') if self.cursor.peek_is(1, b'/') => {
                    let end = self.cursor.position();
                    self.cursor.advance_by(2);
                    depth -= 1;
                    if depth == 0 {
                        break end;
                    }
                },
                Some(b'/') if self.cursor.peek_is(1, b'*') => {
                    self.cursor.advance_by(2);
                    depth += 1;
                },
                Some(_) => self.cursor.bump(),
            }
        };

        self.push(Token::with_length(
            TokenKind::BlockComment,
            body_start,
            line,
            body_end - body_start,
        ));
    }

    /// Lexes a `//!` preprocessor line.
    ///
    /// The body runs to the next `\n`, which is left for the newline
    /// scanner. A `\r` before it stays part of the body.
    fn lex_preprocessor(&mut self) {
        self.cursor.advance_by(3);
        let body_start = self.cursor.position();
        let body_end = self
            .cursor
            .remaining_bytes()
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.cursor.bytes().len(), |offset| body_start + offset);

        let line = self.cursor.line();
        self.cursor.jump_to(body_end);
        self.push(Token::with_length(
            TokenKind::Preprocessor,
            body_start,
            line,
            body_end - body_start,
        ));
    }

    /// Skips a `//` comment up to, not including, the line terminator.
    fn skip_line_comment(&mut self) {
        let end = self
            .cursor
            .remaining_bytes()
            .iter()
            .position(|&b| is_newline(b))
            .map_or(self.cursor.bytes().len(), |offset| self.cursor.position() + offset);
        self.cursor.jump_to(end);
    }
}

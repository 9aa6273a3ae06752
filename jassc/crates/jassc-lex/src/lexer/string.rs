//! String, rawcode and text-macro argument lexing.
//!
//! All three are delimited regions. The token starts after the opening
//! delimiter and its length covers the body only, so `"abc"` yields a
//! string token at offset 1 with length 3. Escape sequences are kept
//! verbatim. An unterminated region runs to the end of input.

use tracing::trace;

use super::core::Scanner;
use crate::token::{Token, TokenKind};

impl<'a, K: AsRef<str>> Scanner<'a, K> {
    /// Lexes a rawcode literal such as `'hfoo'`.
    pub(crate) fn lex_rawcode(&mut self) {
        self.lex_delimited(TokenKind::Rawcode, b'\'', true);
    }

    /// Lexes a string literal. `\"` does not close it, `\\"` does.
    pub(crate) fn lex_string(&mut self) {
        self.lex_delimited(TokenKind::String, b'"', true);
    }

    /// Lexes a text-macro argument such as `$NAME$`.
    ///
    /// There are no escapes; the next `$` always closes the argument.
    pub(crate) fn lex_text_macro_arg(&mut self) {
        self.lex_delimited(TokenKind::TextMacroArg, b'$', false);
    }

    /// Scans from an opening `delimiter` to the matching closing one.
    ///
    /// With `escapes`, a delimiter preceded by an odd number of backslashes
    /// belongs to the body. Line terminators inside the body advance the
    /// line counter; the token keeps the line it started on.
    fn lex_delimited(&mut self, kind: TokenKind, delimiter: u8, escapes: bool) {
        let line = self.cursor.line();
        self.cursor.advance();
        let body_start = self.cursor.position();

        let mut escaped = false;
        loop {
            match self.cursor.current_byte() {
                None => {
                    trace!(%kind, offset = body_start, "unterminated region");
                    break;
                },
                Some(b) if b == delimiter && !escaped => break,
                Some(b) => {
                    escaped = escapes && b == b'\\' && !escaped;
                    self.cursor.bump();
                },
            }
        }

        let body_end = self.cursor.position();
        // Closing delimiter; a no-op at end of input.
        self.cursor.advance();
        self.push(Token::with_length(kind, body_start, line, body_end - body_start));
    }
}

//! Identifier and keyword lexing.

use tracing::trace;

use super::core::Scanner;
use crate::chars::{next_token_start, utf8_width};
use crate::keywords::find_keyword;
use crate::token::{Token, TokenKind};

/// The vJass conditional-compilation directives, matched on the whole run.
const DIRECTIVES: [(&str, TokenKind); 4] = [
    ("#if", TokenKind::HashIf),
    ("#elseif", TokenKind::HashElseIf),
    ("#else", TokenKind::HashElse),
    ("#endif", TokenKind::HashEndIf),
];

impl<'a, K: AsRef<str>> Scanner<'a, K> {
    /// Lexes a run that starts with an ASCII letter as a keyword or an
    /// identifier.
    ///
    /// A keyword keeps the length of the run when its kind carries one (a
    /// table may map a spelling to `Identifier`) or when the table spells it
    /// differently from the kind's usual spelling (`endfunc` for
    /// `endfunction`).
    pub(crate) fn lex_word(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let bytes = self.cursor.bytes();
        let end = next_token_start(bytes, start);

        let keyword = find_keyword(bytes, start, self.keywords)
            .and_then(|index| self.kinds.get(index).copied());
        let token = match keyword {
            Some(kind)
                if kind.has_length() || kind.spelling().map(str::len) != Some(end - start) =>
            {
                Token::with_length(kind, start, line, end - start)
            },
            Some(kind) => Token::new(kind, start, line),
            None => Token::with_length(TokenKind::Identifier, start, line, end - start),
        };

        self.cursor.jump_to(end);
        self.push(token);
    }

    /// Lexes a `#` directive such as `#if` or `#endif`.
    ///
    /// Any other `#` run (`#define`, a lone `#`) becomes an identifier
    /// covering the run.
    pub(crate) fn lex_hash(&mut self) {
        let start = self.cursor.position();
        let bytes = self.cursor.bytes();
        let end = next_token_start(bytes, start + 1);
        let run = &bytes[start..end];

        match DIRECTIVES.iter().find(|(spelling, _)| spelling.as_bytes() == run) {
            Some(&(_, kind)) => {
                self.cursor.jump_to(end);
                self.emit(kind, start);
            },
            None => {
                trace!(offset = start, "unknown directive, lexing as identifier");
                self.lex_identifier();
            },
        }
    }

    /// Lexes an identifier from the cursor.
    ///
    /// Always consumes at least one character. If the cursor sits on a byte
    /// that cannot continue a word (`@`, `#`, a non-ASCII character) that
    /// whole character is taken first, followed by any word bytes after it.
    pub(crate) fn lex_identifier(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let bytes = self.cursor.bytes();

        let mut end = next_token_start(bytes, start);
        if end == start {
            trace!(offset = start, byte = bytes[start], "unexpected character");
            let width = utf8_width(bytes[start]).min(bytes.len() - start);
            end = next_token_start(bytes, start + width);
        }

        self.cursor.jump_to(end);
        self.push(Token::with_length(TokenKind::Identifier, start, line, end - start));
    }
}

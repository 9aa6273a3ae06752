//! Core lexer implementation.
//!
//! This module contains the public `Lexer` state and the per-call `Scanner`
//! that walks one source string. The scanner's methods are spread over the
//! sibling modules by token family; this file owns the dispatch loop.

use tracing::debug;

use crate::cursor::Cursor;
use crate::keywords::KeywordTable;
use crate::token::{Token, TokenKind};

/// Lexer for JASS and vJass source.
///
/// A `Lexer` owns the tokens produced so far and the running line counter.
/// It is meant to scan a single source string; calling
/// [`Lexer::tokenize`] again appends to the same token list and keeps
/// counting lines from where the previous call stopped.
///
/// # Example
///
/// ```
/// use jassc_lex::{KeywordTable, Lexer, TokenKind};
///
/// let table = KeywordTable::jass();
/// let mut lexer = Lexer::new();
/// let tokens = lexer.tokenize("set x = 1\n", table.words(), table.kinds());
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Set,
///         TokenKind::Identifier,
///         TokenKind::Assign,
///         TokenKind::Int,
///         TokenKind::Newline,
///     ]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexer {
    /// Every token produced so far.
    tokens: Vec<Token>,

    /// Line the next token starts on (1-based).
    line: u32,
}

impl Lexer {
    /// Creates an empty lexer positioned on line 1.
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            line: 1,
        }
    }

    /// Tokenizes `source` and returns every token produced so far.
    ///
    /// `keywords` must be sorted by byte value and index-aligned with
    /// `kinds`. Neither is checked here; build a [`KeywordTable`] when the
    /// table comes from outside the program. A keyword whose index has no
    /// kind is lexed as an identifier.
    ///
    /// Scanning never fails. Input that is not valid JASS is still covered
    /// by tokens, mostly identifiers, and left for the parser to reject.
    pub fn tokenize<K: AsRef<str>>(
        &mut self,
        source: &str,
        keywords: &[K],
        kinds: &[TokenKind],
    ) -> &[Token] {
        let _span = tracing::debug_span!("tokenize", bytes = source.len()).entered();
        let first = self.tokens.len();

        let mut scanner = Scanner {
            cursor: Cursor::with_line(source, self.line),
            keywords,
            kinds,
            tokens: &mut self.tokens,
        };
        scanner.run();
        self.line = scanner.cursor.line();

        debug!(
            tokens = self.tokens.len() - first,
            line = self.line,
            "tokenized source"
        );
        &self.tokens
    }

    /// Tokenizes `source` with a validated keyword table.
    pub fn tokenize_with(&mut self, source: &str, table: &KeywordTable) -> &[Token] {
        self.tokenize(source, table.words(), table.kinds())
    }

    /// Returns every token produced so far.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the line the next token would start on (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Consumes the lexer and returns its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks one source string, appending tokens to the lexer's list.
pub(crate) struct Scanner<'a, K> {
    /// Byte cursor and line counter.
    pub(crate) cursor: Cursor<'a>,

    /// Sorted keyword spellings.
    pub(crate) keywords: &'a [K],

    /// Kinds for `keywords`, index-aligned.
    pub(crate) kinds: &'a [TokenKind],

    /// Output list, shared with the owning `Lexer`.
    pub(crate) tokens: &'a mut Vec<Token>,
}

impl<'a, K: AsRef<str>> Scanner<'a, K> {
    /// Scans until the end of input.
    ///
    /// Every dispatch step consumes at least one byte, so this terminates.
    pub(crate) fn run(&mut self) {
        while let Some(byte) = self.cursor.current_byte() {
            self.scan_token(byte);
        }
    }

    /// Dispatches on the byte at the cursor.
    fn scan_token(&mut self, byte: u8) {
        match byte {
            b if b.is_ascii_alphabetic() => self.lex_word(),
            b'\n' | b'\r' => self.lex_newline(),
            b' ' | b'\t' => self.cursor.advance(),
            b'+' => self.lex_plus(),
            b'-' => self.lex_minus(),
            b'*' => self.lex_star(),
            b'/' => self.lex_slash(),
            b'<' => self.lex_less(),
            b'>' => self.lex_greater(),
            b'=' => self.lex_equals(),
            b'!' => self.lex_bang(),
            b'%' => self.lex_percent(),
            b'(' => self.lex_single(TokenKind::LParen),
            b')' => self.lex_single(TokenKind::RParen),
            b'[' => self.lex_single(TokenKind::LBracket),
            b']' => self.lex_single(TokenKind::RBracket),
            b'{' => self.lex_single(TokenKind::LBrace),
            b'}' => self.lex_single(TokenKind::RBrace),
            b',' => self.lex_single(TokenKind::Comma),
            b';' => self.lex_single(TokenKind::Semicolon),
            b'.' => self.lex_dot(),
            b'\'' => self.lex_rawcode(),
            b'"' => self.lex_string(),
            b'$' => self.lex_text_macro_arg(),
            b'#' => self.lex_hash(),
            _ => self.lex_number_or_identifier(),
        }
    }

    /// Emits one newline token for `\n`, `\r\n` or `\r`.
    ///
    /// The token carries the line the terminator sits on; the counter is
    /// bumped afterwards.
    fn lex_newline(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        self.cursor.skip_newline();
        self.push(Token::new(TokenKind::Newline, start, line));
    }

    /// Emits a token of `kind` starting at `start` on the current line.
    ///
    /// Only for tokens that cannot contain a line terminator.
    #[inline]
    pub(crate) fn emit(&mut self, kind: TokenKind, start: usize) {
        let line = self.cursor.line();
        self.push(Token::new(kind, start, line));
    }

    #[inline]
    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        let table = KeywordTable::jass();
        let mut lexer = Lexer::new();
        lexer.tokenize_with(source, &table);
        lexer.into_tokens()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).iter().map(Token::kind).collect()
    }

    #[test]
    fn test_empty_source() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(lex("  \t \t").is_empty());
    }

    #[test]
    fn test_newline_variants_each_count_once() {
        for source in ["\n", "\r", "\r\n"] {
            let table = KeywordTable::jass();
            let mut lexer = Lexer::new();
            let tokens = lexer.tokenize_with(source, &table).to_vec();
            assert_eq!(tokens, [Token::new(TokenKind::Newline, 0, 1)], "{:?}", source);
            assert_eq!(lexer.line(), 2, "{:?}", source);
        }
    }

    #[test]
    fn test_crlf_between_identifiers() {
        assert_eq!(
            lex("a\r\nb"),
            [
                Token::with_length(TokenKind::Identifier, 0, 1, 1),
                Token::new(TokenKind::Newline, 1, 1),
                Token::with_length(TokenKind::Identifier, 3, 2, 1),
            ]
        );
    }

    #[test]
    fn test_lf_cr_is_two_newlines() {
        let tokens = lex("\n\r");
        assert_eq!(
            tokens,
            [
                Token::new(TokenKind::Newline, 0, 1),
                Token::new(TokenKind::Newline, 1, 2),
            ]
        );
    }

    #[test]
    fn test_line_numbers_advance() {
        let tokens = lex("globals\n    integer x\nendglobals");
        let lines: Vec<u32> = tokens.iter().map(Token::line).collect();
        assert_eq!(lines, [1, 1, 2, 2, 2, 3]);
    }

    #[test]
    fn test_custom_keyword_table() {
        let keywords = ["if", "in"];
        let kinds = [TokenKind::If, TokenKind::Identifier];

        let mut lexer = Lexer::new();
        assert_eq!(
            lexer.tokenize("if", &keywords, &kinds),
            [Token::new(TokenKind::If, 0, 1)]
        );

        let mut lexer = Lexer::new();
        assert_eq!(
            lexer.tokenize("iffy", &keywords, &kinds),
            [Token::with_length(TokenKind::Identifier, 0, 1, 4)]
        );

        let mut lexer = Lexer::new();
        assert_eq!(
            lexer.tokenize("i", &keywords, &kinds),
            [Token::with_length(TokenKind::Identifier, 0, 1, 1)]
        );
    }

    #[test]
    fn test_missing_kind_falls_back_to_identifier() {
        let keywords = ["call", "set"];
        let kinds = [TokenKind::Call];
        let mut lexer = Lexer::new();
        let tokens = lexer.tokenize("call set", &keywords, &kinds);
        assert_eq!(
            tokens,
            [
                Token::new(TokenKind::Call, 0, 1),
                Token::with_length(TokenKind::Identifier, 5, 1, 3),
            ]
        );
    }

    #[test]
    fn test_state_is_not_reset_between_calls() {
        let table = KeywordTable::jass();
        let mut lexer = Lexer::new();
        lexer.tokenize_with("set\n", &table);
        let tokens = lexer.tokenize_with("call", &table);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2], Token::new(TokenKind::Call, 0, 2));
        assert_eq!(lexer.line(), 2);
    }

    #[test]
    fn test_tokens_accessor_matches_return_value() {
        let table = KeywordTable::jass();
        let mut lexer = Lexer::new();
        let returned = lexer.tokenize_with("local integer i = 0", &table).to_vec();
        assert_eq!(lexer.tokens(), returned.as_slice());
    }

    #[test]
    fn test_function_declaration() {
        assert_eq!(
            kinds("function Foo takes integer a returns nothing\nendfunction"),
            [
                TokenKind::Function,
                TokenKind::Identifier,
                TokenKind::Takes,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Returns,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::EndFunction,
            ]
        );
    }

    #[test]
    fn test_single_glyphs() {
        assert_eq!(
            kinds("()[]{},;"),
            [
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Comma,
                TokenKind::Semicolon,
            ]
        );
    }
}

//! Number literal lexing.
//!
//! Numbers are recognized by two probes that only measure: given a start
//! offset they report how many bytes form a literal, or 0 if none does.
//! The scanner decides between integer, real and identifier from the two
//! answers.
//!
//! Both probes run in one of two modes. Without a bound they stop at the
//! first byte that may start a token. With a bound they must consume every
//! byte up to it, and any stray byte rejects the whole literal.

use tracing::trace;

use super::core::Scanner;
use crate::chars::{is_hex_digit, is_token_start};
use crate::token::{Token, TokenKind};

/// Resolves the scan window for a probe, or `None` if it is empty.
fn window(source: &[u8], start: usize, end: Option<usize>) -> Option<&[u8]> {
    let limit = end.map_or(source.len(), |end| end.min(source.len()));
    if start >= limit {
        return None;
    }
    Some(&source[start..limit])
}

/// Measures an integer literal starting at `start`.
///
/// Recognizes decimal (`42`), octal (`0755`, a leading `0`) and hexadecimal
/// (`0x1F`, `0X1f`) forms. Returns the literal's length in bytes, or 0 if
/// the bytes at `start` are not an integer.
///
/// Without `end` the literal stops at the first byte that may start a
/// token. With `end` every byte in `start..end` must be a digit of the
/// detected base.
///
/// # Example
///
/// ```
/// use jassc_lex::integer_literal_len;
///
/// assert_eq!(integer_literal_len(b"42)", 0, None), 2);
/// assert_eq!(integer_literal_len(b"0x1F ", 0, None), 4);
/// assert_eq!(integer_literal_len(b"0755", 0, None), 4);
/// assert_eq!(integer_literal_len(b"08", 0, None), 0);
/// assert_eq!(integer_literal_len(b"12a", 0, None), 0);
/// assert_eq!(integer_literal_len(b"12)", 0, Some(3)), 0);
/// ```
pub fn integer_literal_len(source: &[u8], start: usize, end: Option<usize>) -> usize {
    let Some(span) = window(source, start, end) else {
        return 0;
    };
    if start == source.len() - 1 {
        return usize::from(span[0].is_ascii_digit());
    }

    let bounded = end.is_some();
    let is_hex = span[0] == b'0' && matches!(span.get(1), Some(b'x' | b'X'));

    if is_hex && span.len() > 2 {
        for (i, &b) in span.iter().enumerate().skip(2) {
            if !bounded && is_token_start(b) {
                // `0x` alone is not a literal.
                return if i == 2 { 0 } else { i };
            }
            if !is_hex_digit(b) {
                return 0;
            }
        }
        return span.len();
    }

    let ceiling = if span[0] == b'0' && !is_hex { b'7' } else { b'9' };
    for (i, &b) in span.iter().enumerate() {
        if !bounded && is_token_start(b) {
            return i;
        }
        if !(b'0'..=ceiling).contains(&b) {
            return 0;
        }
    }
    span.len()
}

/// Measures a real literal starting at `start`.
///
/// Accepts `d.d`, `d.` and `.d` where `d` is one or more decimal digits.
/// A digit run without a dot is also accepted; callers that need a dot
/// check for it themselves. Returns the literal's length in bytes, or 0.
///
/// Without `end`, a non-digit directly after the dot ends the literal at
/// the dot when digits came before it (`1.x` measures `1.`). A word byte
/// after fractional digits rejects the literal (`1.5x` is not a real).
///
/// # Example
///
/// ```
/// use jassc_lex::real_literal_len;
///
/// assert_eq!(real_literal_len(b"1.5)", 0, None), 3);
/// assert_eq!(real_literal_len(b".5", 0, None), 2);
/// assert_eq!(real_literal_len(b"1.", 0, None), 2);
/// assert_eq!(real_literal_len(b"1.e", 0, None), 2);
/// assert_eq!(real_literal_len(b"1.5x", 0, None), 0);
/// assert_eq!(real_literal_len(b".", 0, None), 0);
/// ```
pub fn real_literal_len(source: &[u8], start: usize, end: Option<usize>) -> usize {
    let Some(span) = window(source, start, end) else {
        return 0;
    };
    if start == source.len() - 1 {
        return usize::from(span[0].is_ascii_digit());
    }

    let bounded = end.is_some();

    let mut dot = None;
    for (i, &b) in span.iter().enumerate() {
        if b == b'.' {
            dot = Some(i);
            break;
        }
        if !bounded && is_token_start(b) {
            return i;
        }
        if !b.is_ascii_digit() {
            return 0;
        }
    }
    let Some(dot) = dot else {
        return span.len();
    };

    let before = dot > 0;
    let fraction = span[dot + 1..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let stop = dot + 1 + fraction;

    if stop == span.len() {
        return if before || fraction > 0 { stop } else { 0 };
    }
    if bounded {
        return 0;
    }
    if fraction == 0 {
        return if before { stop } else { 0 };
    }
    if is_token_start(span[stop]) {
        stop
    } else {
        0
    }
}

impl<'a, K: AsRef<str>> Scanner<'a, K> {
    /// Lexes a number, or an identifier if no number starts here.
    ///
    /// An integer directly followed by `.` is re-measured as a real; the
    /// real wins only if it is longer. `0x1F.` therefore stays an integer
    /// followed by a dot.
    pub(crate) fn lex_number_or_identifier(&mut self) {
        let start = self.cursor.position();
        let bytes = self.cursor.bytes();

        let int_len = integer_literal_len(bytes, start, None);
        if int_len == 0 {
            trace!(offset = start, "no literal, lexing as identifier");
            self.lex_identifier();
            return;
        }

        let (kind, length) = match bytes.get(start + int_len) {
            Some(b'.') => match real_literal_len(bytes, start, None) {
                real if real > int_len => (TokenKind::Real, real),
                _ => (TokenKind::Int, int_len),
            },
            _ => (TokenKind::Int, int_len),
        };

        let line = self.cursor.line();
        self.cursor.jump_to(start + length);
        self.push(Token::with_length(kind, start, line, length));
    }

    /// Lexes `.`, or a real literal such as `.5`.
    pub(crate) fn lex_dot(&mut self) {
        let start = self.cursor.position();
        if self.cursor.peek_byte(1).is_some_and(|b| b.is_ascii_digit()) {
            let length = real_literal_len(self.cursor.bytes(), start, None);
            if length > 0 {
                let line = self.cursor.line();
                self.cursor.jump_to(start + length);
                self.push(Token::with_length(TokenKind::Real, start, line, length));
                return;
            }
        }
        self.lex_single(TokenKind::Dot);
    }
}

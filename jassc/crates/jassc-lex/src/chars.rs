//! Byte classification helpers.
//!
//! JASS is scanned byte by byte. Only ASCII letters, digits and `_` can
//! continue a word; every other byte (including every byte of a multi-byte
//! UTF-8 sequence) may start a new token.

/// Checks if a byte may start a new token.
///
/// Anything outside `[0-9A-Za-z_]` is potentially a token start.
///
/// # Example
///
/// ```
/// use jassc_lex::chars::is_token_start;
///
/// assert!(is_token_start(b' '));
/// assert!(is_token_start(b'.'));
/// assert!(!is_token_start(b'a'));
/// assert!(!is_token_start(b'_'));
/// assert!(!is_token_start(b'7'));
/// ```
#[inline]
pub const fn is_token_start(b: u8) -> bool {
    !is_word_byte(b)
}

/// Checks if a byte may appear inside an identifier or keyword run.
#[inline]
pub const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Checks if a byte begins a line terminator (`\n`, `\r` or `\r\n`).
#[inline]
pub const fn is_newline(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Checks if a byte is a hexadecimal digit.
#[inline]
pub const fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Returns the first offset at or after `from` whose byte may start a token,
/// or `bytes.len()` if the rest of the input is a single word.
///
/// # Example
///
/// ```
/// use jassc_lex::chars::next_token_start;
///
/// assert_eq!(next_token_start(b"call Foo", 0), 4);
/// assert_eq!(next_token_start(b"call Foo", 5), 8);
/// assert_eq!(next_token_start(b"(x", 0), 0);
/// ```
pub fn next_token_start(bytes: &[u8], from: usize) -> usize {
    let from = from.min(bytes.len());
    bytes[from..]
        .iter()
        .position(|&b| is_token_start(b))
        .map_or(bytes.len(), |offset| from + offset)
}

/// Returns the UTF-8 sequence length announced by a leading byte.
///
/// Continuation and invalid bytes report 1 so callers always make progress.
#[inline]
pub const fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

//! Span module - Source location tracking.
//!
//! This module provides the byte-range type shared by the lexer and the
//! downstream parser. JASS tokens are located by byte offset and the line
//! the token opens on; columns are left to whoever renders diagnostics.
//!
//! # Examples
//!
//! ```
//! use jassc_util::span::Span;
//!
//! // `call` on the second line of "\ncall Foo()"
//! let span = Span::new(1, 5, 2);
//! assert_eq!(span.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

/// Source location span
///
/// A `Span` represents a half-open byte range `[start, end)` in a single
/// source string together with the 1-based line the range starts on.
///
/// # Examples
///
/// ```
/// use jassc_util::span::Span;
///
/// let span = Span::new(10, 20, 1);
/// assert_eq!(span.len(), 10);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Number of bytes covered by the span.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the source text covered by this span, if it is in bounds and
    /// falls on character boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use jassc_util::span::Span;
    ///
    /// let source = "set x = 1";
    /// assert_eq!(Span::new(4, 5, 1).snippet(source), Some("x"));
    /// assert_eq!(Span::new(4, 50, 1).snippet(source), None);
    /// ```
    pub fn snippet<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{} (line {})", self.start, self.end, self.line)
    }
}

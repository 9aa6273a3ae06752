//! jassc-util - Shared foundation types for the jassc toolchain.
//!
//! Everything here is independent of any particular compiler phase so that
//! the lexer and the parser built on top of it agree on how source locations
//! are described.
//!
//! - [`span`] - byte ranges annotated with their starting line

#![warn(missing_docs)]

pub mod span;

pub use span::Span;

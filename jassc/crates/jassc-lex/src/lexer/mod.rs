//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - `Lexer` state, the per-call scanner and dispatch
//! - `identifier` - Keyword, identifier and `#` directive lexing
//! - `number` - Integer and real literal probes
//! - `string` - Rawcode, string and text-macro argument regions
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Block comments, preprocessor lines and line comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
pub use self::number::{integer_literal_len, real_literal_len};

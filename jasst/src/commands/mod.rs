//! Command modules for the jasst CLI.
//!
//! Each subcommand is implemented in its own file and writes to a caller
//! supplied output stream.

pub mod keywords;
pub mod tokens;

// Re-export command types and functions
pub use keywords::run_keywords;
pub use tokens::{run_tokens, OutputFormat, TokensArgs};

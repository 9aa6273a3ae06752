//! The `tokens` command: tokenizes source files and dumps the result.
//!
//! Files are read and tokenized in parallel, one lexer per file over the
//! shared keyword table, then printed in the order they were given.

use std::io::Write;
use std::path::{Path, PathBuf};

use jassc_lex::{KeywordTable, Lexer, Token, TokenKind};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{JasstError, Result};

/// How token dumps are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `line:offset kind text` row per token.
    #[default]
    Text,
    /// A JSON array with one object per file.
    Json,
}

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source files to tokenize.
    pub input: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Drop newline and block comment tokens from the dump.
    pub skip_trivia: bool,
}

/// One tokenized file.
struct Listing {
    path: PathBuf,
    source: String,
    tokens: Vec<Token>,
}

/// JSON shape of one token.
#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: TokenKind,
    line: u32,
    start: usize,
    end: usize,
    text: &'a str,
}

/// JSON shape of one file.
#[derive(Serialize)]
struct FileRecord<'a> {
    path: &'a Path,
    tokens: Vec<TokenRecord<'a>>,
}

/// Runs the tokens command.
pub fn run_tokens(args: &TokensArgs, table: &KeywordTable, out: &mut impl Write) -> Result<()> {
    let listings = args
        .input
        .par_iter()
        .map(|path| tokenize_file(path, table))
        .collect::<Result<Vec<_>>>()?;

    let total: usize = listings.iter().map(|listing| listing.tokens.len()).sum();
    info!(files = listings.len(), tokens = total, "tokenized input");

    match args.format {
        OutputFormat::Text => write_text(&listings, args.skip_trivia, out),
        OutputFormat::Json => write_json(&listings, args.skip_trivia, out),
    }
}

fn tokenize_file(path: &Path, table: &KeywordTable) -> Result<Listing> {
    let source = std::fs::read_to_string(path).map_err(|source| JasstError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "read source");

    let mut lexer = Lexer::new();
    lexer.tokenize_with(&source, table);
    Ok(Listing {
        path: path.to_path_buf(),
        tokens: lexer.into_tokens(),
        source,
    })
}

fn visible(tokens: &[Token], skip_trivia: bool) -> impl Iterator<Item = &Token> {
    tokens
        .iter()
        .filter(move |token| !(skip_trivia && token.kind().is_trivia()))
}

fn write_text(listings: &[Listing], skip_trivia: bool, out: &mut impl Write) -> Result<()> {
    let many = listings.len() > 1;
    for listing in listings {
        if many {
            writeln!(out, "==> {} <==", listing.path.display())?;
        }
        for token in visible(&listing.tokens, skip_trivia) {
            writeln!(
                out,
                "{}:{}\t{:?}\t{:?}",
                token.line(),
                token.start(),
                token.kind(),
                token.text(&listing.source)
            )?;
        }
    }
    Ok(())
}

fn write_json(listings: &[Listing], skip_trivia: bool, out: &mut impl Write) -> Result<()> {
    let files: Vec<FileRecord<'_>> = listings
        .iter()
        .map(|listing| FileRecord {
            path: &listing.path,
            tokens: visible(&listing.tokens, skip_trivia)
                .map(|token| TokenRecord {
                    kind: token.kind(),
                    line: token.line(),
                    start: token.start(),
                    end: token.end(&listing.source),
                    text: token.text(&listing.source),
                })
                .collect(),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &files)?;
    writeln!(out)?;
    Ok(())
}

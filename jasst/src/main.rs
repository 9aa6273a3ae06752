//! Jasst CLI - A command-line tool for inspecting JASS token streams.
//!
//! This is the main entry point for the jasst CLI application.
//! It uses clap for argument parsing, loads the keyword table and
//! dispatches to the appropriate command handler.

mod commands;
mod error;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jassc_lex::KeywordTable;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_keywords, run_tokens, OutputFormat, TokensArgs};
use error::{JasstError, Result};

/// Jasst - A CLI tool for inspecting JASS token streams
///
/// Jasst runs the jassc lexer over JASS and vJass sources and prints the
/// resulting tokens, optionally with a custom keyword table.
#[derive(Parser, Debug)]
#[command(name = "jasst")]
#[command(author = "jassc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for inspecting JASS token streams", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "JASST_VERBOSE")]
    verbose: bool,

    /// Path to a TOML keyword table (default: built-in JASS + vJass)
    #[arg(short, long, global = true, env = "JASST_KEYWORDS")]
    keywords: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "JASST_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the jasst CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize source files and print the tokens
    Tokens(TokensCommand),

    /// Print the active keyword table
    Keywords,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Leave newlines and block comments out of the dump
    #[arg(long)]
    skip_trivia: bool,
}

/// Main entry point for the jasst CLI.
///
/// Errors are reported through their `Display` message on stderr.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Initializes logging, loads the keyword table, and dispatches to the
/// selected command.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let table = load_keywords(cli.keywords.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, &table, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so token dumps on stdout stay machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JasstError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load the keyword table from a file, or fall back to the built-in one.
fn load_keywords(path: Option<&Path>) -> Result<KeywordTable> {
    let table = match path {
        Some(path) => KeywordTable::from_path(path)?,
        None => KeywordTable::jass(),
    };
    info!(keywords = table.len(), "keyword table ready");
    Ok(table)
}

/// Execute the selected command.
fn execute_command(command: Commands, table: &KeywordTable, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                input: args.input,
                format: args.format,
                skip_trivia: args.skip_trivia,
            };
            run_tokens(&tokens_args, table, out)
        },
        Commands::Keywords => run_keywords(table, out),
    }
}

//! Gqlt CLI - inspect GraphQL documents at the token level.
//!
//! This is the main entry point for the gqlt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_check, run_config, run_position, run_tokens, CheckArgs, ConfigArgs, PositionArgs,
    TokensArgs,
};
use config::{Config, OutputFormat};
use error::{GqltError, Result};

/// Gqlt - inspect GraphQL documents at the token level
///
/// Gqlt lists the tokens of a GraphQL document, reports input the lexer
/// cannot scan, and maps scalar indices to line and column positions.
#[derive(Parser, Debug)]
#[command(name = "gqlt")]
#[command(author = "Gqlc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect GraphQL documents at the token level", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "GQLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GQLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "GQLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the gqlt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of a document
    ///
    /// Prints one `line:column kind lexeme` line per token, or a JSON array
    /// of token records.
    Tokens(TokensCommand),

    /// Check that a document is lexically valid
    ///
    /// Reports input the lexer cannot scan as a diagnostic with the
    /// offending source line.
    Check(CheckCommand),

    /// Print the line and column of a scalar index
    Position(PositionCommand),

    /// Print the effective configuration, or write it to a file
    Config(ConfigCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Document to read (`-` for stdin)
    input: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also list whitespace, commas and comments
    #[arg(short, long)]
    trivia: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Document to read (`-` for stdin)
    input: PathBuf,
}

/// Arguments for the position subcommand.
#[derive(Parser, Debug)]
struct PositionCommand {
    /// Document to read (`-` for stdin)
    input: PathBuf,

    /// Scalar (not byte) index into the document
    index: usize,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this path instead of printing it
    #[arg(short, long)]
    write: Option<PathBuf>,
}

/// Main entry point for the gqlt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler. Errors are printed to
/// stderr and turn into a failure exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.no_color, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with command output. `GQLT_LOG`
/// overrides the level with an `EnvFilter` directive.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env("GQLT_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| GqltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, no_color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(TokensArgs {
            input: args.input,
            format: args.format.unwrap_or(config.format),
            trivia: args.trivia || config.show_trivia,
        }),
        Commands::Check(args) => run_check(CheckArgs {
            input: args.input,
            fail_on_unrecognized: config.diagnostics.fail_on_unrecognized,
            color: config.diagnostics.color && !no_color,
        }),
        Commands::Position(args) => run_position(PositionArgs {
            input: args.input,
            index: args.index,
        }),
        Commands::Config(args) => run_config(ConfigArgs { write: args.write }, &config),
    }
}

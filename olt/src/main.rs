//! olt - token tool for the O programming language.
//!
//! This is the main entry point for the olt CLI application. It uses clap
//! for argument parsing and dispatches to the command handlers, which drive
//! the `olc-lex` scanner over the given source files.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::print_error;
use commands::traits::Command;
use commands::{CheckArgs, CheckCommand, LexArgs, LexCommand};
use config::Config;
use error::{OltError, Result};

/// olt - inspect how O source files tokenize
#[derive(Parser, Debug)]
#[command(name = "olt")]
#[command(author = "O Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token tool for the O programming language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "OLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "OLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "OLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the olt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of source files
    ///
    /// Tokenizes each file and prints one line per token, or one JSON
    /// document per file with `--format json`.
    Lex(LexOpts),

    /// Check that source files tokenize
    ///
    /// Prints `<file>: ok (<n> tokens)` for each file that scans cleanly
    /// and the lexical error for each one that does not.
    Check(CheckOpts),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexOpts {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Number of files tokenized in parallel
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckOpts {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of files tokenized in parallel
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

/// Main entry point for the olt CLI.
///
/// Any failure is printed to stderr and the process exits with status 1.
fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        // nothing more to report if stderr itself is gone
        let _ = print_error(&mut std::io::stderr(), &e);
        std::process::exit(1);
    }
}

/// Loads configuration, initializes logging and runs the selected command.
fn run(cli: Cli) -> Result<()> {
    let (config, config_path) = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    match &config_path {
        Some(path) => debug!(path = %path.display(), "loaded configuration"),
        None => debug!("no configuration file found, using defaults"),
    }

    execute_command(cli.command, &config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbosity flag when it is set.
/// Log output goes to stderr so it never mixes with token listings.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

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
        .map_err(|e| OltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from an explicit path, or search the standard
/// locations.
fn load_config(config_path: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    match config_path {
        Some(path) => Ok((Config::load_from_path(path)?, Some(path.to_path_buf()))),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Lex(opts) => run_command::<LexCommand>(
            LexArgs {
                files: opts.files,
                format: opts.format,
                jobs: opts.jobs,
            },
            config,
        ),
        Commands::Check(opts) => run_command::<CheckCommand>(
            CheckArgs {
                files: opts.files,
                jobs: opts.jobs,
            },
            config,
        ),
    }
}

fn run_command<C: Command>(args: C::Args, config: &Config) -> Result<()> {
    debug!(command = C::name(), "running");
    C::new(args, config).execute()
}

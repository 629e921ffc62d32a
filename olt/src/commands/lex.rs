//! Lex command implementation.
//!
//! Prints the token stream of each input file, either as the classic text
//! listing or as JSON.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use olc_lex::Token;
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{lex_files, LexedFile, OutputFormat};
use crate::commands::traits::Command;
use crate::config::{Config, LexConfig};
use crate::error::Result;

/// Width of the `=` banner around a text listing.
const BANNER_WIDTH: usize = 50;

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Source files to tokenize.
    pub files: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<String>,
    /// Parallel job override.
    pub jobs: Option<u32>,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: LexConfig,
}

/// JSON shape of one file's tokens.
#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    tokens: &'a [Token],
}

impl LexCommand {
    /// Effective output format: command line first, then configuration.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.args
            .format
            .as_deref()
            .unwrap_or(&self.config.format)
            .parse()
    }

    /// Effective job count: command line first, then configuration.
    pub fn jobs(&self) -> u32 {
        self.args.jobs.unwrap_or(self.config.jobs)
    }

    /// Tokenize all files and print them to `out` in input order.
    ///
    /// Stops at the first file that fails; files before it have already
    /// been printed.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let format = self.output_format()?;
        let results = lex_files(&self.args.files, self.jobs())?;

        for result in results {
            let lexed = match result {
                Ok(lexed) => lexed,
                Err(e) => {
                    out.flush()?;
                    return Err(e);
                },
            };
            match format {
                OutputFormat::Text => write_text(out, &lexed)?,
                OutputFormat::Json => write_json(out, &lexed)?,
            }
        }

        out.flush()?;
        Ok(())
    }
}

/// Writes the text listing of one file.
fn write_text<W: Write>(out: &mut W, lexed: &LexedFile) -> io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "Tokenizing file: {}", lexed.path.display())?;
    writeln!(out, "{}", banner)?;
    for token in &lexed.tokens {
        writeln!(out, "{}", token)?;
    }
    writeln!(out, "{}", banner)?;
    writeln!(out, "Total tokens: {}", lexed.tokens.len())
}

/// Writes one file as a single-line JSON document.
fn write_json<W: Write>(out: &mut W, lexed: &LexedFile) -> Result<()> {
    let report = FileReport {
        file: lexed.path.display().to_string(),
        tokens: &lexed.tokens,
    };
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

impl Command for LexCommand {
    type Args = LexArgs;

    fn new(args: Self::Args, config: &Config) -> Self {
        Self {
            args,
            config: config.lex.clone(),
        }
    }

    fn execute(&self) -> Result<()> {
        debug!(files = self.args.files.len(), "lex");
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        self.run_to(&mut out)
    }

    fn name() -> &'static str {
        "lex"
    }
}

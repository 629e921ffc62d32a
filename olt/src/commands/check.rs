//! Check command implementation.
//!
//! Tokenizes every input file without printing tokens. Each file gets one
//! line: `<path>: ok (<n> tokens)` on stdout, or its error on stderr.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::commands::common::{lex_files, print_error};
use crate::commands::traits::Command;
use crate::config::{Config, LexConfig};
use crate::error::{OltError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Parallel job override.
    pub jobs: Option<u32>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: LexConfig,
}

impl CheckCommand {
    /// Check all files, writing successes to `out` and failures to `err`.
    ///
    /// Every file is reported; the command fails if any of them did.
    pub fn run_to<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> Result<()> {
        let jobs = self.args.jobs.unwrap_or(self.config.jobs);
        let results = lex_files(&self.args.files, jobs)?;

        let mut failed = 0usize;
        let mut total = Duration::ZERO;
        for result in results {
            match result {
                Ok(lexed) => {
                    total += lexed.elapsed;
                    writeln!(
                        out,
                        "{}: ok ({} tokens)",
                        lexed.path.display(),
                        lexed.tokens.len()
                    )?;
                },
                Err(e) => {
                    failed += 1;
                    print_error(err, &e)?;
                },
            }
        }
        out.flush()?;

        debug!(
            checked = self.args.files.len(),
            failed,
            lex_ms = total.as_millis() as u64,
            "check finished"
        );

        if failed > 0 {
            return Err(OltError::CommandExecution(format!(
                "{} file(s) failed lexical analysis",
                failed
            )));
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: Self::Args, config: &Config) -> Self {
        Self {
            args,
            config: config.lex.clone(),
        }
    }

    fn execute(&self) -> Result<()> {
        debug!(files = self.args.files.len(), "check");
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let stderr = io::stderr();
        let mut err = stderr.lock();
        self.run_to(&mut out, &mut err)
    }

    fn name() -> &'static str {
        "check"
    }
}

//! Common types and utilities for olt commands.
//!
//! Both commands read a list of files, tokenize each one independently and
//! report in input order. The shared pieces live here.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

use olc_lex::Token;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{OltError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How `olt lex` prints tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Display` line per token between banner lines.
    Text,
    /// One JSON document per file.
    Json,
}

impl FromStr for OutputFormat {
    type Err = OltError;

    /// Parses a format name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(OltError::Validation(format!("Unknown format: {}", s))),
        }
    }
}

// ============================================================================
// Tokenizing files
// ============================================================================

/// The tokens of one successfully scanned file.
#[derive(Debug)]
pub struct LexedFile {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Tokens, ending with the end-of-input token.
    pub tokens: Vec<Token>,
    /// Wall time spent in the lexer.
    pub elapsed: Duration,
}

/// Reads and tokenizes a single file.
pub fn lex_file(path: &Path) -> Result<LexedFile> {
    let source = std::fs::read_to_string(path).map_err(|source| OltError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(file = %path.display(), bytes = source.len(), "read source");

    let start = Instant::now();
    let tokens = olc_lex::tokenize(&source).map_err(|source| {
        warn!(file = %path.display(), line = source.line(), column = source.column(), "{}", source);
        OltError::Lex {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let elapsed = start.elapsed();
    debug!(
        file = %path.display(),
        tokens = tokens.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "tokenized"
    );

    Ok(LexedFile {
        path: path.to_path_buf(),
        tokens,
        elapsed,
    })
}

/// Tokenizes every file on a pool of `jobs` threads.
///
/// Results come back in the order of `paths`, whatever order the workers
/// finish in.
pub fn lex_files(paths: &[PathBuf], jobs: u32) -> Result<Vec<Result<LexedFile>>> {
    if jobs == 0 {
        return Err(OltError::Validation(
            "Number of jobs must be at least 1".to_string(),
        ));
    }
    if paths.is_empty() {
        return Err(OltError::Validation("No input files specified".to_string()));
    }

    let threads = usize::try_from(jobs).unwrap_or(1).min(paths.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| OltError::CommandExecution(format!("Failed to start worker pool: {}", e)))?;
    debug!(files = paths.len(), threads, "tokenizing");

    Ok(pool.install(|| paths.par_iter().map(|path| lex_file(path)).collect()))
}

// ============================================================================
// Error reporting
// ============================================================================

/// Prints an error the way olt reports it on stderr.
///
/// Lexical diagnostics already name their file and position and are printed
/// as is; anything else gets an `error: ` prefix.
pub fn print_error<W: Write>(err: &mut W, e: &OltError) -> io::Result<()> {
    if e.is_diagnostic() {
        writeln!(err, "{}", e)
    } else {
        writeln!(err, "error: {}", e)
    }
}

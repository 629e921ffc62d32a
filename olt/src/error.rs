//! Error handling module for the olt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use olc_lex::LexError;
use thiserror::Error;

/// Main error type for the olt CLI application.
#[derive(Error, Debug)]
pub enum OltError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command execution fails.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// A source file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A source file failed lexical analysis.
    ///
    /// Rendered as `<path>: Lexer error at L:C - message`.
    #[error(
        "{}: Lexer error at {}:{} - {}",
        .path.display(),
        .source.line(),
        .source.column(),
        .source
    )]
    Lex {
        /// The file that failed.
        path: PathBuf,
        /// The lexical error.
        source: LexError,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OltError {
    /// Whether this error is a lexical diagnostic rather than a tool failure.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, OltError::Lex { .. })
    }
}

/// Result type alias using OltError.
pub type Result<T> = std::result::Result<T, OltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = OltError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = OltError::Validation("invalid format".to_string());
        assert_eq!(err.to_string(), "Validation error: invalid format");
    }

    #[test]
    fn test_lex_error_display() {
        let err = OltError::Lex {
            path: PathBuf::from("src/main.ol"),
            source: LexError::UnterminatedString { line: 4, column: 12 },
        };
        assert_eq!(
            err.to_string(),
            "src/main.ol: Lexer error at 4:12 - unterminated string literal"
        );
        assert!(err.is_diagnostic());
    }

    #[test]
    fn test_read_error_display() {
        let err = OltError::Read {
            path: PathBuf::from("missing.ol"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.to_string(), "could not read missing.ol: file not found");
        assert!(!err.is_diagnostic());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let olt_err: OltError = io_err.into();
        assert!(matches!(olt_err, OltError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let olt_err: OltError = json_err.into();
        assert!(matches!(olt_err, OltError::Json(_)));
    }
}

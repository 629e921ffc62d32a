//! Lexical errors.
//!
//! Every error is fatal to the scan that produced it and carries the 1-based
//! line and column where the scanner detected it. `Display` renders only the
//! message; placing it in front of a file name and position is up to the
//! caller.

use thiserror::Error;

/// An error that aborts tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("unexpected character '{ch}'")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Line where the character starts.
        line: u32,
        /// Column where the character starts.
        column: u32,
    },

    /// End of input inside a string literal, or right after a trailing `\`.
    #[error("unterminated string literal")]
    UnterminatedString {
        /// Line where the end of input was reached.
        line: u32,
        /// Column where the end of input was reached.
        column: u32,
    },

    /// End of input while block comment nesting is still open.
    #[error("unterminated block comment")]
    UnterminatedComment {
        /// Line where the end of input was reached.
        line: u32,
        /// Column where the end of input was reached.
        column: u32,
    },

    /// An integer literal whose digits do not fit in an `i64`.
    #[error("integer literal '{literal}' does not fit in 64 bits")]
    IntegerOverflow {
        /// The digits as written.
        literal: String,
        /// Line where the literal starts.
        line: u32,
        /// Column where the literal starts.
        column: u32,
    },
}

/// The category of a [`LexError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// See [`LexError::UnexpectedCharacter`].
    UnexpectedCharacter,
    /// See [`LexError::UnterminatedString`].
    UnterminatedString,
    /// See [`LexError::UnterminatedComment`].
    UnterminatedComment,
    /// See [`LexError::IntegerOverflow`].
    IntegerOverflow,
}

impl LexError {
    /// The category of this error.
    pub fn kind(&self) -> LexErrorKind {
        match self {
            LexError::UnexpectedCharacter { .. } => LexErrorKind::UnexpectedCharacter,
            LexError::UnterminatedString { .. } => LexErrorKind::UnterminatedString,
            LexError::UnterminatedComment { .. } => LexErrorKind::UnterminatedComment,
            LexError::IntegerOverflow { .. } => LexErrorKind::IntegerOverflow,
        }
    }

    /// Line where the error was detected (1-based).
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { line, .. }
            | LexError::UnterminatedString { line, .. }
            | LexError::UnterminatedComment { line, .. }
            | LexError::IntegerOverflow { line, .. } => *line,
        }
    }

    /// Column where the error was detected (1-based).
    pub fn column(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { column, .. }
            | LexError::UnterminatedString { column, .. }
            | LexError::UnterminatedComment { column, .. }
            | LexError::IntegerOverflow { column, .. } => *column,
        }
    }

    /// Human-readable description, without position.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

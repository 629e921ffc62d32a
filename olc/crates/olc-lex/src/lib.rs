//! olc-lex - Lexical Analyzer for the O Programming Language
//!
//! This crate turns the text of one O compilation unit into an ordered
//! sequence of tokens for the parser. It performs no I/O: the caller hands
//! over a complete `&str` and gets back either every token or the first
//! lexical error.
//!
//! # Example Usage
//!
//! ```
//! use olc_lex::{Lexer, Literal, TokenKind};
//!
//! let source = "var count := 42";
//! let tokens = olc_lex::tokenize(source).unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens[3].value, Some(Literal::Integer(42)));
//! assert!(tokens.last().unwrap().is_eof());
//!
//! // Or pull tokens lazily
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().unwrap().lexeme, "var");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literal values and the keyword table
//! - [`lexer`] - The scanner state machine
//! - [`cursor`] - Character cursor with line/column tracking
//! - [`span`] - Source locations
//! - [`error`] - Lexical errors
//! - [`chars`] - Character classes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `class`, `is`, `end`, `extends`, `var`, `method`, `this`, `if`, `then`,
//! `else`, `while`, `loop`, `return`, `true`, `false`, `base`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`, excluding keywords.
//!
//! ## Literals
//!
//! - **Integer**: `42` (64-bit signed)
//! - **Real**: `3.14` (64-bit float)
//! - **String**: `"hello\n"` with `\n`, `\t`, `\r`, `\\`, `\"` escapes
//! - **Boolean**: `true`, `false`
//!
//! ## Punctuation
//!
//! `:` `:=` `=` `=>` `.` `,` `(` `)` `[` `]` `{` `}` `<` `>`
//!
//! ## Comments
//!
//! `// line` and nestable `/* block */` comments are skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod span;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::Lexer;
pub use span::Span;
pub use token::{keyword_from_ident, Literal, Token, TokenKind, KEYWORDS};

/// Tokenizes a complete source text.
///
/// Shorthand for `Lexer::new(source).tokenize()`.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}

//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and drivers
//! - `comment` - Whitespace and comment skipping
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and real literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;

//! Command modules for the olt CLI.
//!
//! Each subcommand is implemented in its own file and exposed through the
//! [`traits::Command`] trait.

pub mod common;
pub mod traits;

pub mod check;
pub mod lex;

pub use check::{CheckArgs, CheckCommand};
pub use lex::{LexArgs, LexCommand};

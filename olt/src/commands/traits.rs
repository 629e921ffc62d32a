//! Command trait for the olt CLI.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all olt commands implement.
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: &Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<()>;

    /// Get the command name.
    fn name() -> &'static str;
}

//! tn-cli library
//!
//! Argument parsing, logger setup and command execution for the `tn` binary.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod post_commands;
pub(crate) mod runner;
pub(crate) mod user_commands;


pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use runner::execute;

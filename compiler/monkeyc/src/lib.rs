//! Monkey interpreter driver.
//!
//! The `monkey` binary is a thin argument dispatcher over [`commands`];
//! the interactive shell lives in [`repl`].

pub mod commands;
pub mod repl;
mod tracing_setup;

pub use commands::CliError;
pub use repl::{Repl, ReplConfig};
pub use tracing_setup::init_tracing;

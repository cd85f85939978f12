//! Command handlers for the `monkey` binary.
//!
//! Each handler writes its report to the given writer and returns a
//! [`CliError`] when the process should exit unsuccessfully.

use std::io;

use monkey_eval::RunError;
use monkey_parse::ParseError;

mod debug;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use run::{run_file, run_source};

/// Why a command failed.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{count} parse error(s)")]
    Parse { count: usize },

    #[error("ERROR: {0}")]
    Run(RunError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<RunError> for CliError {
    fn from(error: RunError) -> Self {
        match error {
            RunError::Parse(errors) => CliError::Parse {
                count: errors.len(),
            },
            other => CliError::Run(other),
        }
    }
}

/// Read a source file.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// Write parse errors one per line, tab-indented.
pub fn write_parse_errors(out: &mut impl io::Write, errors: &[ParseError]) -> io::Result<()> {
    for error in errors {
        writeln!(out, "\t{error}")?;
    }
    Ok(())
}

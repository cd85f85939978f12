//! The `run` command: parse, expand macros, and evaluate a source file.

use std::io::{self, Write};

use monkey_eval::{Interpreter, RunError, Session, Value};

use super::{read_file, write_parse_errors, CliError};

/// Run a file. The final value and `puts` output go to stdout, parse errors
/// to stderr.
pub fn run_file(path: &str) -> Result<(), CliError> {
    let source = read_file(path)?;
    run_source(
        &source,
        Interpreter::new(),
        &mut io::stdout().lock(),
        &mut io::stderr(),
    )
}

/// Run `source` on `interp` and write the final value to `out` unless it
/// is void. Parse errors go to `errors`; nothing is evaluated when there
/// are any.
pub fn run_source(
    source: &str,
    interp: Interpreter,
    out: &mut impl Write,
    errors: &mut impl Write,
) -> Result<(), CliError> {
    let session = Session::new(interp);
    match session.run(source) {
        Ok(Value::Void) => Ok(()),
        Ok(value) => Ok(writeln!(out, "{value}")?),
        Err(RunError::Parse(parse_errors)) => {
            write_parse_errors(errors, &parse_errors)?;
            Err(CliError::Parse {
                count: parse_errors.len(),
            })
        }
        Err(error) => Err(error.into()),
    }
}

//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::io::{self, Write};

use monkey_lexer::lex;
use monkey_parse::parse;

use super::{read_file, write_parse_errors, CliError};

/// Print the canonical rendering of each statement in a file.
pub fn parse_file(path: &str) -> Result<(), CliError> {
    let source = read_file(path)?;
    parse_source(&source, &mut io::stdout().lock())
}

pub fn parse_source(source: &str, out: &mut impl Write) -> Result<(), CliError> {
    let output = parse(source);
    if output.has_errors() {
        writeln!(out, "Parse errors:")?;
        write_parse_errors(out, &output.errors)?;
        return Err(CliError::Parse {
            count: output.errors.len(),
        });
    }

    for statement in &output.program.statements {
        writeln!(out, "{statement}")?;
    }
    Ok(())
}

/// Print the token stream of a file, one token per line.
pub fn lex_file(path: &str) -> Result<(), CliError> {
    let source = read_file(path)?;
    lex_source(&source, &mut io::stdout().lock())
}

pub fn lex_source(source: &str, out: &mut impl Write) -> Result<(), CliError> {
    for token in lex(source) {
        writeln!(out, "{token}")?;
    }
    Ok(())
}

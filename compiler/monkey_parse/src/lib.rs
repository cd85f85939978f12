//! Pratt parser for Monkey.
//!
//! Parsing never stops at the first problem: each statement that fails is
//! dropped from the program, its error is recorded, and parsing resumes at
//! the next token. Callers should check [`ParseOutput::errors`] before
//! evaluating.
//!
//! The [`modify`] module holds the post-order tree rewrite used by macro
//! expansion.

mod cursor;
mod error;
mod grammar;
pub mod modify;
mod precedence;

pub use cursor::Cursor;
pub use error::ParseError;
pub use modify::{modify, modify_with, Modifier, Modify};
pub use precedence::Precedence;

use monkey_ir::{Program, TokenKind, TokenSource};
use monkey_lexer::Lexer;
use tracing::debug;

/// A program together with the errors met while parsing it.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<S> {
    cursor: Cursor<S>,
}

impl<S: TokenSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Parser {
            cursor: Cursor::new(source),
        }
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut output = ParseOutput::default();

        while !self.cursor.check(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => output.program.statements.push(statement),
                Err(error) => {
                    debug!(%error, "dropping statement");
                    output.errors.push(error);
                }
            }
            self.cursor.advance();
        }

        output
    }
}

/// Lex and parse `source`.
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(Lexer::new(source)).parse_program()
}

#[cfg(test)]
mod tests;

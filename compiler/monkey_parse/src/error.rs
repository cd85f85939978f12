//! Parse error types.

use monkey_ir::TokenKind;

/// A recoverable syntax error. Messages are shown to the user verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("no prefix parse function for {0} found")]
    NoPrefixRule(TokenKind),

    #[error("Invalid string detected (did you forget an ending \"?)")]
    BadString,

    #[error("could not parse {0} as integer")]
    InvalidInteger(String),
}

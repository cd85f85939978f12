//! Token cursor with one token of lookahead.

use std::mem;

use monkey_ir::{Token, TokenKind, TokenSource};

use crate::ParseError;

/// Holds the current token and the one after it.
pub struct Cursor<S> {
    source: S,
    current: Token,
    peek: Token,
}

impl<S: TokenSource> Cursor<S> {
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();
        Cursor {
            source,
            current,
            peek,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Move forward one token, returning the token that was current.
    pub fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// Advance if the next token is `kind`, otherwise report it.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.check_peek(kind) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind,
                found: self.peek.kind,
            })
        }
    }

    /// Step over an optional `;` following the current token.
    pub fn skip_semicolon(&mut self) {
        if self.check_peek(TokenKind::Semicolon) {
            self.advance();
        }
    }
}

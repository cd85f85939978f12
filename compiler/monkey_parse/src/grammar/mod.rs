//! Statement parsing.
//!
//! Rules start with the cursor on the first token of their construct and
//! finish with it on the last token they consumed.

mod expr;

use monkey_ir::{BlockStatement, Expression, Identifier, Statement, TokenKind, TokenSource};

use crate::precedence::compound_op;
use crate::{ParseError, Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Break => {
                self.cursor.skip_semicolon();
                Ok(Statement::Break)
            }
            TokenKind::Skip => {
                self.cursor.skip_semicolon();
                Ok(Statement::Skip)
            }
            TokenKind::Ident if compound_op(self.cursor.peek_kind()).is_some() => {
                let name = self.current_identifier();
                self.parse_compound_assignment(name)
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// `let x = value;` or `let x += value;`
    fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
        self.cursor.expect_peek(TokenKind::Ident)?;
        let name = self.current_identifier();

        if compound_op(self.cursor.peek_kind()).is_some() {
            return self.parse_compound_assignment(name);
        }

        self.cursor.expect_peek(TokenKind::Assign)?;
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.cursor.skip_semicolon();

        Ok(Statement::Let { name, value })
    }

    /// `x op= value` becomes `let x = x op value`, a fresh binding in the
    /// innermost scope.
    fn parse_compound_assignment(&mut self, name: Identifier) -> Result<Statement, ParseError> {
        self.cursor.advance();
        let op_kind = self.cursor.current_kind();
        let Some(op) = compound_op(op_kind) else {
            return Err(ParseError::NoPrefixRule(op_kind));
        };
        self.cursor.advance();
        let operand = self.parse_expression(Precedence::Lowest)?;
        self.cursor.skip_semicolon();

        let value = Expression::infix(op, Expression::Identifier(name.clone()), operand);
        Ok(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.cursor.skip_semicolon();
        Ok(Statement::Return(value))
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.cursor.skip_semicolon();
        Ok(Statement::Expression(expr))
    }

    /// Parse `{ ... }` with the cursor on the opening brace.
    pub(crate) fn parse_block(&mut self) -> Result<BlockStatement, ParseError> {
        self.cursor.advance();
        let mut statements = Vec::new();

        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.check(TokenKind::Eof) {
                return Err(ParseError::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    found: TokenKind::Eof,
                });
            }
            statements.push(self.parse_statement()?);
            self.cursor.advance();
        }

        Ok(BlockStatement::new(statements))
    }

    fn current_identifier(&self) -> Identifier {
        Identifier::new(self.cursor.current().literal.as_str())
    }
}

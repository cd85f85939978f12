//! Expression parsing.
//!
//! Each token kind maps to at most one prefix rule and one infix rule.
//! [`Parser::parse_expression`] keeps folding infix rules while the next
//! token binds tighter than the caller's precedence.

use std::rc::Rc;

use monkey_ir::{Expression, FunctionLiteral, Identifier, TokenKind, TokenSource, UnaryOp};
use monkey_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::precedence::binary_op;
use crate::{ParseError, Parser, Precedence};

type PrefixRule<S> = fn(&mut Parser<S>) -> Result<Expression, ParseError>;
type InfixRule<S> = fn(&mut Parser<S>, Expression) -> Result<Expression, ParseError>;

impl<S: TokenSource> Parser<S> {
    fn prefix_rule(kind: TokenKind) -> Option<PrefixRule<S>> {
        Some(match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer,
            TokenKind::Str => Self::parse_string,
            TokenKind::BadString => Self::parse_bad_string,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix,
            TokenKind::LParen => Self::parse_grouped,
            TokenKind::LBracket => Self::parse_array,
            TokenKind::LBrace => Self::parse_hash,
            TokenKind::If => Self::parse_if,
            TokenKind::For => Self::parse_for,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::Macro => Self::parse_macro_literal,
            _ => return None,
        })
    }

    fn infix_rule(kind: TokenKind) -> Option<InfixRule<S>> {
        Some(match kind {
            TokenKind::LParen => Self::parse_call,
            TokenKind::LBracket => Self::parse_index,
            _ if binary_op(kind).is_some() => Self::parse_infix,
            _ => return None,
        })
    }

    /// Parse an expression whose operators bind tighter than `precedence`.
    pub(crate) fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Result<Expression, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
        let kind = self.cursor.current_kind();
        let Some(prefix) = Self::prefix_rule(kind) else {
            return Err(ParseError::NoPrefixRule(kind));
        };
        trace!(?kind, "prefix rule");
        let mut left = prefix(self)?;

        while !self.cursor.check_peek(TokenKind::Semicolon)
            && precedence < Precedence::of(self.cursor.peek_kind())
        {
            let Some(infix) = Self::infix_rule(self.cursor.peek_kind()) else {
                return Ok(left);
            };
            self.cursor.advance();
            trace!(kind = ?self.cursor.current_kind(), "infix rule");
            left = infix(self, left)?;
        }

        Ok(left)
    }

    fn parse_identifier(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::identifier(self.cursor.current().literal.as_str()))
    }

    fn parse_integer(&mut self) -> Result<Expression, ParseError> {
        let literal = &self.cursor.current().literal;
        literal
            .parse::<i64>()
            .map(Expression::Integer)
            .map_err(|_| ParseError::InvalidInteger(literal.clone()))
    }

    fn parse_string(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::Str(self.cursor.current().literal.clone()))
    }

    fn parse_bad_string(&mut self) -> Result<Expression, ParseError> {
        Err(ParseError::BadString)
    }

    fn parse_boolean(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::Boolean(self.cursor.check(TokenKind::True)))
    }

    fn parse_prefix(&mut self) -> Result<Expression, ParseError> {
        let op = if self.cursor.check(TokenKind::Bang) {
            UnaryOp::Not
        } else {
            UnaryOp::Neg
        };
        self.cursor.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::prefix(op, right))
    }

    fn parse_grouped(&mut self) -> Result<Expression, ParseError> {
        self.cursor.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    fn parse_array(&mut self) -> Result<Expression, ParseError> {
        self.parse_expression_list(TokenKind::RBracket)
            .map(Expression::Array)
    }

    /// `{k: v, ...}`; keys are arbitrary expressions.
    fn parse_hash(&mut self) -> Result<Expression, ParseError> {
        let mut pairs = Vec::new();

        while !self.cursor.check_peek(TokenKind::RBrace) {
            self.cursor.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.cursor.expect_peek(TokenKind::Colon)?;
            self.cursor.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.cursor.check_peek(TokenKind::RBrace) {
                self.cursor.expect_peek(TokenKind::Comma)?;
            }
        }
        self.cursor.expect_peek(TokenKind::RBrace)?;

        Ok(Expression::Hash(pairs))
    }

    /// `if (cond) { .. } else { .. }`
    fn parse_if(&mut self) -> Result<Expression, ParseError> {
        self.cursor.expect_peek(TokenKind::LParen)?;
        self.cursor.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::RParen)?;
        self.cursor.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.cursor.check_peek(TokenKind::Else) {
            self.cursor.advance();
            self.cursor.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// `for (k in coll) { .. }` or `for (k, v in coll) { .. }`
    fn parse_for(&mut self) -> Result<Expression, ParseError> {
        self.cursor.expect_peek(TokenKind::LParen)?;
        let key = self.expect_identifier()?;
        let value = if self.cursor.check_peek(TokenKind::Comma) {
            self.cursor.advance();
            Some(self.expect_identifier()?)
        } else {
            None
        };
        self.cursor.expect_peek(TokenKind::In)?;
        self.cursor.advance();
        let collection = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::RParen)?;
        self.cursor.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expression::For {
            key,
            value,
            collection: Box::new(collection),
            body,
        })
    }

    fn parse_function_literal(&mut self) -> Result<Expression, ParseError> {
        self.parse_callable_literal()
            .map(|literal| Expression::Function(Rc::new(literal)))
    }

    fn parse_macro_literal(&mut self) -> Result<Expression, ParseError> {
        self.parse_callable_literal()
            .map(|literal| Expression::Macro(Rc::new(literal)))
    }

    /// Parameters and body shared by `fn` and `macro`.
    fn parse_callable_literal(&mut self) -> Result<FunctionLiteral, ParseError> {
        self.cursor.expect_peek(TokenKind::LParen)?;
        let mut parameters = Vec::new();

        if self.cursor.check_peek(TokenKind::RParen) {
            self.cursor.advance();
        } else {
            parameters.push(self.expect_identifier()?);
            while self.cursor.check_peek(TokenKind::Comma) {
                self.cursor.advance();
                parameters.push(self.expect_identifier()?);
            }
            self.cursor.expect_peek(TokenKind::RParen)?;
        }

        self.cursor.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block()?;
        Ok(FunctionLiteral::new(parameters, body))
    }

    fn parse_infix(&mut self, left: Expression) -> Result<Expression, ParseError> {
        let kind = self.cursor.current_kind();
        let Some(op) = binary_op(kind) else {
            return Err(ParseError::NoPrefixRule(kind));
        };
        let precedence = Precedence::of(kind);
        self.cursor.advance();
        let right = self.parse_expression(precedence)?;
        Ok(Expression::infix(op, left, right))
    }

    fn parse_call(&mut self, function: Expression) -> Result<Expression, ParseError> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Ok(Expression::call(function, arguments))
    }

    fn parse_index(&mut self, left: Expression) -> Result<Expression, ParseError> {
        self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::RBracket)?;
        Ok(Expression::index(left, index))
    }

    /// Comma-separated expressions up to `end`, cursor on the opening token.
    fn parse_expression_list(&mut self, end: TokenKind) -> Result<Vec<Expression>, ParseError> {
        let mut items = Vec::new();

        if self.cursor.check_peek(end) {
            self.cursor.advance();
            return Ok(items);
        }

        self.cursor.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.cursor.check_peek(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.cursor.expect_peek(end)?;

        Ok(items)
    }

    fn expect_identifier(&mut self) -> Result<Identifier, ParseError> {
        self.cursor.expect_peek(TokenKind::Ident)?;
        Ok(self.current_identifier())
    }
}

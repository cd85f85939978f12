//! Monkey IR - tokens and syntax tree
//!
//! This crate holds the data shared by every stage of the interpreter:
//! - [`Token`] and [`TokenKind`], the lexer's output
//! - [`TokenSource`], the seam between the lexer and the parser
//! - the AST ([`Program`], [`Statement`], [`Expression`]) and its operators
//!
//! AST nodes carry no source positions, so two trees compare equal exactly
//! when they have the same shape. Every node renders to canonical source text
//! through `Display`; that rendering is fully parenthesized and is what macro
//! expansion tests compare against.

pub mod ast;
mod token;

pub use ast::{
    BinaryOp, BlockStatement, Expression, FunctionLiteral, Identifier, Program, Statement,
    UnaryOp,
};
pub use token::{Token, TokenKind, TokenSource};

//! Syntax tree.
//!
//! Every node owns its children. Function and macro literals sit behind an
//! `Rc` so a closure can share its literal with the tree it came from;
//! rewrites replace nodes wholesale and never mutate a shared literal.

mod display;
mod operators;

use std::rc::Rc;

pub use operators::{BinaryOp, UnaryOp};

/// A parsed source file or REPL input.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }
}

/// A bound name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

/// A `{ ... }` statement list.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        BlockStatement { statements }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Statement {
    /// `let name = value;`
    Let { name: Identifier, value: Expression },
    /// `return value;`
    Return(Expression),
    /// `break;`
    Break,
    /// `skip;`
    Skip,
    /// An expression used as a statement.
    Expression(Expression),
    Block(BlockStatement),
}

/// Shared shape of `fn(..) {..}` and `macro(..) {..}`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl FunctionLiteral {
    pub fn new(parameters: Vec<Identifier>, body: BlockStatement) -> Self {
        FunctionLiteral { parameters, body }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expression {
    Identifier(Identifier),
    Integer(i64),
    Boolean(bool),
    Str(String),
    Array(Vec<Expression>),
    /// Key/value pairs in source order.
    Hash(Vec<(Expression, Expression)>),
    Prefix {
        op: UnaryOp,
        right: Box<Expression>,
    },
    Infix {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    /// `for (key in collection) body` or `for (key, value in collection) body`
    For {
        key: Identifier,
        value: Option<Identifier>,
        collection: Box<Expression>,
        body: BlockStatement,
    },
    Function(Rc<FunctionLiteral>),
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Macro(Rc<FunctionLiteral>),
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn prefix(op: UnaryOp, right: Expression) -> Self {
        Expression::Prefix {
            op,
            right: Box::new(right),
        }
    }

    pub fn infix(op: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::Infix {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn index(left: Expression, index: Expression) -> Self {
        Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        }
    }

    pub fn call(function: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            function: Box::new(function),
            arguments,
        }
    }

    /// If this is a call to the plain identifier `name`, its arguments.
    pub fn call_to(&self, name: &str) -> Option<&[Expression]> {
        match self {
            Expression::Call {
                function,
                arguments,
            } => match function.as_ref() {
                Expression::Identifier(ident) if ident.name == name => Some(arguments),
                _ => None,
            },
            _ => None,
        }
    }
}

//! Post-order tree rewriting.
//!
//! [`Modify::modify`] rebuilds a node bottom-up: every child slot is
//! rewritten first and reattached, then the [`Modifier`] hook for the node
//! itself runs on the result. Macro expansion and `unquote` substitution are
//! both expressed as modifiers.
//!
//! Hooks are fallible so a rewrite can abort part way through. Use
//! [`modify_with`] for the common infallible, expression-only case.

use std::convert::Infallible;
use std::rc::Rc;

use monkey_ir::{BlockStatement, Expression, FunctionLiteral, Identifier, Program, Statement};
use monkey_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

/// Per-node rewrite hooks. Defaults leave the node unchanged.
pub trait Modifier {
    type Error;

    fn expression(&mut self, expr: Expression) -> Result<Expression, Self::Error> {
        Ok(expr)
    }

    fn statement(&mut self, stmt: Statement) -> Result<Statement, Self::Error> {
        Ok(stmt)
    }
}

/// A node that can be rebuilt by a [`Modifier`].
pub trait Modify: Sized {
    fn modify<M: Modifier>(self, modifier: &mut M) -> Result<Self, M::Error>;
}

/// Rewrite `node` post-order with `modifier`.
pub fn modify<N: Modify, M: Modifier>(node: N, modifier: &mut M) -> Result<N, M::Error> {
    node.modify(modifier)
}

/// Rewrite every expression in `node` with `f`, children first.
pub fn modify_with<N, F>(node: N, f: F) -> N
where
    N: Modify,
    F: FnMut(Expression) -> Expression,
{
    struct ExpressionFn<F>(F);

    impl<F: FnMut(Expression) -> Expression> Modifier for ExpressionFn<F> {
        type Error = Infallible;

        fn expression(&mut self, expr: Expression) -> Result<Expression, Infallible> {
            Ok((self.0)(expr))
        }
    }

    match node.modify(&mut ExpressionFn(f)) {
        Ok(node) => node,
        Err(never) => match never {},
    }
}

impl Modify for Program {
    fn modify<M: Modifier>(self, modifier: &mut M) -> Result<Self, M::Error> {
        let statements = modify_all(self.statements, modifier)?;
        Ok(Program::new(statements))
    }
}

impl Modify for BlockStatement {
    fn modify<M: Modifier>(self, modifier: &mut M) -> Result<Self, M::Error> {
        let statements = modify_all(self.statements, modifier)?;
        Ok(BlockStatement::new(statements))
    }
}

impl Modify for Statement {
    fn modify<M: Modifier>(self, modifier: &mut M) -> Result<Self, M::Error> {
        let stmt = match self {
            Statement::Let { name, value } => Statement::Let {
                name,
                value: value.modify(modifier)?,
            },
            Statement::Return(value) => Statement::Return(value.modify(modifier)?),
            Statement::Expression(expr) => Statement::Expression(expr.modify(modifier)?),
            Statement::Block(block) => Statement::Block(block.modify(modifier)?),
            leaf @ (Statement::Break | Statement::Skip) => leaf,
        };
        modifier.statement(stmt)
    }
}

/// An identifier slot stays an identifier: a rewrite that produces any other
/// expression is discarded.
impl Modify for Identifier {
    fn modify<M: Modifier>(self, modifier: &mut M) -> Result<Self, M::Error> {
        match modifier.expression(Expression::Identifier(self.clone()))? {
            Expression::Identifier(ident) => Ok(ident),
            _ => Ok(self),
        }
    }
}

impl Modify for FunctionLiteral {
    fn modify<M: Modifier>(self, modifier: &mut M) -> Result<Self, M::Error> {
        let parameters = modify_all(self.parameters, modifier)?;
        let body = self.body.modify(modifier)?;
        Ok(FunctionLiteral::new(parameters, body))
    }
}

impl Modify for Expression {
    fn modify<M: Modifier>(self, modifier: &mut M) -> Result<Self, M::Error> {
        ensure_sufficient_stack(|| {
            let expr = modify_children(self, modifier)?;
            modifier.expression(expr)
        })
    }
}

fn modify_all<N: Modify, M: Modifier>(
    nodes: Vec<N>,
    modifier: &mut M,
) -> Result<Vec<N>, M::Error> {
    nodes.into_iter().map(|node| node.modify(modifier)).collect()
}

fn modify_boxed<M: Modifier>(
    expr: Box<Expression>,
    modifier: &mut M,
) -> Result<Box<Expression>, M::Error> {
    Ok(Box::new((*expr).modify(modifier)?))
}

fn modify_children<M: Modifier>(
    expr: Expression,
    modifier: &mut M,
) -> Result<Expression, M::Error> {
    Ok(match expr {
        Expression::Prefix { op, right } => Expression::Prefix {
            op,
            right: modify_boxed(right, modifier)?,
        },
        Expression::Infix { op, left, right } => Expression::Infix {
            op,
            left: modify_boxed(left, modifier)?,
            right: modify_boxed(right, modifier)?,
        },
        Expression::Index { left, index } => Expression::Index {
            left: modify_boxed(left, modifier)?,
            index: modify_boxed(index, modifier)?,
        },
        Expression::If {
            condition,
            consequence,
            alternative,
        } => Expression::If {
            condition: modify_boxed(condition, modifier)?,
            consequence: consequence.modify(modifier)?,
            alternative: alternative.map(|alt| alt.modify(modifier)).transpose()?,
        },
        Expression::For {
            key,
            value,
            collection,
            body,
        } => Expression::For {
            collection: modify_boxed(collection, modifier)?,
            key: key.modify(modifier)?,
            value: value.map(|value| value.modify(modifier)).transpose()?,
            body: body.modify(modifier)?,
        },
        Expression::Function(literal) => {
            Expression::Function(Rc::new(Rc::unwrap_or_clone(literal).modify(modifier)?))
        }
        Expression::Macro(literal) => {
            Expression::Macro(Rc::new(Rc::unwrap_or_clone(literal).modify(modifier)?))
        }
        Expression::Call {
            function,
            arguments,
        } => Expression::Call {
            function: modify_boxed(function, modifier)?,
            arguments: modify_all(arguments, modifier)?,
        },
        Expression::Array(elements) => Expression::Array(modify_all(elements, modifier)?),
        Expression::Hash(pairs) => Expression::Hash(modify_pairs(pairs, modifier)?),
        leaf @ (Expression::Identifier(_)
        | Expression::Integer(_)
        | Expression::Boolean(_)
        | Expression::Str(_)) => leaf,
    })
}

/// Rewrite keys and values. When two rewritten keys render the same, the
/// later pair replaces the earlier one in its position.
fn modify_pairs<M: Modifier>(
    pairs: Vec<(Expression, Expression)>,
    modifier: &mut M,
) -> Result<Vec<(Expression, Expression)>, M::Error> {
    let mut rewritten: Vec<(Expression, Expression)> = Vec::with_capacity(pairs.len());
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();

    for (key, value) in pairs {
        let key = key.modify(modifier)?;
        let value = value.modify(modifier)?;
        let rendered = key.to_string();
        if let Some(&at) = positions.get(&rendered) {
            rewritten[at] = (key, value);
        } else {
            positions.insert(rendered, rewritten.len());
            rewritten.push((key, value));
        }
    }

    Ok(rewritten)
}

//! Canonical source rendering.
//!
//! Infix, prefix and index expressions are fully parenthesized, so
//! `a + b * c` renders as `(a + (b * c))`.

use std::fmt::{self, Display, Formatter};

use super::{BlockStatement, Expression, FunctionLiteral, Identifier, Program, Statement};

/// Write `items` separated by `sep`.
fn join<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        join(f, &self.statements, "")
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        join(f, &self.statements, " ")?;
        f.write_str(" }")
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return(value) => write!(f, "return {value};"),
            Statement::Break => f.write_str("break;"),
            Statement::Skip => f.write_str("skip;"),
            Statement::Expression(expr) => write!(f, "{expr}"),
            Statement::Block(block) => write!(f, "{block}"),
        }
    }
}

/// Renders `(a, b) { body }`; the keyword is written by the caller.
impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        join(f, &self.parameters, ", ")?;
        write!(f, ") {}", self.body)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::Integer(value) => write!(f, "{value}"),
            Expression::Boolean(value) => write!(f, "{value}"),
            Expression::Str(value) => write!(f, "\"{value}\""),
            Expression::Array(elements) => {
                f.write_str("[")?;
                join(f, elements, ", ")?;
                f.write_str("]")
            }
            Expression::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Expression::Prefix { op, right } => write!(f, "({op}{right})"),
            Expression::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            Expression::Index { left, index } => write!(f, "({left}[{index}])"),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Expression::For {
                key,
                value,
                collection,
                body,
            } => {
                write!(f, "for ({key}")?;
                if let Some(value) = value {
                    write!(f, ", {value}")?;
                }
                write!(f, " in {collection}) {body}")
            }
            Expression::Function(literal) => write!(f, "fn{literal}"),
            Expression::Macro(literal) => write!(f, "macro{literal}"),
            Expression::Call {
                function,
                arguments,
            } => {
                write!(f, "{function}(")?;
                join(f, arguments, ", ")?;
                f.write_str(")")
            }
        }
    }
}

//! Macros: definition, expansion, `quote` and `unquote`.
//!
//! Expansion runs between parsing and evaluation:
//!
//! 1. [`define_macros`] moves every top-level `let NAME = macro(..) {..}`
//!    out of the program and into a macro environment.
//! 2. [`Interpreter::expand_macros`] rewrites each call to a known macro
//!    with the tree its body quotes. Arguments reach the body unevaluated,
//!    as `Quote` values. The rewrite is post-order, so nested macro calls
//!    expand inside-out.
//!
//! `quote(expr)` evaluates to `expr` itself, after replacing every
//! `unquote(e)` inside it with the syntax form of `e`'s value.

use monkey_ir::{Expression, Program, Statement};
use monkey_parse::{modify, Modifier};
use tracing::debug;

use crate::environment::Environment;
use crate::errors::{EvalError, EvalResult, Signal};
use crate::interpreter::{bind_parameters, into_outcome, EvalContext, Interpreter};
use crate::value::{FunctionValue, Value};

/// Macro expansion failure. Expansion stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MacroError {
    #[error("macro {name} must return a quoted expression, got {found}")]
    NotQuote { name: String, found: &'static str },

    #[error("macro {name} takes {expected} arguments, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("error while expanding macro {name}: {source}")]
    Eval {
        name: String,
        #[source]
        source: EvalError,
    },
}

/// Register top-level macro definitions in `env` and remove them from
/// `program`. Other statements, including macro literals bound anywhere
/// else, are left alone.
pub fn define_macros(program: &mut Program, env: &Environment) {
    program.statements.retain(|statement| match statement {
        Statement::Let {
            name,
            value: Expression::Macro(literal),
        } => {
            debug!(name = %name, "define macro");
            env.set(
                name.name.as_str(),
                Value::macro_value(literal.clone(), env.clone()),
            );
            false
        }
        _ => true,
    });
}

/// [`Interpreter::expand_macros`] on a stdout interpreter.
pub fn expand_macros(program: Program, env: &Environment) -> Result<Program, MacroError> {
    Interpreter::new().expand_macros(program, env)
}

impl Interpreter {
    /// Replace every call to a macro bound in `env` with its expansion.
    pub fn expand_macros(
        &self,
        program: Program,
        env: &Environment,
    ) -> Result<Program, MacroError> {
        modify(program, &mut MacroExpander { interp: self, env })
    }
}

struct MacroExpander<'a> {
    interp: &'a Interpreter,
    env: &'a Environment,
}

impl MacroExpander<'_> {
    fn expand(
        &self,
        name: &str,
        mac: &FunctionValue,
        arguments: &[Expression],
    ) -> Result<Expression, MacroError> {
        if arguments.len() != mac.arity() {
            return Err(MacroError::ArityMismatch {
                name: name.to_string(),
                expected: mac.arity(),
                got: arguments.len(),
            });
        }
        debug!(name, "expand macro");

        let quoted = arguments.iter().cloned().map(Value::quote).collect();
        let env = bind_parameters(mac, quoted);
        let result = self
            .interp
            .eval_block(&mac.literal.body, &env, EvalContext::default())
            .or_else(into_outcome);

        match result {
            Ok(Value::Quote(expr)) => Ok((*expr).clone()),
            Ok(other) => Err(MacroError::NotQuote {
                name: name.to_string(),
                found: other.type_name(),
            }),
            Err(source) => Err(MacroError::Eval {
                name: name.to_string(),
                source,
            }),
        }
    }
}

impl Modifier for MacroExpander<'_> {
    type Error = MacroError;

    fn expression(&mut self, expr: Expression) -> Result<Expression, MacroError> {
        let Expression::Call {
            function,
            arguments,
        } = &expr
        else {
            return Ok(expr);
        };
        let Expression::Identifier(ident) = function.as_ref() else {
            return Ok(expr);
        };
        match self.env.get(&ident.name) {
            Some(Value::Macro(mac)) => self.expand(&ident.name, &mac, arguments),
            _ => Ok(expr),
        }
    }
}

/// Evaluate `quote(node)`.
pub(crate) fn quote(
    interp: &Interpreter,
    node: &Expression,
    env: &Environment,
    ctx: EvalContext,
) -> EvalResult {
    let mut unquoter = Unquoter { interp, env, ctx };
    let node = modify(node.clone(), &mut unquoter)?;
    Ok(Value::quote(node))
}

/// Substitutes `unquote(e)` calls inside a quoted tree.
struct Unquoter<'a> {
    interp: &'a Interpreter,
    env: &'a Environment,
    ctx: EvalContext,
}

impl Modifier for Unquoter<'_> {
    type Error = Signal;

    fn expression(&mut self, expr: Expression) -> Result<Expression, Signal> {
        let value = match expr.call_to("unquote") {
            Some([argument]) => self.interp.eval_expression(argument, self.env, self.ctx)?,
            _ => return Ok(expr),
        };
        Ok(value_to_syntax(value).unwrap_or(expr))
    }
}

/// Syntax for a value, where one exists.
fn value_to_syntax(value: Value) -> Option<Expression> {
    match value {
        Value::Integer(n) => Some(Expression::Integer(n)),
        Value::Boolean(b) => Some(Expression::Boolean(b)),
        Value::Quote(expr) => Some((*expr).clone()),
        _ => None,
    }
}

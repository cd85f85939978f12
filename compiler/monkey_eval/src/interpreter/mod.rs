//! Tree-walking interpreter.
//!
//! Evaluation is one recursive dispatch over the node kind. Anything that
//! interrupts a statement list (`return`, `break`, `skip`, or an error)
//! travels as a [`Signal`] in the `Err` arm, so `?` short-circuits every
//! composite evaluation as soon as a child fails.
//!
//! Loop and call depth travel in an [`EvalContext`] argument instead of
//! interpreter state: a function body starts outside any loop, whatever its
//! caller was doing.

mod builder;
mod control;
mod function_call;

use std::rc::Rc;

use monkey_ir::{BlockStatement, Expression, Program, Statement};
use monkey_stack::ensure_sufficient_stack;

use crate::builtins::Builtin;
use crate::environment::Environment;
use crate::errors::{
    break_outside_loop, identifier_not_found, index_not_supported, skip_outside_loop,
    unusable_hash_key, wrong_argument_count, EvalError, EvalResult, Signal,
};
use crate::macro_expand::quote;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::print_handler::SharedPrintHandler;
use crate::value::{HashValue, Value};

pub use builder::InterpreterBuilder;
pub use control::EvalContext;
pub(crate) use function_call::bind_parameters;

/// Default bound on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Evaluator for Monkey programs.
///
/// Holds no per-program state; the same interpreter can run any number of
/// programs against any number of environments.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
}

impl Interpreter {
    /// An interpreter printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate a whole program. A top-level `return` ends it early with its
    /// value.
    pub fn eval_program(&self, program: &Program, env: &Environment) -> Result<Value, EvalError> {
        let ctx = EvalContext::default();
        let mut result = Value::Void;

        for statement in &program.statements {
            result = match self.eval_statement(statement, env, ctx) {
                Ok(value) => value,
                Err(signal) => return into_outcome(signal),
            };
        }

        Ok(result)
    }

    /// Evaluate statements in order. Signals propagate unchanged.
    pub(crate) fn eval_block(
        &self,
        block: &BlockStatement,
        env: &Environment,
        ctx: EvalContext,
    ) -> EvalResult {
        let mut result = Value::Void;
        for statement in &block.statements {
            result = self.eval_statement(statement, env, ctx)?;
        }
        Ok(result)
    }

    fn eval_statement(
        &self,
        statement: &Statement,
        env: &Environment,
        ctx: EvalContext,
    ) -> EvalResult {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env, ctx)?;
                env.set(name.name.as_str(), value);
                Ok(Value::Void)
            }
            Statement::Return(value) => {
                let value = self.eval_expression(value, env, ctx)?;
                Err(Signal::Return(value))
            }
            Statement::Break if ctx.in_loop() => Err(Signal::Break),
            Statement::Break => Err(break_outside_loop().into()),
            Statement::Skip if ctx.in_loop() => Err(Signal::Skip),
            Statement::Skip => Err(skip_outside_loop().into()),
            Statement::Expression(expr) => self.eval_expression(expr, env, ctx),
            Statement::Block(block) => self.eval_block(block, env, ctx),
        }
    }

    pub(crate) fn eval_expression(
        &self,
        expr: &Expression,
        env: &Environment,
        ctx: EvalContext,
    ) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env, ctx))
    }

    fn eval_expression_inner(
        &self,
        expr: &Expression,
        env: &Environment,
        ctx: EvalContext,
    ) -> EvalResult {
        match expr {
            Expression::Identifier(ident) => env
                .get(&ident.name)
                .or_else(|| Builtin::lookup(&ident.name).map(Value::Builtin))
                .ok_or_else(|| identifier_not_found(&ident.name).into()),
            Expression::Integer(n) => Ok(Value::Integer(*n)),
            Expression::Boolean(b) => Ok(Value::Boolean(*b)),
            Expression::Str(s) => Ok(Value::string(s.as_str())),
            Expression::Array(elements) => {
                let values = self.eval_expressions(elements, env, ctx)?;
                Ok(Value::array(values))
            }
            Expression::Hash(pairs) => {
                let mut hash = HashValue::new();
                for (key_expr, value_expr) in pairs {
                    let key = self.eval_expression(key_expr, env, ctx)?;
                    let Some(hash_key) = key.hash_key() else {
                        return Err(unusable_hash_key(&key).into());
                    };
                    let value = self.eval_expression(value_expr, env, ctx)?;
                    hash.insert(hash_key, value);
                }
                Ok(Value::hash(hash))
            }
            Expression::Prefix { op, right } => {
                let right = self.eval_expression(right, env, ctx)?;
                Ok(evaluate_unary(*op, &right)?)
            }
            Expression::Infix { op, left, right } => {
                let left = self.eval_expression(left, env, ctx)?;
                let right = self.eval_expression(right, env, ctx)?;
                Ok(evaluate_binary(&left, &right, *op)?)
            }
            Expression::Index { left, index } => {
                let left = self.eval_expression(left, env, ctx)?;
                let index = self.eval_expression(index, env, ctx)?;
                Ok(eval_index(&left, &index)?)
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expression(condition, env, ctx)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, env, ctx)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env, ctx)
                } else {
                    Ok(Value::Null)
                }
            }
            Expression::For {
                key,
                value,
                collection,
                body,
            } => self.eval_for(key, value.as_ref(), collection, body, env, ctx),
            Expression::Function(literal) => Ok(Value::function(Rc::clone(literal), env.clone())),
            Expression::Macro(literal) => Ok(Value::macro_value(Rc::clone(literal), env.clone())),
            Expression::Call {
                function,
                arguments,
            } => {
                if let Some(quoted) = expr.call_to("quote") {
                    let [node] = quoted else {
                        return Err(wrong_argument_count(1, quoted.len()).into());
                    };
                    return quote(self, node, env, ctx);
                }
                let callee = self.eval_expression(function, env, ctx)?;
                let args = self.eval_expressions(arguments, env, ctx)?;
                self.apply_function(&callee, args, ctx)
            }
        }
    }

    /// Evaluate left to right, stopping at the first signal.
    fn eval_expressions(
        &self,
        exprs: &[Expression],
        env: &Environment,
        ctx: EvalContext,
    ) -> Result<Vec<Value>, Signal> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env, ctx))
            .collect()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Final value of a program or macro body once its signal reaches the top.
pub(crate) fn into_outcome(signal: Signal) -> Result<Value, EvalError> {
    match signal {
        Signal::Return(value) => Ok(value),
        Signal::Error(error) => Err(error),
        Signal::Break => Err(break_outside_loop()),
        Signal::Skip => Err(skip_outside_loop()),
    }
}

fn eval_index(left: &Value, index: &Value) -> Result<Value, EvalError> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Value::Null)),
        (Value::Hash(hash), key) => {
            let Some(key) = key.hash_key() else {
                return Err(unusable_hash_key(key));
            };
            Ok(hash.get(&key).cloned().unwrap_or(Value::Null))
        }
        _ => Err(index_not_supported(left)),
    }
}

#[cfg(test)]
mod tests;

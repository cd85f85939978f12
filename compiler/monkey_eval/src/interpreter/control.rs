//! Loop evaluation and the evaluation context.

use std::ops::ControlFlow;

use monkey_ir::{BlockStatement, Expression, Identifier};

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{not_iterable, value_identifier_outside_hash, EvalResult, Signal};
use crate::value::Value;

/// Per-call evaluation state, passed by value down the recursion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalContext {
    loop_depth: usize,
    call_depth: usize,
}

impl EvalContext {
    /// Whether `break` and `skip` are allowed here.
    pub fn in_loop(self) -> bool {
        self.loop_depth > 0
    }

    pub fn call_depth(self) -> usize {
        self.call_depth
    }

    pub(crate) fn enter_loop(self) -> Self {
        EvalContext {
            loop_depth: self.loop_depth + 1,
            ..self
        }
    }

    /// Context for a function body: one call deeper, outside any loop.
    pub(crate) fn enter_call(self) -> Self {
        EvalContext {
            loop_depth: 0,
            call_depth: self.call_depth + 1,
        }
    }
}

impl Interpreter {
    /// `for (key[, value] in collection) body`
    ///
    /// All iterations share one scope nested in `env`. The loop itself
    /// evaluates to `null`; an empty body evaluates to nothing without
    /// touching the collection.
    pub(super) fn eval_for(
        &self,
        key: &Identifier,
        value: Option<&Identifier>,
        collection: &Expression,
        body: &BlockStatement,
        env: &Environment,
        ctx: EvalContext,
    ) -> EvalResult {
        if body.statements.is_empty() {
            return Ok(Value::Void);
        }

        let subject = self.eval_expression(collection, env, ctx)?;
        if value.is_some() && matches!(subject, Value::Array(_) | Value::Str(_)) {
            return Err(value_identifier_outside_hash().into());
        }

        let loop_env = Environment::enclosed(env);
        let ctx = ctx.enter_loop();
        let key = key.name.as_str();

        match &subject {
            Value::Array(elements) => {
                for element in elements.iter() {
                    loop_env.set(key, element.clone());
                    if self.run_iteration(body, &loop_env, ctx)?.is_break() {
                        break;
                    }
                }
            }
            Value::Str(text) => {
                for ch in text.chars() {
                    loop_env.set(key, Value::string(ch.to_string()));
                    if self.run_iteration(body, &loop_env, ctx)?.is_break() {
                        break;
                    }
                }
            }
            Value::Hash(hash) => {
                for (hash_key, entry) in hash.iter() {
                    loop_env.set(key, hash_key.to_value());
                    if let Some(value) = value {
                        loop_env.set(value.name.as_str(), entry.clone());
                    }
                    if self.run_iteration(body, &loop_env, ctx)?.is_break() {
                        break;
                    }
                }
            }
            other => return Err(not_iterable(other).into()),
        }

        Ok(Value::Null)
    }

    /// Run the body once. `skip` ends the iteration, `break` the loop;
    /// errors and `return` keep unwinding.
    fn run_iteration(
        &self,
        body: &BlockStatement,
        env: &Environment,
        ctx: EvalContext,
    ) -> Result<ControlFlow<()>, Signal> {
        match self.eval_block(body, env, ctx) {
            Ok(_) | Err(Signal::Skip) => Ok(ControlFlow::Continue(())),
            Err(Signal::Break) => Ok(ControlFlow::Break(())),
            Err(signal) => Err(signal),
        }
    }
}

//! Function application.

use tracing::trace;

use super::{EvalContext, Interpreter};
use crate::environment::Environment;
use crate::errors::{call_depth_exceeded, not_a_function, wrong_argument_count, EvalResult, Signal};
use crate::value::{FunctionValue, Value};

impl Interpreter {
    /// Call a function or built-in with already evaluated arguments.
    pub(crate) fn apply_function(
        &self,
        callee: &Value,
        args: Vec<Value>,
        ctx: EvalContext,
    ) -> EvalResult {
        match callee {
            Value::Function(func) => self.call_function(func, args, ctx),
            Value::Builtin(builtin) => builtin.call(self, args, ctx),
            other => Err(not_a_function(other).into()),
        }
    }

    fn call_function(
        &self,
        func: &FunctionValue,
        args: Vec<Value>,
        ctx: EvalContext,
    ) -> EvalResult {
        if args.len() != func.arity() {
            return Err(wrong_argument_count(func.arity(), args.len()).into());
        }
        if ctx.call_depth() >= self.max_call_depth {
            return Err(call_depth_exceeded(self.max_call_depth).into());
        }
        trace!(arity = func.arity(), depth = ctx.call_depth(), "apply function");

        let env = bind_parameters(func, args);
        match self.eval_block(&func.literal.body, &env, ctx.enter_call()) {
            Err(Signal::Return(value)) => Ok(value),
            result => result,
        }
    }
}

/// A scope nested in the closure's environment with each parameter bound
/// to the argument in the same position.
pub(crate) fn bind_parameters(func: &FunctionValue, args: Vec<Value>) -> Environment {
    let env = Environment::enclosed(&func.env);
    for (param, arg) in func.literal.parameters.iter().zip(args) {
        env.set(param.name.as_str(), arg);
    }
    env
}

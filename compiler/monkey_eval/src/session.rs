//! Source-to-value pipeline with persistent state.

use monkey_parse::{parse, ParseError};

use crate::environment::Environment;
use crate::errors::EvalError;
use crate::interpreter::Interpreter;
use crate::macro_expand::{define_macros, MacroError};
use crate::value::Value;

/// Why a [`Session::run`] produced no value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RunError {
    #[error("{} parse error(s)", .0.len())]
    Parse(Vec<ParseError>),

    #[error(transparent)]
    Macro(#[from] MacroError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// An interpreter plus the global and macro environments it runs against.
///
/// Bindings and macros defined by one [`run`](Session::run) are visible to
/// the next.
pub struct Session {
    interp: Interpreter,
    env: Environment,
    macro_env: Environment,
}

impl Session {
    pub fn new(interp: Interpreter) -> Self {
        Session {
            interp,
            env: Environment::new(),
            macro_env: Environment::new(),
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }

    /// Parse, expand macros, and evaluate `source`.
    ///
    /// Nothing is evaluated when the source has syntax errors.
    pub fn run(&self, source: &str) -> Result<Value, RunError> {
        let output = parse(source);
        if output.has_errors() {
            return Err(RunError::Parse(output.errors));
        }

        let mut program = output.program;
        define_macros(&mut program, &self.macro_env);
        let program = self.interp.expand_macros(program, &self.macro_env)?;

        Ok(self.interp.eval_program(&program, &self.env)?)
    }
}

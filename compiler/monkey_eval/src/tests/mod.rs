//! Whole-program tests: source text in, value and printed output out.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod programs;

use monkey_parse::parse;

use crate::{buffer_handler, Environment, EvalError, Interpreter, SharedPrintHandler, Value};

/// Evaluate `source` in a fresh environment, capturing `puts` output.
pub(super) fn run(source: &str) -> (Result<Value, EvalError>, String) {
    let output = parse(source);
    assert!(!output.has_errors(), "{:?}", output.errors);

    let handler: SharedPrintHandler = buffer_handler();
    let interp = Interpreter::builder().print_handler(handler.clone()).build();
    let result = interp.eval_program(&output.program, &Environment::new());
    (result, handler.output())
}

pub(super) fn eval(source: &str) -> Value {
    run(source).0.unwrap()
}

pub(super) fn error(source: &str) -> String {
    run(source).0.unwrap_err().to_string()
}

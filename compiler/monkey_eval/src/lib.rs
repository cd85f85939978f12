//! Monkey Eval - tree-walking evaluator.
//!
//! - [`Interpreter`] evaluates a parsed [`Program`](monkey_ir::Program)
//!   against an [`Environment`].
//! - [`define_macros`] and [`Interpreter::expand_macros`] run the macro
//!   pass between parsing and evaluation.
//! - [`Session`] wires parse, macro expansion and evaluation together with
//!   environments that persist across inputs, the way the REPL needs them.
//!
//! Runtime errors are [`EvalError`]s whose `Display` is the message shown to
//! the user; every constructor lives in [`errors`].

mod builtins;
mod environment;
pub mod errors;
pub mod interpreter;
mod macro_expand;
mod operators;
mod print_handler;
mod session;
mod value;

pub use builtins::Builtin;
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult, Signal};
pub use interpreter::{EvalContext, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use macro_expand::{define_macros, expand_macros, MacroError};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use session::{RunError, Session};
pub use value::{FunctionValue, HashKey, HashValue, Heap, Value};

#[cfg(test)]
mod tests;

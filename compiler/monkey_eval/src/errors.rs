//! Evaluation errors and control signals.
//!
//! Every runtime error message is produced by a factory function in this
//! module, so message text lives in one place.

use crate::value::Value;

/// Typed runtime error category. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },

    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },

    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        op: &'static str,
        operand: &'static str,
    },

    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    #[error("wrong number of arguments, expected {expected} got {got}")]
    WrongArgumentCount { expected: usize, got: usize },

    #[error("argument of type {type_name} not supported by {builtin}")]
    UnsupportedArgument {
        type_name: &'static str,
        builtin: &'static str,
    },

    #[error("not a function: {type_name}")]
    NotAFunction { type_name: &'static str },

    #[error("unusable as hash key: {type_name}")]
    UnusableHashKey { type_name: &'static str },

    #[error("index operator not supported: {type_name}")]
    IndexNotSupported { type_name: &'static str },

    #[error("cannot enumerate over {type_name}")]
    NotIterable { type_name: &'static str },

    #[error("value identifier is allowed only when enumerating over hashes")]
    ValueIdentifierOutsideHash,

    #[error("break statement invalid outside of a for loop")]
    BreakOutsideLoop,

    #[error("skip statement invalid outside of a for loop")]
    SkipOutsideLoop,

    #[error("type {type_name} cannot be converted to a string")]
    NotConvertibleToString { type_name: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("maximum call depth of {limit} exceeded")]
    CallDepthExceeded { limit: usize },
}

/// A runtime error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    #[cold]
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Anything that stops normal evaluation of a statement list.
#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    /// `return value` unwinding to the enclosing function or program.
    Return(Value),
    /// `break` unwinding to the enclosing loop.
    Break,
    /// `skip` unwinding to the next loop iteration.
    Skip,
    Error(EvalError),
}

impl From<EvalError> for Signal {
    fn from(error: EvalError) -> Self {
        Signal::Error(error)
    }
}

/// Result of evaluating one node.
pub type EvalResult = Result<Value, Signal>;

// Operators

#[cold]
pub fn type_mismatch(left: &Value, op: &'static str, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn unknown_infix_operator(left: &Value, op: &'static str, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownInfixOperator {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn unknown_prefix_operator(op: &'static str, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOperator {
        op,
        operand: operand.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

// Names and calls

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    })
}

#[cold]
pub fn wrong_argument_count(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgumentCount { expected, got })
}

#[cold]
pub fn unsupported_argument(value: &Value, builtin: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedArgument {
        type_name: value.type_name(),
        builtin,
    })
}

#[cold]
pub fn not_a_function(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CallDepthExceeded { limit })
}

#[cold]
pub fn not_convertible_to_string(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotConvertibleToString {
        type_name: value.type_name(),
    })
}

// Indexing

#[cold]
pub fn unusable_hash_key(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnusableHashKey {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn index_not_supported(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexNotSupported {
        type_name: value.type_name(),
    })
}

// Loops

#[cold]
pub fn not_iterable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIterable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn value_identifier_outside_hash() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ValueIdentifierOutsideHash)
}

#[cold]
pub fn break_outside_loop() -> EvalError {
    EvalError::from_kind(EvalErrorKind::BreakOutsideLoop)
}

#[cold]
pub fn skip_outside_loop() -> EvalError {
    EvalError::from_kind(EvalErrorKind::SkipOutsideLoop)
}

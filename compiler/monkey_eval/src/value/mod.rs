//! Runtime values.
//!
//! Values are immutable once built. Composites live behind [`Heap`] so that
//! cloning a value is cheap and identity can be observed with
//! [`Heap::ptr_eq`].
//!
//! `PartialEq` on [`Value`] is the language's `==` for same-typed operands:
//! integers, booleans, strings and `null` compare by value, built-ins by
//! which built-in they are, and every composite by identity.

mod hash;
mod heap;

use std::fmt;
use std::rc::Rc;

use monkey_ir::{Expression, FunctionLiteral};

use crate::builtins::Builtin;
use crate::environment::Environment;

pub use hash::{HashKey, HashValue};
pub use heap::Heap;

#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Str(Heap<str>),
    Null,
    /// Result of evaluating nothing, such as an empty block. Never printed.
    Void,
    Array(Heap<Vec<Value>>),
    Hash(Heap<HashValue>),
    Function(Heap<FunctionValue>),
    Macro(Heap<FunctionValue>),
    Builtin(Builtin),
    /// An unevaluated expression produced by `quote`.
    Quote(Heap<Expression>),
}

impl Value {
    pub fn string(value: impl Into<Heap<str>>) -> Self {
        Value::Str(value.into())
    }

    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Heap::new(elements))
    }

    pub fn hash(hash: HashValue) -> Self {
        Value::Hash(Heap::new(hash))
    }

    pub fn function(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        Value::Function(Heap::new(FunctionValue { literal, env }))
    }

    pub fn macro_value(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        Value::Macro(Heap::new(FunctionValue { literal, env }))
    }

    pub fn quote(expr: Expression) -> Self {
        Value::Quote(Heap::new(expr))
    }

    /// Type name used in error messages and by `typeof`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Null => "NULL",
            Value::Void => "VOID",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Macro(_) => "MACRO",
            Value::Builtin(_) => "BUILTIN",
            Value::Quote(_) => "QUOTE",
        }
    }

    /// `false` and `null` are falsy; everything else, `0` included, is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    /// The key this value hashes as, if it may key a hash.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(n) => Some(HashKey::Integer(*n)),
            Value::Boolean(b) => Some(HashKey::Boolean(*b)),
            Value::Str(s) => Some(HashKey::Str(s.clone())),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Null, Value::Null) | (Value::Void, Value::Void) => true,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Heap::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => Heap::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) | (Value::Macro(a), Value::Macro(b)) => {
                Heap::ptr_eq(a, b)
            }
            (Value::Quote(a), Value::Quote(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Display form used by the REPL and `puts`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::Null => f.write_str("null"),
            Value::Void => Ok(()),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Hash(hash) => write!(f, "{}", &**hash),
            Value::Function(func) => write!(f, "fn{}", func.literal),
            Value::Macro(mac) => write!(f, "macro{}", mac.literal),
            Value::Builtin(_) => f.write_str("built-in function"),
            Value::Quote(expr) => write!(f, "QUOTE({})", &**expr),
        }
    }
}

/// A closure: a function or macro literal plus the environment it was
/// defined in.
#[derive(Clone)]
pub struct FunctionValue {
    pub literal: Rc<FunctionLiteral>,
    pub env: Environment,
}

impl FunctionValue {
    pub fn arity(&self) -> usize {
        self.literal.parameters.len()
    }
}

// The captured environment may contain this very function.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("literal", &self.literal)
            .finish_non_exhaustive()
    }
}

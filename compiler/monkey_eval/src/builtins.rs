//! Built-in functions.
//!
//! Built-ins are resolved after the environment chain, so a user binding
//! named `len` hides the built-in.

use crate::errors::{
    integer_overflow, not_convertible_to_string, unsupported_argument, wrong_argument_count,
    EvalError, EvalResult,
};
use crate::interpreter::{EvalContext, Interpreter};
use crate::value::Value;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Builtin {
    Len,
    First,
    Last,
    Rest,
    Push,
    Puts,
    Str,
    TypeOf,
    Map,
    Reduce,
}

impl Builtin {
    pub fn lookup(name: &str) -> Option<Self> {
        Some(match name {
            "len" => Builtin::Len,
            "first" => Builtin::First,
            "last" => Builtin::Last,
            "rest" => Builtin::Rest,
            "push" => Builtin::Push,
            "puts" => Builtin::Puts,
            "str" => Builtin::Str,
            "typeof" => Builtin::TypeOf,
            "map" => Builtin::Map,
            "reduce" => Builtin::Reduce,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::First => "first",
            Builtin::Last => "last",
            Builtin::Rest => "rest",
            Builtin::Push => "push",
            Builtin::Puts => "puts",
            Builtin::Str => "str",
            Builtin::TypeOf => "typeof",
            Builtin::Map => "map",
            Builtin::Reduce => "reduce",
        }
    }

    pub(crate) fn call(
        self,
        interp: &Interpreter,
        args: Vec<Value>,
        ctx: EvalContext,
    ) -> EvalResult {
        let value = match self {
            Builtin::Len => {
                let [arg] = arity(args)?;
                len(&arg)?
            }
            Builtin::First => {
                let [arg] = arity(args)?;
                let elements = array_arg(&arg, self)?;
                elements.first().cloned().unwrap_or(Value::Null)
            }
            Builtin::Last => {
                let [arg] = arity(args)?;
                let elements = array_arg(&arg, self)?;
                elements.last().cloned().unwrap_or(Value::Null)
            }
            Builtin::Rest => {
                let [arg] = arity(args)?;
                match array_arg(&arg, self)? {
                    [] => Value::Null,
                    [_, rest @ ..] => Value::array(rest.to_vec()),
                }
            }
            Builtin::Push => {
                let [arg, element] = arity(args)?;
                let mut elements = array_arg(&arg, self)?.to_vec();
                elements.push(element);
                Value::array(elements)
            }
            Builtin::Puts => {
                for arg in &args {
                    interp.print_handler().println(&arg.to_string());
                }
                Value::Null
            }
            Builtin::Str => {
                let [arg] = arity(args)?;
                match arg {
                    Value::Integer(n) => Value::string(n.to_string()),
                    // Capitalized, unlike the literal and the display form.
                    Value::Boolean(true) => Value::string("True"),
                    Value::Boolean(false) => Value::string("False"),
                    Value::Str(s) => Value::Str(s),
                    other => return Err(not_convertible_to_string(&other).into()),
                }
            }
            Builtin::TypeOf => {
                let [arg] = arity(args)?;
                Value::string(arg.type_name())
            }
            Builtin::Map => {
                let [arg, func] = arity(args)?;
                let elements = array_arg(&arg, self)?;
                callable_arg(&func, self)?;
                let mut mapped = Vec::with_capacity(elements.len());
                for element in elements {
                    mapped.push(interp.apply_function(&func, vec![element.clone()], ctx)?);
                }
                Value::array(mapped)
            }
            Builtin::Reduce => {
                let [arg, initial, func] = arity(args)?;
                let elements = array_arg(&arg, self)?;
                callable_arg(&func, self)?;
                let mut acc = initial;
                for element in elements {
                    acc = interp.apply_function(&func, vec![acc, element.clone()], ctx)?;
                }
                acc
            }
        };
        Ok(value)
    }
}

/// Unpack exactly `N` arguments.
fn arity<const N: usize>(args: Vec<Value>) -> Result<[Value; N], EvalError> {
    <[Value; N]>::try_from(args).map_err(|args| wrong_argument_count(N, args.len()))
}

fn array_arg(value: &Value, builtin: Builtin) -> Result<&[Value], EvalError> {
    match value {
        Value::Array(elements) => Ok(elements.as_slice()),
        other => Err(unsupported_argument(other, builtin.name())),
    }
}

fn callable_arg(value: &Value, builtin: Builtin) -> Result<(), EvalError> {
    match value {
        Value::Function(_) | Value::Builtin(_) => Ok(()),
        other => Err(unsupported_argument(other, builtin.name())),
    }
}

fn len(value: &Value) -> Result<Value, EvalError> {
    let count = match value {
        Value::Str(s) => s.chars().count(),
        Value::Array(elements) => elements.len(),
        Value::Hash(hash) => hash.len(),
        other => return Err(unsupported_argument(other, Builtin::Len.name())),
    };
    i64::try_from(count)
        .map(Value::Integer)
        .map_err(|_| integer_overflow("len"))
}

//! Prefix and infix operator evaluation.
//!
//! Integer arithmetic is checked: overflow and division by zero are runtime
//! errors. Division truncates toward zero and `%` takes the sign of the
//! dividend.

use monkey_ir::{BinaryOp, UnaryOp};

use crate::errors::{
    division_by_zero, integer_overflow, type_mismatch, unknown_infix_operator,
    unknown_prefix_operator, EvalError,
};
use crate::value::Value;

pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, EvalError> {
    match (op, operand) {
        (UnaryOp::Not, value) => Ok(Value::Boolean(!value.is_truthy())),
        (UnaryOp::Neg, Value::Integer(n)) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| integer_overflow("negation")),
        (UnaryOp::Neg, value) => Err(unknown_prefix_operator(op.as_symbol(), value)),
    }
}

pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => match op {
            BinaryOp::Add => Ok(Value::string(format!("{}{}", &**a, &**b))),
            BinaryOp::Eq => Ok(Value::Boolean(a == b)),
            _ => Err(unknown_infix_operator(left, op.as_symbol(), right)),
        },
        _ if left.type_name() != right.type_name() => {
            Err(type_mismatch(left, op.as_symbol(), right))
        }
        _ => match op {
            BinaryOp::Eq => Ok(Value::Boolean(left == right)),
            BinaryOp::NotEq => Ok(Value::Boolean(left != right)),
            _ => Err(unknown_infix_operator(left, op.as_symbol(), right)),
        },
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> Result<Value, EvalError> {
    let checked = |result: Option<i64>, operation: &'static str| {
        result.map(Value::Integer).ok_or_else(|| integer_overflow(operation))
    };

    match op {
        BinaryOp::Add => checked(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked(a.checked_mul(b), "multiplication"),
        BinaryOp::Div if b == 0 => Err(division_by_zero()),
        BinaryOp::Div => checked(a.checked_div(b), "division"),
        BinaryOp::Mod if b == 0 => Err(division_by_zero()),
        BinaryOp::Mod => checked(a.checked_rem(b), "remainder"),
        BinaryOp::Lt => Ok(Value::Boolean(a < b)),
        BinaryOp::Gt => Ok(Value::Boolean(a > b)),
        BinaryOp::Eq => Ok(Value::Boolean(a == b)),
        BinaryOp::NotEq => Ok(Value::Boolean(a != b)),
    }
}

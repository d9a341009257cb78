//! Infix operator implementations for the evaluator.
//!
//! Direct pattern matching over the operand kinds. The order of the arms
//! is significant:
//! 1. two integers: arithmetic and comparison
//! 2. two strings: concatenation and value equality
//! 3. different kinds: type mismatch
//! 4. same kind: `==`/`!=` by identity, anything else is unknown

use monkey_ir::InfixOperator;

use crate::errors::{division_by_zero, type_mismatch, unknown_infix_operator};
use crate::Value;

/// Apply an infix operator to two already evaluated operands.
pub fn evaluate_infix(operator: InfixOperator, left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer_infix(operator, *a, *b),
        (Value::String(a), Value::String(b)) => eval_string_infix(operator, a, b),
        _ if left.type_name() != right.type_name() => {
            type_mismatch(left.type_name(), operator, right.type_name()).into()
        }
        _ => match operator {
            InfixOperator::Eq => Value::Boolean(left.identical(right)),
            InfixOperator::NotEq => Value::Boolean(!left.identical(right)),
            _ => unknown_infix_operator(left.type_name(), operator, right.type_name()).into(),
        },
    }
}

/// Integer arithmetic wraps on overflow; division truncates toward zero.
fn eval_integer_infix(operator: InfixOperator, a: i64, b: i64) -> Value {
    match operator {
        InfixOperator::Add => Value::Integer(a.wrapping_add(b)),
        InfixOperator::Sub => Value::Integer(a.wrapping_sub(b)),
        InfixOperator::Mul => Value::Integer(a.wrapping_mul(b)),
        InfixOperator::Div => {
            if b == 0 {
                division_by_zero().into()
            } else {
                Value::Integer(a.wrapping_div(b))
            }
        }
        InfixOperator::Lt => Value::Boolean(a < b),
        InfixOperator::Gt => Value::Boolean(a > b),
        InfixOperator::Eq => Value::Boolean(a == b),
        InfixOperator::NotEq => Value::Boolean(a != b),
    }
}

fn eval_string_infix(operator: InfixOperator, a: &str, b: &str) -> Value {
    match operator {
        InfixOperator::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Value::string(&joined)
        }
        InfixOperator::Eq => Value::Boolean(a == b),
        InfixOperator::NotEq => Value::Boolean(a != b),
        _ => unknown_infix_operator("STRING", operator, "STRING").into(),
    }
}

//! Prefix operator implementations for the evaluator.

use monkey_ir::PrefixOperator;

use crate::errors::unknown_prefix_operator;
use crate::Value;

/// Apply a prefix operator to an already evaluated operand.
pub fn evaluate_prefix(operator: PrefixOperator, operand: &Value) -> Value {
    match (operator, operand) {
        // `!` is defined on every value: only `false` and `null` negate to true.
        (PrefixOperator::Not, value) => Value::Boolean(!value.is_truthy()),

        (PrefixOperator::Neg, Value::Integer(n)) => Value::Integer(n.wrapping_neg()),
        (PrefixOperator::Neg, other) => unknown_prefix_operator(operator, other.type_name()).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bang_operator() {
        let cases = [
            (Value::Boolean(true), false),
            (Value::Boolean(false), true),
            (Value::Null, true),
            (Value::Integer(5), false),
            (Value::Integer(0), false),
            (Value::string(""), false),
        ];
        for (operand, expected) in cases {
            assert_eq!(
                evaluate_prefix(PrefixOperator::Not, &operand),
                Value::Boolean(expected)
            );
        }
    }

    #[test]
    fn minus_operator() {
        assert_eq!(
            evaluate_prefix(PrefixOperator::Neg, &Value::Integer(5)),
            Value::Integer(-5)
        );
        assert_eq!(
            evaluate_prefix(PrefixOperator::Neg, &Value::Integer(i64::MIN)),
            Value::Integer(i64::MIN)
        );
        assert_eq!(
            evaluate_prefix(PrefixOperator::Neg, &Value::Boolean(true)).to_string(),
            "ERROR: unknown operator: -BOOLEAN"
        );
    }
}

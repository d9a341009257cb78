//! Expression evaluation.

use std::collections::BTreeMap;
use std::rc::Rc;

use monkey_ir::{CallExpression, Expression, HashLiteral, IfExpression};
use monkey_stack::ensure_sufficient_stack;

use super::{try_value, Interpreter};
use crate::errors::{identifier_not_found, index_not_supported, unusable_hash_key};
use crate::operators::evaluate_infix;
use crate::unary_operators::evaluate_prefix;
use crate::{Builtin, EnvId, FunctionValue, MacroValue, Value};

impl Interpreter {
    /// Evaluate an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions and deep recursion.
    pub fn eval_expression(&mut self, expression: &Expression, env: EnvId) -> Value {
        ensure_sufficient_stack(|| self.eval_expression_inner(expression, env))
    }

    fn eval_expression_inner(&mut self, expression: &Expression, env: EnvId) -> Value {
        match expression {
            Expression::Identifier(ident) => self.eval_identifier(&ident.name, env),
            Expression::IntegerLiteral(n) => Value::Integer(*n),
            Expression::StringLiteral(s) => Value::string(s),
            Expression::Boolean(b) => Value::Boolean(*b),
            Expression::Prefix(prefix) => {
                let right = try_value!(self.eval_expression(&prefix.right, env));
                evaluate_prefix(prefix.operator, &right)
            }
            Expression::Infix(infix) => {
                let left = try_value!(self.eval_expression(&infix.left, env));
                let right = try_value!(self.eval_expression(&infix.right, env));
                evaluate_infix(infix.operator, &left, &right)
            }
            Expression::If(if_expr) => self.eval_if(if_expr, env),
            Expression::Function(literal) => {
                self.envs.capture(env);
                Value::Function(Rc::new(FunctionValue {
                    parameters: literal.parameters.clone(),
                    body: Rc::clone(&literal.body),
                    env,
                }))
            }
            Expression::Macro(literal) => {
                self.envs.capture(env);
                Value::Macro(Rc::new(MacroValue {
                    parameters: literal.parameters.clone(),
                    body: Rc::clone(&literal.body),
                    env,
                }))
            }
            Expression::Call(call) => self.eval_call_expression(call, env),
            Expression::Array(array) => match self.eval_expressions(&array.elements, env) {
                Ok(elements) => Value::array(elements),
                Err(error) => error,
            },
            Expression::Index(index) => {
                let left = try_value!(self.eval_expression(&index.left, env));
                let index = try_value!(self.eval_expression(&index.index, env));
                eval_index(&left, &index)
            }
            Expression::Hash(hash) => self.eval_hash_literal(hash, env),
        }
    }

    /// Environment first, then the built-ins.
    fn eval_identifier(&self, name: &str, env: EnvId) -> Value {
        if let Some(value) = self.envs.get(env, name) {
            return value.clone();
        }
        match Builtin::lookup(name) {
            Some(builtin) => Value::Builtin(builtin),
            None => identifier_not_found(name).into(),
        }
    }

    fn eval_if(&mut self, if_expr: &IfExpression, env: EnvId) -> Value {
        let condition = try_value!(self.eval_expression(&if_expr.condition, env));

        if condition.is_truthy() {
            self.eval_block(&if_expr.consequence, env)
        } else if let Some(alternative) = &if_expr.alternative {
            self.eval_block(alternative, env)
        } else {
            Value::Null
        }
    }

    /// `quote` is recognised by name before the callee is evaluated, so it
    /// cannot be shadowed.
    fn eval_call_expression(&mut self, call: &CallExpression, env: EnvId) -> Value {
        if call.callee_name() == Some("quote") {
            return self.eval_quote(&call.arguments, env);
        }

        let function = try_value!(self.eval_expression(&call.function, env));
        match self.eval_expressions(&call.arguments, env) {
            Ok(arguments) => self.apply_function(&function, arguments),
            Err(error) => error,
        }
    }

    /// Evaluate left to right, stopping at the first `Return` or `Error`
    /// signal, which is returned as `Err`.
    pub(crate) fn eval_expressions(
        &mut self,
        expressions: &[Expression],
        env: EnvId,
    ) -> Result<Vec<Value>, Value> {
        let mut values = Vec::with_capacity(expressions.len());
        for expression in expressions {
            let value = self.eval_expression(expression, env);
            if value.is_signal() {
                return Err(value);
            }
            values.push(value);
        }
        Ok(values)
    }

    /// Keys are evaluated, checked for hashability, then paired with their
    /// evaluated value; a repeated key keeps the last value.
    fn eval_hash_literal(&mut self, hash: &HashLiteral, env: EnvId) -> Value {
        let mut pairs = BTreeMap::new();

        for (key_expr, value_expr) in &hash.pairs {
            let key = try_value!(self.eval_expression(key_expr, env));
            let Some(hash_key) = key.hash_key() else {
                return unusable_hash_key(key.type_name()).into();
            };
            let value = try_value!(self.eval_expression(value_expr, env));
            pairs.insert(hash_key, value);
        }

        Value::hash(pairs)
    }
}

/// Out-of-range array indices, including negative ones, yield `null`.
fn eval_index(left: &Value, index: &Value) -> Value {
    match (left, index) {
        (Value::Array(elements), Value::Integer(i)) => usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Value::Null),
        (Value::Hash(pairs), key) => match key.hash_key() {
            Some(hash_key) => pairs.get(&hash_key).cloned().unwrap_or(Value::Null),
            None => unusable_hash_key(key.type_name()).into(),
        },
        _ => index_not_supported(left.type_name()).into(),
    }
}

//! `quote` and `unquote`.

use std::rc::Rc;

use monkey_ir::modify::{self, Modifier};
use monkey_ir::{CallExpression, Expression};

use crate::errors::{not_an_ast_node, wrong_argument_count, EvalError};
use crate::{EnvId, Interpreter, Value};

impl Interpreter {
    /// `quote(<expr>)`: the argument unevaluated, except that each
    /// `unquote(<expr>)` inside it is evaluated in `env` and replaced by the
    /// value converted back into an expression.
    pub(crate) fn eval_quote(&mut self, arguments: &[Expression], env: EnvId) -> Value {
        let [argument] = arguments else {
            return wrong_argument_count(arguments.len(), 1).into();
        };

        let mut unquoter = Unquoter {
            interpreter: self,
            env,
            error: None,
        };
        let node = modify::modify_expression(argument.clone(), &mut unquoter);

        match unquoter.error {
            Some(error) => error.into(),
            None => Value::Quote(Rc::new(node)),
        }
    }
}

/// Splices `unquote` calls. Stops evaluating after the first failure.
struct Unquoter<'a> {
    interpreter: &'a mut Interpreter,
    env: EnvId,
    error: Option<EvalError>,
}

impl Modifier for Unquoter<'_> {
    fn modify_expression(&mut self, expression: Expression) -> Expression {
        match expression {
            Expression::Call(call) if self.error.is_none() && is_unquote(&call) => {
                let value = self
                    .interpreter
                    .eval_expression(&call.arguments[0], self.env)
                    .unwrap_return();
                match value_to_expression(value) {
                    Ok(node) => node,
                    Err(error) => {
                        self.error = Some(error);
                        Expression::Call(call)
                    }
                }
            }
            other => other,
        }
    }
}

/// `unquote` with anything other than one argument is left as written.
fn is_unquote(call: &CallExpression) -> bool {
    call.callee_name() == Some("unquote") && call.arguments.len() == 1
}

fn value_to_expression(value: Value) -> Result<Expression, EvalError> {
    match value {
        Value::Integer(n) => Ok(Expression::IntegerLiteral(n)),
        Value::Boolean(b) => Ok(Expression::Boolean(b)),
        Value::String(s) => Ok(Expression::string(&*s)),
        Value::Array(elements) => {
            let elements = elements
                .iter()
                .cloned()
                .map(value_to_expression)
                .collect::<Result<_, _>>()?;
            Ok(Expression::array(elements))
        }
        Value::Hash(pairs) => {
            let pairs = pairs
                .iter()
                .map(|(key, value)| {
                    let key = value_to_expression(key.clone().into_value())?;
                    let value = value_to_expression(value.clone())?;
                    Ok((key, value))
                })
                .collect::<Result<_, EvalError>>()?;
            Ok(Expression::hash(pairs))
        }
        Value::Quote(node) => Ok(Rc::unwrap_or_clone(node)),
        Value::Error(error) => Err(error),
        other => Err(not_an_ast_node(other.type_name())),
    }
}

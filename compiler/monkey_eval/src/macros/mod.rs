//! Macro definition and expansion.
//!
//! Runs between parsing and evaluation:
//!
//! 1. [`Interpreter::define_macros`] removes top-level `let <name> =
//!    macro(...) {...};` statements and binds each macro in the macro
//!    environment.
//! 2. [`Interpreter::expand_macros`] rewrites every call whose callee names
//!    a bound macro. The macro body runs with its parameters bound to the
//!    quoted, unevaluated arguments and must produce a quote; the quoted
//!    expression replaces the call.
//!
//! # Module Structure
//!
//! - `mod.rs`: the two passes
//! - `quote.rs`: the `quote` form and `unquote` splicing

mod quote;

use std::rc::Rc;

use monkey_ir::modify::{self, Modifier};
use monkey_ir::{CallExpression, Expression, MacroLiteral, Program, Statement};
use tracing::debug;

use crate::errors::{macro_result_not_quoted, EvalError};
use crate::{EnvId, Interpreter, MacroValue, Value};

impl Interpreter {
    /// Bind every top-level macro definition in `env` and remove it from
    /// the program. Other statements keep their order; nested definitions
    /// are left alone.
    pub fn define_macros(&mut self, program: &mut Program, env: EnvId) {
        program.statements.retain(|statement| {
            let Statement::Let(stmt) = statement else {
                return true;
            };
            let Expression::Macro(literal) = &stmt.value else {
                return true;
            };

            self.envs.capture(env);
            let value = MacroValue {
                parameters: literal.parameters.clone(),
                body: Rc::clone(&literal.body),
                env,
            };
            self.envs
                .set(env, stmt.name.name.as_str(), Value::Macro(Rc::new(value)));
            debug!(name = %stmt.name.name, "defined macro");
            false
        });
    }

    /// Replace every macro call in `program` with the macro's output.
    ///
    /// A call with the wrong number of arguments becomes a call of the
    /// macro literal itself, which fails when evaluated. Any other failure
    /// leaves the call as written and is recorded for
    /// [`take_expansion_errors`](Self::take_expansion_errors).
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn expand_macros(&mut self, program: Program, env: EnvId) -> Program {
        let mut expander = MacroExpander {
            interpreter: self,
            env,
        };
        modify::modify_program(program, &mut expander)
    }

    /// Failures recorded by earlier `expand_macros` calls, oldest first.
    pub fn take_expansion_errors(&mut self) -> Vec<EvalError> {
        std::mem::take(&mut self.expansion_errors)
    }

    fn lookup_macro(&self, call: &CallExpression, env: EnvId) -> Option<Rc<MacroValue>> {
        let name = call.callee_name()?;
        match self.envs.get(env, name)? {
            Value::Macro(mac) => Some(Rc::clone(mac)),
            _ => None,
        }
    }

    fn expand_call(&mut self, call: CallExpression, mac: &MacroValue) -> Expression {
        if call.arguments.len() != mac.parameters.len() {
            debug!(
                got = call.arguments.len(),
                want = mac.parameters.len(),
                "macro arity mismatch"
            );
            let literal = Expression::Macro(MacroLiteral {
                parameters: mac.parameters.clone(),
                body: Rc::clone(&mac.body),
            });
            return Expression::call(literal, call.arguments);
        }

        let mark = self.envs.mark();
        let expansion_env = self.envs.new_enclosed(mac.env);
        for (parameter, argument) in mac.parameters.iter().zip(&call.arguments) {
            let quoted = Value::Quote(Rc::new(argument.clone()));
            self.envs.set(expansion_env, parameter.name.as_str(), quoted);
        }

        let result = self.eval_block(&mac.body, expansion_env).unwrap_return();
        self.envs.release_to(mark);

        match result {
            Value::Quote(node) => Rc::unwrap_or_clone(node),
            Value::Error(error) => self.expansion_failed(call, error),
            other => {
                let name = call.callee_name().unwrap_or_default().to_owned();
                self.expansion_failed(call, macro_result_not_quoted(&name, other.type_name()))
            }
        }
    }

    fn expansion_failed(&mut self, call: CallExpression, error: EvalError) -> Expression {
        debug!(%error, "macro expansion failed");
        self.expansion_errors.push(error);
        Expression::Call(call)
    }
}

struct MacroExpander<'a> {
    interpreter: &'a mut Interpreter,
    env: EnvId,
}

impl Modifier for MacroExpander<'_> {
    fn modify_expression(&mut self, expression: Expression) -> Expression {
        match expression {
            Expression::Call(call) => match self.interpreter.lookup_macro(&call, self.env) {
                Some(mac) => self.interpreter.expand_call(call, &mac),
                None => Expression::Call(call),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests;

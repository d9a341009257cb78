//! Function application.

use tracing::debug;

use super::Interpreter;
use crate::errors::{macro_outside_expansion, not_a_function, wrong_argument_count};
use crate::Value;

impl Interpreter {
    /// Apply an evaluated callee to evaluated arguments.
    ///
    /// A closure runs in a fresh frame enclosed by the frame it captured;
    /// the frame is released afterwards unless a closure created during
    /// the call still refers to it.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = function.type_name(), args = arguments.len()))]
    pub fn apply_function(&mut self, function: &Value, arguments: Vec<Value>) -> Value {
        match function {
            Value::Function(closure) => {
                if arguments.len() != closure.parameters.len() {
                    return wrong_argument_count(arguments.len(), closure.parameters.len()).into();
                }

                let mark = self.envs.mark();
                let call_env = self.envs.new_enclosed(closure.env);
                for (parameter, argument) in closure.parameters.iter().zip(arguments) {
                    self.envs.set(call_env, parameter.name.as_str(), argument);
                }

                let result = self.eval_block(&closure.body, call_env).unwrap_return();
                if self.envs.release_to(mark) {
                    debug!(frames = self.envs.len(), "released call frames");
                }
                result
            }
            Value::Builtin(builtin) => builtin
                .call(&arguments, &self.print_handler)
                .unwrap_or_else(Value::Error),
            Value::Macro(mac) => {
                if arguments.len() == mac.parameters.len() {
                    macro_outside_expansion().into()
                } else {
                    wrong_argument_count(arguments.len(), mac.parameters.len()).into()
                }
            }
            other => not_a_function(other.type_name()).into(),
        }
    }
}

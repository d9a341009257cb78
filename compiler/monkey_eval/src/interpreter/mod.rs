//! The tree-walking interpreter.
//!
//! Every `eval_*` method returns a [`Value`]. `Value::Return` and
//! `Value::Error` are signals: sequences stop at the first one and pass it
//! up unchanged. Function application unwraps `Return`; nothing unwraps
//! `Error`.
//!
//! # Module Structure
//!
//! - `mod.rs`: state, entry points, statements and blocks
//! - `expr.rs`: expressions
//! - `function_call.rs`: application of closures and built-ins

mod expr;
mod function_call;

use monkey_ir::modify::Node;
use monkey_ir::{BlockStatement, Program, Statement};

use crate::print_handler::stdout_handler;
use crate::{EnvArena, EnvId, EvalError, SharedPrintHandler, Value};

/// Return early with `$value` if it is a `Return` or `Error` signal,
/// otherwise yield it.
macro_rules! try_value {
    ($value:expr) => {
        match $value {
            signal @ ($crate::Value::Return(_) | $crate::Value::Error(_)) => return signal,
            value => value,
        }
    };
}
pub(crate) use try_value;

/// Evaluator state: the environment arena and the `puts` destination.
pub struct Interpreter {
    pub(crate) envs: EnvArena,
    pub(crate) print_handler: SharedPrintHandler,
    /// Failures recorded by `expand_macros`, drained by
    /// `take_expansion_errors`.
    pub(crate) expansion_errors: Vec<EvalError>,
}

impl Interpreter {
    /// An interpreter that prints to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            envs: EnvArena::new(),
            print_handler,
            expansion_errors: Vec::new(),
        }
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// A fresh top-level environment.
    pub fn new_environment(&mut self) -> EnvId {
        self.envs.new_root()
    }

    pub fn environments(&self) -> &EnvArena {
        &self.envs
    }

    /// Evaluate any node.
    pub fn eval(&mut self, node: &Node, env: EnvId) -> Value {
        match node {
            Node::Program(program) => self.eval_program(program, env),
            Node::Statement(statement) => self.eval_statement(statement, env),
            Node::Block(block) => self.eval_block(block, env),
            Node::Expression(expression) => self.eval_expression(expression, env),
        }
    }

    /// Evaluate top-level statements. A `return` ends the program with its
    /// value; an error ends it with the error.
    pub fn eval_program(&mut self, program: &Program, env: EnvId) -> Value {
        let mut result = Value::Null;
        for statement in &program.statements {
            result = self.eval_statement(statement, env);
            match result {
                Value::Return(inner) => return *inner,
                Value::Error(_) => return result,
                _ => {}
            }
        }
        result
    }

    /// Evaluate a block. Unlike a program, `Return` is passed up still
    /// wrapped so that it leaves every enclosing block.
    pub fn eval_block(&mut self, block: &BlockStatement, env: EnvId) -> Value {
        let mut result = Value::Null;
        for statement in &block.statements {
            result = self.eval_statement(statement, env);
            if result.is_signal() {
                return result;
            }
        }
        result
    }

    /// Evaluate a statement. `let` binds in `env` and yields `null`.
    pub fn eval_statement(&mut self, statement: &Statement, env: EnvId) -> Value {
        match statement {
            Statement::Let(stmt) => {
                let value = try_value!(self.eval_expression(&stmt.value, env));
                self.envs.set(env, stmt.name.name.as_str(), value);
                Value::Null
            }
            Statement::Return(stmt) => {
                let value = try_value!(self.eval_expression(&stmt.value, env));
                Value::Return(Box::new(value))
            }
            Statement::Expression(stmt) => self.eval_expression(&stmt.expression, env),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

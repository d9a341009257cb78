//! Parse, expand, evaluate.

use monkey_eval::{stdout_handler, EnvId, Interpreter, SharedPrintHandler, Value};
use monkey_ir::{Program, Statement};
use monkey_parse::{ParseError, ParseOutput};

/// Parse a whole source text.
pub fn parse_source(source: &str) -> ParseOutput {
    monkey_parse::parse(source)
}

/// Whether the last statement is a `let`; the REPL prints nothing for such
/// input.
pub fn ends_with_let(program: &Program) -> bool {
    matches!(program.statements.last(), Some(Statement::Let(_)))
}

/// An interpreter with a program environment and a separate macro
/// environment, both kept across runs.
pub struct Session {
    interpreter: Interpreter,
    env: EnvId,
    macro_env: EnvId,
}

impl Session {
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        let mut interpreter = Interpreter::with_print_handler(print_handler);
        let env = interpreter.new_environment();
        let macro_env = interpreter.new_environment();
        Session {
            interpreter,
            env,
            macro_env,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Parse and run `source`. Parse errors prevent evaluation.
    pub fn run(&mut self, source: &str) -> Result<Value, Vec<ParseError>> {
        let output = parse_source(source);
        if output.has_errors() {
            return Err(output.errors);
        }
        Ok(self.run_program(output.program))
    }

    /// Expand macros in `program`, then evaluate it. The first expansion
    /// failure, if any, is the result and nothing is evaluated.
    pub fn run_program(&mut self, program: Program) -> Value {
        let program = self.expand(program);
        if let Some(error) = self.interpreter.take_expansion_errors().into_iter().next() {
            return Value::Error(error);
        }
        self.interpreter.eval_program(&program, self.env)
    }

    /// Bind and remove macro definitions, then expand macro calls.
    /// Failures stay queued in the interpreter.
    pub fn expand(&mut self, mut program: Program) -> Program {
        self.interpreter.define_macros(&mut program, self.macro_env);
        self.interpreter.expand_macros(program, self.macro_env)
    }

    pub fn take_expansion_errors(&mut self) -> Vec<monkey_eval::EvalError> {
        self.interpreter.take_expansion_errors()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

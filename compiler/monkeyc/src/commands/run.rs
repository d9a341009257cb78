//! The `run` and `repl` commands.

use std::io;

use monkey_eval::Value;
use tracing::debug;

use super::{parse_or_report, read_file, CommandError};
use crate::{repl, Session};

/// Run a source file. `puts` output goes to stdout; the program's final
/// value is not printed.
pub fn run_file(path: &str) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let program = parse_or_report(path, &source)?;
    debug!(path, statements = program.len(), "running file");

    match Session::new().run_program(program) {
        Value::Error(error) => Err(CommandError::Runtime(error)),
        _ => Ok(()),
    }
}

/// Greet the user and start the REPL on stdin/stdout.
pub fn run_repl() -> Result<(), CommandError> {
    let user = std::env::var("USER").unwrap_or_else(|_| "there".to_owned());
    println!("Hello {user}! This is the Monkey programming language!");
    println!("Feel free to type in commands");

    repl::start(io::stdin().lock(), io::stdout())?;
    Ok(())
}

//! Tree-walking evaluator for Monkey.
//!
//! - [`Value`]: runtime values, including the `Return` and `Error` signals
//! - [`EnvArena`] / [`EnvId`]: lexical environments stored in an arena
//! - [`Interpreter`]: evaluation of programs, blocks, statements and
//!   expressions, built-in functions, and the macro passes
//!   ([`Interpreter::define_macros`], [`Interpreter::expand_macros`])
//!
//! Evaluation never fails with a Rust error: runtime failures are
//! [`Value::Error`] values that short-circuit every enclosing construct.

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod macros;
mod operators;
pub mod print_handler;
mod unary_operators;
mod value;

pub use builtins::Builtin;
pub use environment::{ArenaMark, EnvArena, EnvId};
pub use errors::EvalError;
pub use interpreter::Interpreter;
pub use print_handler::{buffer_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler};
pub use value::{FunctionValue, HashKey, MacroValue, Value};

//! Runtime errors.
//!
//! [`EvalError`] is carried inside [`Value::Error`](crate::Value::Error);
//! its `Display` is the message shown to the user. Evaluator code builds
//! errors through the constructor functions below so that every message
//! is spelled in one place.

use monkey_ir::{InfixOperator, PrefixOperator};

/// A runtime failure. Type names are the upper-case names of
/// [`Value::type_name`](crate::Value::type_name).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: &'static str,
        operator: InfixOperator,
        right: &'static str,
    },

    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        operator: PrefixOperator,
        operand: &'static str,
    },

    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        operator: InfixOperator,
        right: &'static str,
    },

    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    #[error("not a function: {type_name}")]
    NotAFunction { type_name: &'static str },

    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount { got: usize, want: usize },

    #[error("index operator not supported: {type_name}")]
    IndexNotSupported { type_name: &'static str },

    #[error("unusable as hash key: {type_name}")]
    UnusableHashKey { type_name: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    #[error("argument to `{builtin}` not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: &'static str,
    },

    #[error("argument to `{builtin}` must be {expected}, got {got}")]
    ArgumentType {
        builtin: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    #[error("cannot convert {type_name} into an AST node")]
    NotAnAstNode { type_name: &'static str },

    #[error("macro `{name}` must return a quoted AST node, got {got}")]
    MacroResultNotQuoted { name: String, got: &'static str },

    #[error("macro called outside of expansion")]
    MacroOutsideExpansion,
}

// Operator Errors

#[cold]
pub fn type_mismatch(left: &'static str, operator: InfixOperator, right: &'static str) -> EvalError {
    EvalError::TypeMismatch {
        left,
        operator,
        right,
    }
}

#[cold]
pub fn unknown_prefix_operator(operator: PrefixOperator, operand: &'static str) -> EvalError {
    EvalError::UnknownPrefixOperator { operator, operand }
}

#[cold]
pub fn unknown_infix_operator(
    left: &'static str,
    operator: InfixOperator,
    right: &'static str,
) -> EvalError {
    EvalError::UnknownInfixOperator {
        left,
        operator,
        right,
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

// Binding and Call Errors

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::IdentifierNotFound {
        name: name.to_string(),
    }
}

#[cold]
pub fn not_a_function(type_name: &'static str) -> EvalError {
    EvalError::NotAFunction { type_name }
}

#[cold]
pub fn wrong_argument_count(got: usize, want: usize) -> EvalError {
    EvalError::WrongArgumentCount { got, want }
}

// Index Errors

#[cold]
pub fn index_not_supported(type_name: &'static str) -> EvalError {
    EvalError::IndexNotSupported { type_name }
}

#[cold]
pub fn unusable_hash_key(type_name: &'static str) -> EvalError {
    EvalError::UnusableHashKey { type_name }
}

// Built-in Errors

#[cold]
pub fn unsupported_argument(builtin: &'static str, got: &'static str) -> EvalError {
    EvalError::UnsupportedArgument { builtin, got }
}

#[cold]
pub fn argument_type(builtin: &'static str, expected: &'static str, got: &'static str) -> EvalError {
    EvalError::ArgumentType {
        builtin,
        expected,
        got,
    }
}

// Macro Errors

#[cold]
pub fn not_an_ast_node(type_name: &'static str) -> EvalError {
    EvalError::NotAnAstNode { type_name }
}

#[cold]
pub fn macro_result_not_quoted(name: &str, got: &'static str) -> EvalError {
    EvalError::MacroResultNotQuoted {
        name: name.to_string(),
        got,
    }
}

#[cold]
pub fn macro_outside_expansion() -> EvalError {
    EvalError::MacroOutsideExpansion
}

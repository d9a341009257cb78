//! Prefix and infix operators.

use std::fmt;

/// Prefix operators: `!x`, `-x`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrefixOperator {
    Not,
    Neg,
}

impl PrefixOperator {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }
}

/// Infix operators, all left-associative.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InfixOperator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl InfixOperator {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in rendering and in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

//! Runtime values.
//!
//! `Value` is a closed sum. Composite values (arrays, hashes, closures,
//! macros, quotes) sit behind `Rc`, so cloning a value is cheap and the
//! language's identity comparison is pointer equality.
//!
//! `Display` is the user-facing rendering (what the REPL prints).

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, Expression, Identifier};

use crate::{Builtin, EnvId, EvalError};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Null,
    Array(Rc<Vec<Value>>),
    /// Ordered by key so rendering is deterministic.
    Hash(Rc<BTreeMap<HashKey, Value>>),
    /// `return` in flight; unwrapped at the function boundary.
    Return(Box<Value>),
    /// Terminal: propagates to the top level and is never unwrapped.
    Error(EvalError),
    Function(Rc<FunctionValue>),
    Builtin(Builtin),
    Macro(Rc<MacroValue>),
    /// An unevaluated expression produced by `quote`.
    Quote(Rc<Expression>),
}

/// A closure: parameters, the body shared with the AST, and the frame it
/// was created in.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionValue {
    pub parameters: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
    pub env: EnvId,
}

/// A macro bound by `define_macros`; only ever applied during expansion.
#[derive(Clone, Debug, PartialEq)]
pub struct MacroValue {
    pub parameters: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
    pub env: EnvId,
}

/// The value kinds usable as hash keys. Key equality is by value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
}

impl HashKey {
    pub fn into_value(self) -> Value {
        match self {
            HashKey::Integer(n) => Value::Integer(n),
            HashKey::Boolean(b) => Value::Boolean(b),
            HashKey::String(s) => Value::String(s),
        }
    }
}

impl Value {
    pub fn string(value: &str) -> Self {
        Value::String(Rc::from(value))
    }

    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(elements))
    }

    pub fn hash(pairs: BTreeMap<HashKey, Value>) -> Self {
        Value::Hash(Rc::new(pairs))
    }

    /// Name of the value's kind, as used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "STRING",
            Value::Null => "NULL",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Return(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Macro(_) => "MACRO",
            Value::Quote(_) => "QUOTE",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// `Return` or `Error`: a value that must be passed up unchanged.
    #[inline]
    pub fn is_signal(&self) -> bool {
        matches!(self, Value::Return(_) | Value::Error(_))
    }

    /// Only `false` and `null` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    /// The key for this value, if its kind is hashable.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(n) => Some(HashKey::Integer(*n)),
            Value::Boolean(b) => Some(HashKey::Boolean(*b)),
            Value::String(s) => Some(HashKey::String(Rc::clone(s))),
            _ => None,
        }
    }

    /// Identity comparison used by `==` and `!=` on same-kind values.
    ///
    /// Scalars compare by value; composites are identical only when they
    /// are the same allocation.
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Macro(a), Value::Macro(b)) => Rc::ptr_eq(a, b),
            (Value::Quote(a), Value::Quote(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }

    /// Strip a `Return` wrapper, leaving every other value as is.
    pub fn unwrap_return(self) -> Value {
        match self {
            Value::Return(inner) => *inner,
            other => other,
        }
    }
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        Value::Error(error)
    }
}

fn write_parameters(f: &mut fmt::Formatter<'_>, parameters: &[Identifier]) -> fmt::Result {
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{parameter}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => f.write_str(s),
            Value::Null => f.write_str("null"),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Return(inner) => write!(f, "{inner}"),
            Value::Error(error) => write!(f, "ERROR: {error}"),
            Value::Function(function) => {
                f.write_str("fn(")?;
                write_parameters(f, &function.parameters)?;
                write!(f, ") {}", function.body)
            }
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Macro(mac) => {
                f.write_str("macro(")?;
                write_parameters(f, &mac.parameters)?;
                write!(f, ") {}", mac.body)
            }
            Value::Quote(node) => write!(f, "QUOTE({node})"),
        }
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashKey::Integer(n) => write!(f, "{n}"),
            HashKey::Boolean(b) => write!(f, "{b}"),
            HashKey::String(s) => f.write_str(s),
        }
    }
}

//! Built-in functions.
//!
//! Built-ins are consulted only after ordinary lookup fails, so a `let`
//! binding of the same name shadows them.

use crate::errors::{argument_type, unsupported_argument, wrong_argument_count};
use crate::print_handler::PrintHandlerImpl;
use crate::{EvalError, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Len,
    First,
    Last,
    Rest,
    Push,
    Puts,
}

impl Builtin {
    pub const ALL: [Builtin; 6] = [
        Builtin::Len,
        Builtin::First,
        Builtin::Last,
        Builtin::Rest,
        Builtin::Push,
        Builtin::Puts,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::First => "first",
            Builtin::Last => "last",
            Builtin::Rest => "rest",
            Builtin::Push => "push",
            Builtin::Puts => "puts",
        }
    }

    pub fn lookup(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Apply to evaluated arguments.
    pub fn call(self, args: &[Value], print: &PrintHandlerImpl) -> Result<Value, EvalError> {
        match self {
            Builtin::Len => {
                let [arg] = expect_args::<1>(args)?;
                match arg {
                    Value::String(s) => Ok(length(s.len())),
                    Value::Array(elements) => Ok(length(elements.len())),
                    other => Err(unsupported_argument(self.name(), other.type_name())),
                }
            }
            Builtin::First => {
                let [arg] = expect_args::<1>(args)?;
                let elements = expect_array(self, arg)?;
                Ok(elements.first().cloned().unwrap_or(Value::Null))
            }
            Builtin::Last => {
                let [arg] = expect_args::<1>(args)?;
                let elements = expect_array(self, arg)?;
                Ok(elements.last().cloned().unwrap_or(Value::Null))
            }
            Builtin::Rest => {
                let [arg] = expect_args::<1>(args)?;
                let elements = expect_array(self, arg)?;
                match elements.split_first() {
                    Some((_, rest)) => Ok(Value::array(rest.to_vec())),
                    None => Ok(Value::Null),
                }
            }
            Builtin::Push => {
                let [array, element] = expect_args::<2>(args)?;
                let elements = expect_array(self, array)?;
                let mut pushed = Vec::with_capacity(elements.len() + 1);
                pushed.extend_from_slice(elements);
                pushed.push(element.clone());
                Ok(Value::array(pushed))
            }
            Builtin::Puts => {
                for arg in args {
                    print.println(&arg.to_string());
                }
                Ok(Value::Null)
            }
        }
    }
}

/// Check the argument count against the arity encoded in `N`.
fn expect_args<const N: usize>(args: &[Value]) -> Result<&[Value; N], EvalError> {
    args.try_into()
        .map_err(|_| wrong_argument_count(args.len(), N))
}

fn expect_array(builtin: Builtin, value: &Value) -> Result<&[Value], EvalError> {
    match value {
        Value::Array(elements) => Ok(elements.as_slice()),
        other => Err(argument_type(builtin.name(), "ARRAY", other.type_name())),
    }
}

fn length(len: usize) -> Value {
    Value::Integer(i64::try_from(len).unwrap_or(i64::MAX))
}

//! Representing values in the interpreter.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;

use super::stdlib::Builtin;
use crate::ast::FunDef;

/// Values in our language.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// Empty value.
    #[default]
    NoneV,
    /// Integer value, unbounded.
    IntV(BigInt),
    /// String value.
    StrV(String),
    /// Boolean value.
    BoolV(bool),
}

use Value::*;

impl Value {
    /// Truthiness of the value.
    ///
    /// Zero, the empty string, `False` and the empty value are falsy.
    pub fn truth(&self) -> bool {
        match self {
            NoneV => false,
            IntV(i) => !i.is_zero(),
            StrV(s) => !s.is_empty(),
            BoolV(b) => *b,
        }
    }

    /// Name of the kind of value, as shown in failure messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NoneV => "NoneType",
            IntV(_) => "int",
            StrV(_) => "str",
            BoolV(_) => "bool",
        }
    }

    /// Numeric value, if any. Booleans count as 0 and 1.
    pub fn as_int(&self) -> Option<BigInt> {
        match self {
            IntV(i) => Some(i.clone()),
            BoolV(b) => Some(BigInt::from(u8::from(*b))),
            NoneV | StrV(_) => None,
        }
    }
}

impl From<BigInt> for Value {
    fn from(i: BigInt) -> Self {
        IntV(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        IntV(i.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        BoolV(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        StrV(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        StrV(s)
    }
}

/// Display form of a value, as printed by `print` and format strings.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoneV => write!(f, "None"),
            IntV(i) => fmt::Display::fmt(i, f),
            StrV(s) => write!(f, "{s}"),
            BoolV(true) => write!(f, "True"),
            BoolV(false) => write!(f, "False"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrV(s) => write!(f, "{s:?}"),
            _ => fmt::Display::fmt(self, f),
        }
    }
}

/// A callable binding.
#[derive(Clone, Copy)]
pub enum Function<'p> {
    /// Implemented natively.
    Builtin(Builtin),
    /// Defined in the program.
    User(&'p FunDef),
}

impl Function<'_> {
    /// Name of the function.
    pub fn name(&self) -> &str {
        match self {
            Function::Builtin(builtin) => builtin.name(),
            Function::User(f) => f.name.as_str(),
        }
    }
}

impl fmt::Debug for Function<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name())
    }
}

/// What a name can be bound to.
#[derive(Debug, Clone)]
pub enum Binding<'p> {
    /// A value.
    Val(Value),
    /// A function.
    Fun(Function<'p>),
}

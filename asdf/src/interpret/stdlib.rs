//! Standard library: the natively implemented functions and predefined values
//! every program can use.

use std::cmp::Ordering;

use itertools::Itertools;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use Value::*;

use super::{Fail, Streams, Value};

/// Built-in function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `print(v...)`.
    Print,
    /// `input()`.
    Input,
    /// `add(v0, v1, ...)`.
    Add,
    /// `sub(v0, v1, ...)`.
    Sub,
    /// `mul(v0, v1, ...)`.
    Mul,
    /// `div(v0, v1, ...)`.
    Div,
    /// `length(v)`.
    Length,
    /// `eq(a, b)`.
    Eq,
    /// `lt(a, b)`.
    Lt,
    /// `leq(a, b)`.
    Leq,
    /// `gt(a, b)`.
    Gt,
    /// `geq(a, b)`.
    Geq,
}

use Builtin::*;

/// Predefined values.
pub const STD_VALUES: [&str; 3] = ["true", "false", "_"];

impl Builtin {
    /// All built-in functions.
    pub const ALL: [Builtin; 12] = [Print, Input, Add, Sub, Mul, Div, Length, Eq, Lt, Leq, Gt, Geq];

    /// Name under which the function is bound.
    pub fn name(&self) -> &'static str {
        match self {
            Print => "print",
            Input => "input",
            Add => "add",
            Sub => "sub",
            Mul => "mul",
            Div => "div",
            Length => "length",
            Eq => "eq",
            Lt => "lt",
            Leq => "leq",
            Gt => "gt",
            Geq => "geq",
        }
    }

    /// Finds a built-in function by name.
    pub fn lookup(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Fixed number of arguments, if any.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Print | Add | Sub | Mul | Div => None,
            Input => Some(0),
            Length => Some(1),
            Eq | Lt | Leq | Gt | Geq => Some(2),
        }
    }

    /// Calls the function on already evaluated arguments.
    pub fn call(self, args: Vec<Value>, streams: &mut Streams) -> Result<Value, Fail> {
        if let Some(arity) = self.arity() {
            if args.len() != arity {
                return Err(Fail::arity(self.name(), arity, args.len()));
            }
        }
        match self {
            Print => print(args, streams),
            Input => input(streams),
            Add | Sub | Mul | Div => self.arithmetic(args),
            Length => length(&args[0]),
            Eq => Ok(BoolV(equals(&args[0], &args[1]))),
            Lt | Leq | Gt | Geq => self.compare(&args[0], &args[1]),
        }
    }

    /// Folds the numeric arguments of an arithmetic function.
    fn arithmetic(self, args: Vec<Value>) -> Result<Value, Fail> {
        if args.len() < 2 {
            return Err(Fail::too_few_operands(self.name(), args.len()));
        }
        if self == Mul {
            return self.product(args);
        }
        let ints = args
            .iter()
            .map(|arg| self.operand(arg))
            .collect::<Result<Vec<BigInt>, Fail>>()?;
        let (first, rest) = ints.split_first().expect("at least two operands");
        let res = match self {
            Add => ints.iter().sum(),
            Sub => first - rest.iter().sum::<BigInt>(),
            Div => {
                let divisor: BigInt = rest.iter().product();
                if divisor.is_zero() {
                    return Err(Fail::division_by_zero());
                }
                floor_div(first, &divisor)
            }
            _ => unreachable!("not an arithmetic builtin: {}", self.name()),
        };
        Ok(IntV(res))
    }

    /// Multiplies the arguments from left to right.
    ///
    /// A string times an integer repeats the string.
    fn product(self, args: Vec<Value>) -> Result<Value, Fail> {
        args.iter()
            .try_fold(IntV(BigInt::one()), |acc, arg| match (&acc, arg) {
                (StrV(s), n) | (n, StrV(s)) => match n.as_int() {
                    Some(count) => repeat(s, &count),
                    None => Err(Fail::arithmetic(self.name(), n.kind_name())),
                },
                _ => Ok(IntV(self.operand(&acc)? * self.operand(arg)?)),
            })
    }

    /// Numeric value of an operand.
    fn operand(self, value: &Value) -> Result<BigInt, Fail> {
        value
            .as_int()
            .ok_or_else(|| Fail::arithmetic(self.name(), value.kind_name()))
    }

    /// Orders two strings, or two numbers (booleans included).
    fn compare(self, lhs: &Value, rhs: &Value) -> Result<Value, Fail> {
        let ordering = match (lhs, rhs) {
            (StrV(lhs), StrV(rhs)) => lhs.cmp(rhs),
            _ => match (lhs.as_int(), rhs.as_int()) {
                (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
                _ => {
                    return Err(Fail::unsupported_comparison(
                        self.name(),
                        lhs.kind_name(),
                        rhs.kind_name(),
                    ))
                }
            },
        };
        let res = match self {
            Lt => ordering == Ordering::Less,
            Leq => ordering != Ordering::Greater,
            Gt => ordering == Ordering::Greater,
            Geq => ordering != Ordering::Less,
            _ => unreachable!("not a comparison builtin: {}", self.name()),
        };
        Ok(BoolV(res))
    }
}

/// Is `name` bound by the standard library?
pub fn is_reserved(name: &str) -> bool {
    Builtin::lookup(name).is_some() || STD_VALUES.contains(&name)
}

/// Value of a predefined name.
pub fn std_value(name: &str) -> Option<Value> {
    match name {
        "true" => Some(BoolV(true)),
        "false" => Some(BoolV(false)),
        "_" => Some(NoneV),
        _ => None,
    }
}

/// Equality between any two values. Booleans equal the integers 0 and 1.
fn equals(lhs: &Value, rhs: &Value) -> bool {
    match (lhs.as_int(), rhs.as_int()) {
        (Some(lhs), Some(rhs)) => lhs == rhs,
        _ => lhs == rhs,
    }
}

/// Repeats a string. A negative count gives the empty string.
fn repeat(s: &str, count: &BigInt) -> Result<Value, Fail> {
    if count.is_negative() {
        return Ok(StrV(String::new()));
    }
    let count = count
        .to_usize()
        .ok_or_else(|| Fail::arithmetic("mul", "int"))?;
    Ok(StrV(s.repeat(count)))
}

/// Division rounding towards negative infinity.
fn floor_div(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let quotient = lhs / rhs;
    let remainder = lhs % rhs;
    if !remainder.is_zero() && (remainder.is_negative() != rhs.is_negative()) {
        quotient - BigInt::one()
    } else {
        quotient
    }
}

/// Writes the display forms of the values on one line, returns the first one.
fn print(args: Vec<Value>, streams: &mut Streams) -> Result<Value, Fail> {
    writeln!(streams.output, "{}", args.iter().join(" "))?;
    Ok(args.into_iter().next().unwrap_or_default())
}

/// Reads one line, without its line terminator.
fn input(streams: &mut Streams) -> Result<Value, Fail> {
    let mut line = String::new();
    if streams.input.read_line(&mut line)? == 0 {
        return Err(Fail::io("EOF when reading a line"));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(StrV(line))
}

/// Number of characters of a string.
fn length(value: &Value) -> Result<Value, Fail> {
    match value {
        StrV(s) => Ok(IntV(s.chars().count().into())),
        other => Err(Fail::no_length(other.kind_name())),
    }
}

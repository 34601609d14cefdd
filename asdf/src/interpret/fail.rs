//! Runtime failures of a program.

use thiserror::Error;

use crate::ast::Span;
use crate::codes::*;
use crate::reporter::Diagnostic;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    /// Use or call of an unbound name.
    #[error("{0}")]
    UndefinedNameError(String),
    /// Call of a value.
    #[error("{0}")]
    NotCallableError(String),
    /// Use of a function as a value.
    #[error("{0}")]
    NotAValueError(String),
    /// Wrong number of arguments.
    #[error("{0}")]
    ArityError(String),
    /// Binding of a predefined or already defined name.
    #[error("{0}")]
    ReservedNameError(String),
    /// Bad placeholder in a format string.
    #[error("{0}")]
    FormatKeyError(String),
    /// Division by zero.
    #[error("{0}")]
    DivisionByZeroError(String),
    /// Ordering between values that cannot be ordered.
    #[error("{0}")]
    UnsupportedComparisonError(String),
    /// Length of something that has none.
    #[error("{0}")]
    NoLengthError(String),
    /// Literal kind without runtime support.
    #[error("{0}")]
    NotImplementedError(String),
    /// Arithmetic on operands of unsupported kinds.
    #[error("{0}")]
    ArithmeticError(String),
    /// Input or output failure.
    #[error("{0}")]
    IoError(String),
    /// Missing or invalid `main`.
    #[error("{0}")]
    NoEntryPointError(String),
}

use Reason::*;

/// A runtime failure, with the span of the code that triggered it if known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Fail {
    /// What went wrong.
    pub reason: Reason,
    /// Where it went wrong.
    pub span: Option<Span>,
}

impl Fail {
    /// Creates a failure without location.
    pub fn new(reason: Reason) -> Self {
        Self { reason, span: None }
    }

    /// Locates the failure at `span`.
    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Locates the failure at `span`, unless it is already located.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    /// Diagnostic code of the failure.
    pub fn code(&self) -> &'static str {
        match self.reason {
            UndefinedNameError(_) => UNDEFINED_NAME_ERROR,
            NotCallableError(_) => NOT_CALLABLE_ERROR,
            NotAValueError(_) => NOT_A_VALUE_ERROR,
            ArityError(_) => ARITY_ERROR,
            ReservedNameError(_) => RESERVED_NAME_ERROR,
            FormatKeyError(_) => FORMAT_KEY_ERROR,
            DivisionByZeroError(_) => DIVISION_BY_ZERO_ERROR,
            UnsupportedComparisonError(_) => UNSUPPORTED_COMPARISON_ERROR,
            NoLengthError(_) => NO_LENGTH_ERROR,
            NotImplementedError(_) => NOT_IMPLEMENTED_ERROR,
            ArithmeticError(_) => ARITHMETIC_ERROR,
            IoError(_) => IO_ERROR,
            NoEntryPointError(_) => NO_ENTRY_POINT_ERROR,
        }
    }

    /// Converts the failure into a diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error()
            .with_code(self.code())
            .with_message(self.to_string());
        match self.span {
            Some(span) => diagnostic.with_labels(vec![span.as_label()]),
            None => diagnostic,
        }
    }

    /// Call of a name that is not bound.
    pub fn undefined_function(name: &str) -> Self {
        Self::new(UndefinedNameError(format!(
            "call of undefined function: {name}"
        )))
    }

    /// Use of a name that is not bound.
    pub fn undefined_name(name: &str) -> Self {
        Self::new(UndefinedNameError(format!("use of undefined name: {name}")))
    }

    /// Call of a name bound to a value.
    pub fn not_callable(name: &str) -> Self {
        Self::new(NotCallableError(format!("call of Value object: {name}")))
    }

    /// Use of a name bound to a function.
    pub fn not_a_value(name: &str) -> Self {
        Self::new(NotAValueError(format!(
            "use of Function object as Value: {name}"
        )))
    }

    /// Call of a function with the wrong number of arguments.
    pub fn arity(name: &str, expected: usize, got: usize) -> Self {
        Self::new(ArityError(format!(
            "wrong number of arguments when calling {name}: expected {expected}, got {got}"
        )))
    }

    /// Call of a variadic arithmetic builtin with too few arguments.
    pub fn too_few_operands(name: &str, got: usize) -> Self {
        Self::new(ArityError(format!(
            "{name}: need at least two arguments, got {got}"
        )))
    }

    /// Binding of a predefined or already defined name.
    pub fn reserved(name: &str) -> Self {
        Self::new(ReservedNameError(format!(
            "Cannot overwrite a predefined function or value: {name}"
        )))
    }

    /// Unknown variable in a format string.
    pub fn format_key(key: &str, literal: &str) -> Self {
        Self::new(FormatKeyError(format!(
            "Could not find variable '{key}' used in format string {literal}"
        )))
    }

    /// Malformed placeholder in a format string.
    pub fn format_syntax(problem: &str, literal: &str) -> Self {
        Self::new(FormatKeyError(format!(
            "{problem} in format string {literal}"
        )))
    }

    /// Division by zero.
    pub fn division_by_zero() -> Self {
        Self::new(DivisionByZeroError("division by zero".to_string()))
    }

    /// Comparison between values that cannot be ordered.
    pub fn unsupported_comparison(op: &str, lhs: &str, rhs: &str) -> Self {
        Self::new(UnsupportedComparisonError(format!(
            "`{op}` between {lhs} and {rhs} is not supported"
        )))
    }

    /// Length of a value that has none.
    pub fn no_length(kind: &str) -> Self {
        Self::new(NoLengthError(format!(
            "object of type {kind} has no length"
        )))
    }

    /// Literal without runtime support.
    pub fn not_implemented(what: impl std::fmt::Display) -> Self {
        Self::new(NotImplementedError(format!("{what} is not implemented yet")))
    }

    /// Arithmetic on unsupported operands.
    pub fn arithmetic(op: &str, kind: &str) -> Self {
        Self::new(ArithmeticError(format!(
            "{op}: unsupported operand of type {kind}"
        )))
    }

    /// Input or output failure.
    pub fn io(what: impl std::fmt::Display) -> Self {
        Self::new(IoError(what.to_string()))
    }

    /// Missing entry point.
    pub fn no_main() -> Self {
        Self::new(NoEntryPointError("main Function not defined".to_string()))
    }

    /// Entry point bound to something else than a function.
    pub fn main_not_a_function() -> Self {
        Self::new(NoEntryPointError("main is not a Function".to_string()))
    }
}

impl From<std::io::Error> for Fail {
    fn from(err: std::io::Error) -> Self {
        Self::io(format!("I/O error: {err}"))
    }
}

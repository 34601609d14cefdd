//! Defining the diagnostics error codes.

/// Use of a name (or call of a function) that is not bound.
pub const UNDEFINED_NAME_ERROR: &str = "E0001";
/// Call of a binding that is not a function.
pub const NOT_CALLABLE_ERROR: &str = "E0002";
/// Use of a function where a value is expected.
pub const NOT_A_VALUE_ERROR: &str = "E0003";
/// Wrong number of arguments in a call.
pub const ARITY_ERROR: &str = "E0004";
/// Binding of a predefined or already defined name.
pub const RESERVED_NAME_ERROR: &str = "E0005";
/// Unknown or malformed placeholder in a format string.
pub const FORMAT_KEY_ERROR: &str = "E0006";
/// Division by zero.
pub const DIVISION_BY_ZERO_ERROR: &str = "E0007";
/// Comparison between values that cannot be ordered.
pub const UNSUPPORTED_COMPARISON_ERROR: &str = "E0008";
/// Length of a value that has no length.
pub const NO_LENGTH_ERROR: &str = "E0009";
/// Literal recognized by the parser but not supported at runtime.
pub const NOT_IMPLEMENTED_ERROR: &str = "E0010";
/// Arithmetic on operands of unsupported kinds.
pub const ARITHMETIC_ERROR: &str = "E0011";
/// Failure of the input or output sink.
pub const IO_ERROR: &str = "E0012";
/// Missing or invalid `main` function.
pub const NO_ENTRY_POINT_ERROR: &str = "E0013";
/// Parser error.
pub const PARSER_ERROR: &str = "E0100";

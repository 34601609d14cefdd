//! Interpreting programs.
//!
//! The program is walked directly, statement by statement, by the
//! [`Interpreter`].

mod env;
mod fail;
mod format;
mod interpreter;
mod stdlib;
mod value;

use std::fmt;
use std::io::{BufRead, Write};

pub use env::{Env, Globals};
pub use fail::{Fail, Reason};
pub use format::substitute;
pub use interpreter::Interpreter;
pub use stdlib::{is_reserved, Builtin};
pub use value::{Binding, Function, Value};

use crate::ast::Program;

/// Input and output sinks of a running program.
pub struct Streams<'io> {
    /// Where `input` reads lines from.
    pub input: &'io mut dyn BufRead,
    /// Where `print` writes to.
    pub output: &'io mut dyn Write,
}

impl<'io> Streams<'io> {
    /// Creates the sinks.
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self { input, output }
    }
}

impl fmt::Debug for Streams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Streams").finish_non_exhaustive()
    }
}

/// Runs program `p`: registers its functions and calls `main` without
/// arguments.
///
/// Returns the value `main` produced.
pub fn interpret(p: &Program, streams: Streams) -> Result<Value, Fail> {
    let globals = Globals::load(p)?;
    let mut interpreter = Interpreter::new(&globals, streams);
    let res = interpreter.call_main();
    interpreter.flush()?;
    res
}

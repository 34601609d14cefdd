//! asdf language interpreter library.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::time::Instant;

// Defined first so that the macros can be used in the other modules.
#[macro_use]
pub mod context;

pub mod ast;
pub mod codes;
pub mod config;
pub mod examples;
mod grammar;
pub mod interpret;
pub mod reporter;

#[cfg(test)]
#[macro_use]
extern crate asdf_tests_proc;

#[macro_use]
extern crate lazy_static;

extern crate pest;
#[macro_use]
extern crate pest_derive;

#[macro_use]
extern crate anyhow;

use anyhow::Result;
pub use context::Context;
pub use interpret::{Fail, Value};
pub use steps::{interpret, parse, run};

/// Executes program `p` with `input` as its standard input, returning its
/// standard output.
pub fn execute(p: &ast::Program, input: &str) -> Result<String, Fail> {
    let mut input = input.as_bytes();
    let mut output = vec![];
    interpret::interpret(p, interpret::Streams::new(&mut input, &mut output))?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Parses and executes the source code of the context with `input` as its
/// standard input, returning its standard output.
///
/// Parse errors are emitted on the reporter of the context.
pub fn execute_source(ctx: &mut Context<'_>, input: &str) -> Result<Result<String, Fail>> {
    let p = parse(ctx)?;
    Ok(execute(&p, input))
}

mod steps {
    //! Defining the function for all the steps of the interpreter.

    use std::io::{self, Write};

    use super::*;
    use crate::interpret::Streams;

    /// Parses the source code of the context.
    ///
    /// Under the hood, this function is in charge of launching the `pest`
    /// parser and lowering its output into the AST.
    pub fn parse(ctx: &mut Context<'_>) -> Result<ast::Program> {
        verbose_print!(ctx, "Parsing...");
        io::stderr().flush()?;
        let start = Instant::now();
        let res = ast::parse_file(ctx);
        verbose_println!(ctx, "\rParsed [{:?}]", start.elapsed());
        res
    }

    /// Interprets a given program, on the standard input and output of the
    /// process.
    ///
    /// Under the hood, it will load the functions of the program and call the
    /// function `main`.
    pub fn interpret(ctx: &mut Context<'_>, p: &ast::Program) -> Result<Result<Value, Fail>> {
        verbose_println!(ctx, "Running...");
        let start = Instant::now();
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let stdout = io::stdout();
        let mut output = stdout.lock();
        let res = crate::interpret::interpret(p, Streams::new(&mut input, &mut output));
        verbose_println!(ctx, "Ran the program in [{:?}]", start.elapsed());
        Ok(res)
    }

    /// Runs the source code of the context: parses it, interprets it, and
    /// reports a failure if any.
    pub fn run(ctx: &mut Context<'_>) -> Result<()> {
        let parsed = parse(ctx);
        if ctx.has_errors() {
            ctx.reporter.display()?;
        }
        let p = parsed?;
        if let Err(fail) = interpret(ctx, &p)? {
            ctx.report_fail(&fail)?;
            bail!("Program failed: {}", fail.code());
        }
        Ok(())
    }
}

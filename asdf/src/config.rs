//! Defining the interpreter config options.

/// Interpreter configuration.
#[derive(Default)]
pub struct Config<'ctx> {
    /// Source code of the program.
    pub input: &'ctx str,
    /// Name of the file the source code comes from.
    pub filename: Option<&'ctx str>,
    /// Verbose mode: report the duration of each step on `stderr`.
    pub verbose: bool,
    /// Render runtime failures as full diagnostics, with their error code,
    /// instead of the classic `Error during execution` text.
    pub rich_errors: bool,
}

//! Defining the interpreter context.

use codespan_reporting::files::SimpleFile;

use crate::config::Config;
use crate::interpret::Fail;
use crate::reporter::{Diagnostic, Reporter};

/// Prints to `stderr` if the context is in verbose mode.
#[macro_export]
macro_rules! verbose_print {
    ($ctx:expr, $($arg:tt)*) => {
        if $ctx.config.verbose {
            eprint!($($arg)*);
        }
    };
}

/// Prints a line to `stderr` if the context is in verbose mode.
#[macro_export]
macro_rules! verbose_println {
    ($ctx:expr, $($arg:tt)*) => {
        if $ctx.config.verbose {
            eprintln!($($arg)*);
        }
    };
}

/// Interpreter context.
pub struct Context<'ctx> {
    /// Interpreter configuration.
    pub config: Config<'ctx>,
    /// Error reporter.
    pub reporter: Reporter<'ctx>,
    /// File representation, in part for diagnostic reporting.
    pub files: SimpleFile<&'ctx str, &'ctx str>,
}

impl<'ctx> Context<'ctx> {
    /// Creates a new interpreter context.
    pub fn new(config: Config<'ctx>) -> Self {
        let files = SimpleFile::new(config.filename.unwrap_or("unknown file"), config.input);
        Self {
            reporter: Reporter::new(files.clone()),
            config,
            files,
        }
    }

    /// Create a new error diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.reporter.emit(diagnostic);
    }

    /// Was there any errors so far?
    pub fn has_errors(&self) -> bool {
        self.reporter.has_errors()
    }

    /// Reports a runtime failure on `stderr`, in the format selected by the
    /// configuration.
    pub fn report_fail(&self, fail: &Fail) -> anyhow::Result<()> {
        if self.config.rich_errors {
            self.emit(fail.to_diagnostic());
            self.reporter.display()
        } else {
            self.reporter.print(&self.reporter.render_fail(fail))
        }
    }
}

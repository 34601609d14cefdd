//! User-facing error reporting facility.

use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use codespan_reporting::diagnostic::Severity;
use codespan_reporting::files::{Files, SimpleFile};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use crossbeam_queue::SegQueue;

use crate::interpret::Fail;

/// An interpreter diagnostic.
pub type Diagnostic = codespan_reporting::diagnostic::Diagnostic<()>;

lazy_static! {
    /// Terminal configuration.
    static ref TERM_CONFIG: term::Config = term::Config::default();
    /// Standard stream handle.
    static ref STD_STREAM: StandardStream = StandardStream::stderr(color_choice());
}

/// Colors only when `stderr` is a terminal.
fn color_choice() -> ColorChoice {
    if io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Indentation of every line of a classic failure report.
const INDENT: &str = "  ";

/// Collection of diagnostics, ready to be displayed.
pub struct Diagnostics<'ctx> {
    /// Stream to which we will display the diagnostics.
    writer: &'ctx StandardStream,
    /// Terminal configuration.
    config: &'ctx term::Config,
    /// The source code the diagnostics point into.
    files: SimpleFile<&'ctx str, &'ctx str>,
    /// The actual list of diagnostics.
    diagnostics: SegQueue<Diagnostic>,
    /// True iff `self.diagnostics` contains at least one error diagnostic.
    is_error: AtomicBool,
}

impl<'ctx> Diagnostics<'ctx> {
    /// Displays all the diagnostics with nice colors and formatting to the
    /// standard error.
    ///
    /// # Warning
    /// WILL FLUSH/TRASH the diagnostics that are displayed.
    pub fn display(&self) -> anyhow::Result<()> {
        let mut writer = self.writer.lock();
        while let Some(diagnostic) = self.diagnostics.pop() {
            term::emit(&mut writer, self.config, &self.files, &diagnostic)?;
        }
        Ok(())
    }

    /// Pushes a new diagnostic to the list.
    pub fn push(&self, diagnostic: Diagnostic) {
        self.is_error.fetch_or(
            matches!(diagnostic.severity, Severity::Error | Severity::Bug),
            Ordering::Relaxed,
        );
        self.diagnostics.push(diagnostic);
    }

    /// Flushes all diagnostics and returns them, leaving self's own diagnostic
    /// list empty and ready to receive messages.
    #[cfg(test)]
    fn flush(&mut self) -> Diagnostics<'ctx> {
        Diagnostics {
            writer: self.writer,
            config: self.config,
            files: self.files.clone(),
            diagnostics: std::mem::take(&mut self.diagnostics),
            is_error: AtomicBool::new(self.is_error.swap(false, Ordering::SeqCst)),
        }
    }
}

#[cfg(test)]
impl<'ctx> IntoIterator for Diagnostics<'ctx> {
    type IntoIter = ::std::vec::IntoIter<Diagnostic>;
    type Item = Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        let mut res = vec![];
        while let Some(diagnostic) = self.diagnostics.pop() {
            res.push(diagnostic);
        }
        res.into_iter()
    }
}

/// Interpreter reporter.
///
/// Collects and reports any diagnostics emitted while parsing and running a
/// program.
pub struct Reporter<'ctx> {
    /// The actual diagnostics.
    diagnostics: Diagnostics<'ctx>,
}

impl<'ctx> Reporter<'ctx> {
    /// Create a new `Reporter`.
    pub fn new(files: SimpleFile<&'ctx str, &'ctx str>) -> Self {
        Self {
            diagnostics: Diagnostics {
                config: &TERM_CONFIG,
                writer: &STD_STREAM,
                files,
                diagnostics: SegQueue::new(),
                is_error: AtomicBool::new(false),
            },
        }
    }

    /// Create a new error diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Flushes all diagnostics and returns them.
    #[cfg(test)]
    pub fn flush(&mut self) -> Diagnostics<'ctx> {
        self.diagnostics.flush()
    }

    /// Displays all the diagnostics to the `stderr` output.
    pub fn display(&self) -> anyhow::Result<()> {
        self.diagnostics.display()
    }

    /// Was there any errors so far?
    pub fn has_errors(&self) -> bool {
        self.diagnostics.is_error.load(Ordering::SeqCst)
    }

    /// Writes some already rendered text to the `stderr` output.
    pub fn print(&self, text: &str) -> anyhow::Result<()> {
        let mut writer = self.diagnostics.writer.lock();
        writeln!(writer, "{text}")?;
        Ok(())
    }

    /// Renders a runtime failure the classic way: the source lines it spans,
    /// carets under a single-line span, then the indented message.
    ///
    /// Failures without a span only render their message.
    pub fn render_fail(&self, fail: &Fail) -> String {
        let message = fail.to_string();
        let Some(span) = fail.span else {
            return format!("Error during execution: {message}");
        };
        let files = &self.diagnostics.files;
        let (Ok(start), Ok(end)) = (
            files.location((), span.start()),
            files.location((), span.end()),
        ) else {
            return format!("Error during execution: {message}");
        };
        let source = files.source();
        let line_text = |line_index: usize| {
            files
                .line_range((), line_index)
                .map(|range| source[range].trim_end_matches(['\n', '\r']))
                .unwrap_or_default()
        };

        let mut text = String::new();
        if start.line_number == end.line_number {
            let line = start.line_number;
            let gutter = 2 + line.to_string().len().max(4);
            let carets = source[span.range()].chars().count().max(1);
            let _ = write!(text, "\nError during execution of line {line}:\n\n");
            let _ = writeln!(text, "{INDENT}{line:4} | {}", line_text(line - 1));
            let _ = write!(
                text,
                "{INDENT}{}{}\n\n",
                " ".repeat(start.column_number + gutter),
                "^".repeat(carets)
            );
        } else {
            let _ = write!(
                text,
                "Error during execution of lines {} - {}:\n\n",
                start.line_number, end.line_number
            );
            for line in start.line_number..=end.line_number {
                let _ = writeln!(text, "{INDENT}{line:4} | {}", line_text(line - 1));
            }
            text.push('\n');
        }
        let message = message
            .lines()
            .map(|line| format!("{INDENT}{line}"))
            .collect::<Vec<_>>()
            .join("\n");
        text.push_str(&message);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;
    use crate::interpret::Reason;

    fn reporter(source: &'static str) -> Reporter<'static> {
        Reporter::new(SimpleFile::new("test", source))
    }

    #[test]
    fn render_without_span() {
        let fail = Fail::new(Reason::NoEntryPointError("main Function not defined".into()));
        assert_eq!(
            reporter("").render_fail(&fail),
            "Error during execution: main Function not defined"
        );
    }

    #[test]
    fn render_single_line() {
        let source = "def main()\n    foo(42)\n";
        let fail = Fail::new(Reason::UndefinedNameError(
            "call of undefined function: foo".into(),
        ))
        .at(Span::new(15, 22));
        let expected = "\nError during execution of line 2:\n\n\
                        \x20\x20   2 |     foo(42)\n\
                        \x20\x20           ^^^^^^^\n\n\
                        \x20\x20call of undefined function: foo";
        assert_eq!(reporter(source).render_fail(&fail), expected);
    }

    #[test]
    fn render_multi_line() {
        let source = "def main()\n    do\n        x\n";
        let fail = Fail::new(Reason::NotImplementedError("nope".into())).at(Span::new(15, 26));
        let expected = "Error during execution of lines 2 - 3:\n\n\
                        \x20\x20   2 |     do\n\
                        \x20\x20   3 |         x\n\n\
                        \x20\x20nope";
        assert_eq!(reporter(source).render_fail(&fail), expected);
    }

    #[test]
    fn diagnostics_track_errors() {
        let mut reporter = reporter("");
        assert!(!reporter.has_errors());
        reporter.emit(Diagnostic::warning().with_message("careful"));
        assert!(!reporter.has_errors());
        reporter.emit(Diagnostic::error().with_message("broken"));
        assert!(reporter.has_errors());
        let flushed: Vec<_> = reporter.flush().into_iter().collect();
        assert_eq!(flushed.len(), 2);
        assert!(!reporter.has_errors());
    }
}

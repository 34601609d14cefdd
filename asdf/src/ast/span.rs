//! Defining spans, with are markers for sections of code.
//!
//! Really handy to relate some failure or AST node to the actual, original
//! source code.

use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::Label;

/// A span of source code.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct Span(codespan::Span);

impl Span {
    /// Gives an empty span at the start of a source.
    pub const fn initial() -> Self {
        Self(codespan::Span::initial())
    }

    /// Creates a span from byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self(codespan::Span::new(start, end))
    }

    /// Byte offset of the start of the span.
    pub fn start(&self) -> usize {
        self.0.start().to_usize()
    }

    /// Byte offset of the end of the span, exclusive.
    pub fn end(&self) -> usize {
        self.0.end().to_usize()
    }

    /// Byte range covered by the span.
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Returns the `codespan_reporting` label for this span.
    pub fn as_label(&self) -> Label<()> {
        Label::primary((), self.range())
    }

    /// Combine two spans by taking the start of the earlier span and the end of
    /// the later span.
    pub fn merge(self, other: Self) -> Self {
        Self(self.0.merge(other.0))
    }
}

impl From<Span> for Label<()> {
    fn from(span: Span) -> Self {
        span.as_label()
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(span: pest::Span<'_>) -> Self {
        let start = u32::try_from(span.start()).expect("Code position is out of bounds");
        let end = u32::try_from(span.end()).expect("Code position is out of bounds");
        Self(codespan::Span::new(start, end))
    }
}

impl Default for Span {
    fn default() -> Self {
        Span::initial()
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.0.start(), self.0.end())
    }
}

//! Parsing bodies, and defining their representation in the AST.

use pest::iterators::Pair;

use super::{Context, Parsable, Span, Stmt};
use crate::grammar::*;

/// An indented body: the statements of a function, a `do` block or a
/// conditional branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    /// List of consecutive statements.
    pub stmts: Vec<Stmt>,
    /// Codespan.
    pub span: Span,
}

/// Creates a body out of a list of statements.
pub fn body(stmts: impl IntoIterator<Item = Stmt>) -> Body {
    Body {
        stmts: stmts.into_iter().collect(),
        span: Span::default(),
    }
}

impl From<Vec<Stmt>> for Body {
    fn from(stmts: Vec<Stmt>) -> Self {
        body(stmts)
    }
}

impl From<Stmt> for Body {
    fn from(stmt: Stmt) -> Self {
        body([stmt])
    }
}

impl<'ctx> Parsable<'ctx, Pair<'ctx, Rule>> for Body {
    fn parse(pair: Pair<'ctx, Rule>, ctx: &mut Context<'ctx>) -> Self {
        assert_eq!(pair.as_rule(), Rule::body, "parser internal error");
        let span = Span::from(pair.as_span());
        let stmts = pair.into_inner().map(|stmt| ctx.parse(stmt)).collect();
        Body { stmts, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[parses("    a\n\n    # comment\n    b = 2  # other comment\n      \n    c(b)\nd" as body, leaving "d")]
    #[test]
    fn blank_lines_and_comments(body: Body) {
        assert_eq!(body.stmts.len(), 3);
        assert!(body.stmts.iter().all(|stmt| stmt.as_line().is_some()));
    }

    #[parses("\tx\n\ty\n" as body)]
    #[test]
    fn tab_indentation(body: Body) {
        assert_eq!(body.stmts.len(), 2);
    }

    #[parses("  x\n  do\n    y\n    z\n  w\n" as body)]
    #[test]
    fn nested_body(body: Body) {
        assert_eq!(body.stmts.len(), 3);
        assert_eq!(body.stmts[1].as_do().unwrap().stmts.len(), 2);
    }
}

//! Parsing statements, and defining their representation in the AST.

use pest::iterators::Pair;

use super::{Body, Context, Expr, Parsable, Span};
use crate::grammar::*;

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    /// Kind of statement.
    pub kind: StmtKind,
    /// Codespan.
    pub span: Span,
}

/// One `if`/`elif` branch: a condition and the body run when it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Condition.
    pub cond: Expr,
    /// Body.
    pub body: Body,
}

/// Kind of statement.
///
/// Rule: all variants end with a capital `S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    /// An expression on its own line.
    LineS(Expr),
    /// A `do` block, run in the enclosing environment.
    DoS(Body),
    /// An `if`/`elif`/`else` chain.
    IfS {
        /// The `if` branch first, then the `elif` branches, in source order.
        branches: Vec<Branch>,
        /// Optional `else` body.
        else_body: Option<Body>,
    },
}

use StmtKind::*;

#[cfg(test)]
impl Stmt {
    /// Sees this statement as an expression.
    ///
    /// # Errors
    /// Returns `None` if the statement is not a line statement.
    pub fn as_line(&self) -> Option<&Expr> {
        if let LineS(expr) = &self.kind {
            Some(expr)
        } else {
            None
        }
    }

    /// Sees this statement as a `do` block.
    ///
    /// # Errors
    /// Returns `None` if the statement is not a `do` block.
    pub fn as_do(&self) -> Option<&Body> {
        if let DoS(body) = &self.kind {
            Some(body)
        } else {
            None
        }
    }

    /// Sees this statement as a conditional chain.
    ///
    /// Returns: `(branches, else_body)`.
    ///
    /// # Errors
    /// Returns `None` if the statement is not an `if` statement.
    pub fn as_if(&self) -> Option<(&[Branch], Option<&Body>)> {
        if let IfS {
            branches,
            else_body,
        } = &self.kind
        {
            Some((branches, else_body.as_ref()))
        } else {
            None
        }
    }
}

impl From<StmtKind> for Stmt {
    fn from(kind: StmtKind) -> Self {
        Stmt {
            kind,
            span: Span::default(),
        }
    }
}

impl From<Expr> for Stmt {
    fn from(expr: Expr) -> Self {
        Stmt {
            span: expr.span,
            kind: LineS(expr),
        }
    }
}

/// Parses a condition and its body out of an `if` or `elif` node.
fn branch<'ctx>(pair: Pair<'ctx, Rule>, ctx: &mut Context<'ctx>) -> Branch {
    let mut pairs = pair.into_inner();
    let cond = ctx.parse(consume!(pairs, Rule::line_stmt));
    let body = ctx.parse(consume!(pairs, Rule::body));
    Branch { cond, body }
}

impl<'ctx> Parsable<'ctx, Pair<'ctx, Rule>> for Stmt {
    fn parse(pair: Pair<'ctx, Rule>, ctx: &mut Context<'ctx>) -> Self {
        assert_eq!(pair.as_rule(), Rule::stmt, "parser internal error");
        let pair = consume!(pair.into_inner());
        let span = Span::from(pair.as_span());
        let kind = match pair.as_rule() {
            Rule::line_stmt => LineS(ctx.parse(pair)),
            Rule::do_stmt => DoS(ctx.parse(consume!(pair.into_inner(), Rule::body))),
            Rule::if_stmt => {
                let mut pairs = pair.into_inner();
                let cond = ctx.parse(consume!(pairs, Rule::line_stmt));
                let body = ctx.parse(consume!(pairs, Rule::body));
                let mut branches = vec![Branch { cond, body }];
                for elif in consume!(pairs, Rule::elifs).into_inner() {
                    branches.push(branch(elif, ctx));
                }
                let else_body = consume!(pairs, Rule::else_stmt)
                    .into_inner()
                    .next()
                    .map(|body| ctx.parse(body));
                IfS {
                    branches,
                    else_body,
                }
            }
            rule => panic!("parser internal error: expected statement, found {rule:?}"),
        };
        Stmt { kind, span }
    }
}

/// Shortcut for a line statement.
pub fn line(expr: Expr) -> Stmt {
    expr.into()
}

/// Shortcut for a `do` block statement.
pub fn do_block(body: impl Into<Body>) -> Stmt {
    DoS(body.into()).into()
}

/// Shortcut for an `if`/`elif`/`else` chain, out of `(condition, body)` pairs.
pub fn if_chain<B: Into<Body>>(
    branches: impl IntoIterator<Item = (Expr, B)>,
    else_body: Option<B>,
) -> Stmt {
    IfS {
        branches: branches
            .into_iter()
            .map(|(cond, body)| Branch {
                cond,
                body: body.into(),
            })
            .collect(),
        else_body: else_body.map(Into::into),
    }
    .into()
}

//! Parser Abstract Syntax Tree for the language.
//!
//! Each node in the tree = one file.

/// Takes the next pair out of a pairs iterator.
///
/// When a rule is given, checks that the pair matches it.
macro_rules! consume {
    ($pairs:expr) => {
        $pairs
            .next()
            .expect("parser internal error: missing node")
    };
    ($pairs:expr, $rule:expr) => {{
        let pair = consume!($pairs);
        assert_eq!(pair.as_rule(), $rule, "parser internal error");
        pair
    }};
}

pub mod body;
pub mod expr;
pub mod fun;
pub mod ident;
pub mod program;
pub mod span;
pub mod stmt;

use anyhow::{Context as AnyhowContext, Result};
pub use body::{body, Body};
pub use expr::{assign, call, fmt, int, number, raw, var, Expr, ExprKind, NumberKind, Quote, StrLit};
pub use fun::{fun, FunDef};
pub use ident::Ident;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest::Parser;
pub use program::Program;
pub use span::Span;
pub use stmt::{do_block, if_chain, line, Branch, Stmt, StmtKind};

use crate::codes::PARSER_ERROR;
use crate::context::Context;
use crate::grammar::{rule_name, Grammar, Rule};
use crate::reporter::Diagnostic;

/// Can be parsed from elements of `T`.
pub trait Parsable<'ctx, T> {
    /// Parses `tokens` into `Self` using `ctx`.
    fn parse(tokens: T, ctx: &mut Context<'ctx>) -> Self;
}

impl<'ctx> Context<'ctx> {
    /// Parses `tokens`.
    #[must_use]
    pub fn parse<U, T: Parsable<'ctx, U>>(&mut self, pair: U) -> T {
        T::parse(pair, self)
    }
}

/// Parses the whole input of the context as a program.
pub fn parse_file(ctx: &mut Context<'_>) -> Result<Program> {
    if ctx.config.input.trim().is_empty() {
        ctx.emit(
            Diagnostic::error()
                .with_code(PARSER_ERROR)
                .with_message("empty input"),
        );
        bail!("Parsing errors found.");
    }
    parse_rule(ctx, Rule::program)
}

/// Parses the whole input of the context according to grammar rule `rule`.
///
/// Syntax errors are emitted as diagnostics on the context's reporter.
pub fn parse_rule<'ctx, T>(ctx: &mut Context<'ctx>, rule: Rule) -> Result<T>
where
    T: Parsable<'ctx, Pair<'ctx, Rule>>,
{
    let input = ctx.config.input;
    match Grammar::parse(rule, input) {
        Ok(mut pairs) => {
            let pair = pairs.next().context("Parser grammar error")?;
            Ok(ctx.parse(pair))
        }
        Err(err) => {
            let err = err.renamed_rules(rule_name);
            let range = match err.location {
                InputLocation::Pos(pos) => pos..pos,
                InputLocation::Span((start, end)) => start..end,
            };
            ctx.emit(
                Diagnostic::error()
                    .with_code(PARSER_ERROR)
                    .with_message("syntax error")
                    .with_labels(vec![codespan_reporting::diagnostic::Label::primary(
                        (),
                        range,
                    )
                    .with_message(err.variant.message())]),
            );
            bail!("Parsing errors found.")
        }
    }
}

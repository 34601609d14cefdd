//! Parsing functions, and defining their representation in the AST.

use pest::iterators::Pair;

use super::{Body, Context, Ident, Parsable, Span};
use crate::grammar::*;

/// A function definition in the parser AST.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunDef {
    /// Name of that function.
    pub name: Ident,
    /// Names of the parameters, in order.
    pub params: Vec<Ident>,
    /// Body of the function.
    pub body: Body,
    /// Codespan.
    pub span: Span,
}

impl FunDef {
    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Shortcut to define a function.
pub fn fun<P: Into<Ident>>(
    name: impl Into<Ident>,
    params: impl IntoIterator<Item = P>,
    body: impl Into<Body>,
) -> FunDef {
    FunDef {
        name: name.into(),
        params: params.into_iter().map(Into::into).collect(),
        body: body.into(),
        span: Span::default(),
    }
}

impl<'ctx> Parsable<'ctx, Pair<'ctx, Rule>> for FunDef {
    fn parse(pair: Pair<'ctx, Rule>, ctx: &mut Context<'ctx>) -> Self {
        assert_eq!(pair.as_rule(), Rule::function_def, "parser internal error");
        let span = Span::from(pair.as_span());
        let mut pairs = pair.into_inner();

        let name = ctx.parse(consume!(pairs, Rule::name));
        let params = consume!(pairs, Rule::params)
            .into_inner()
            .map(|param| ctx.parse(param))
            .collect();
        let body = ctx.parse(consume!(pairs, Rule::body));

        FunDef {
            name,
            params,
            body,
            span,
        }
    }
}

//! Parsing identifiers, and defining their representation in the AST.

use std::fmt;

use pest::iterators::Pair;

use super::{Context, Parsable, Span};
use crate::grammar::*;

/// A name in the code: a function, parameter or variable name.
#[derive(Clone, Default)]
pub struct Ident {
    /// The name itself.
    pub name: String,
    /// Codespan.
    pub span: Span,
}

impl Ident {
    /// See the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            span: Span::default(),
        }
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Self {
            name,
            span: Span::default(),
        }
    }
}

impl PartialEq for Ident {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Ident {}

impl PartialEq<str> for Ident {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Ident {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl<'ctx> Parsable<'ctx, Pair<'ctx, Rule>> for Ident {
    fn parse(pair: Pair<'ctx, Rule>, _ctx: &mut Context<'ctx>) -> Self {
        assert!(matches!(pair.as_rule(), Rule::name));
        Ident {
            name: pair.as_str().to_owned(),
            span: pair.as_span().into(),
        }
    }
}

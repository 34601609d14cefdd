//! Parsing expressions, and defining their representation in the AST.
//!
//! Expressions are what the grammar calls line statements: calls,
//! assignments and atoms.

use std::fmt;

use num_bigint::BigInt;
use pest::iterators::Pair;

use super::{Context, Ident, Parsable, Span};
use crate::grammar::*;

/// Delimiter of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// `'…'`: raw string, taken verbatim.
    Single,
    /// `"…"`: format string, with `{name}` placeholders.
    Double,
}

/// A string literal, delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrLit {
    /// Content between the delimiters, without escape processing.
    pub content: String,
    /// Delimiter.
    pub quote: Quote,
    /// Whether the delimiters are tripled.
    pub long: bool,
}

impl StrLit {
    /// Is it a format string?
    pub fn is_format(&self) -> bool {
        self.quote == Quote::Double
    }

    /// The literal as it appears in the source code.
    pub fn source_form(&self) -> String {
        let quote = match (self.quote, self.long) {
            (Quote::Single, false) => "'",
            (Quote::Double, false) => "\"",
            (Quote::Single, true) => "'''",
            (Quote::Double, true) => "\"\"\"",
        };
        format!("{quote}{}{quote}", self.content)
    }
}

/// Syntactic kind of a number literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// `42`, `1_000`.
    Dec,
    /// `0x2a`.
    Hex,
    /// `0o52`.
    Oct,
    /// `0b101010`.
    Bin,
    /// `4.2`, `1e3`.
    Float,
    /// `42j`.
    Imag,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumberKind::Dec => "decimal number",
            NumberKind::Hex => "hexadecimal number",
            NumberKind::Oct => "octal number",
            NumberKind::Bin => "binary number",
            NumberKind::Float => "float number",
            NumberKind::Imag => "imaginary number",
        };
        write!(f, "{name}")
    }
}

/// An expression in the parser AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    /// Kind of expression.
    pub kind: ExprKind,
    /// Codespan.
    pub span: Span,
}

/// Kind of an expression.
///
/// Rule: all variants end with a capital `E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// A function call.
    CallE {
        /// Name of the function.
        name: Ident,
        /// Arguments to that function.
        args: Vec<Expr>,
    },
    /// An assignment, that also yields the assigned value.
    AssignE(Ident, Box<Expr>),
    /// A name used as a value.
    NameE(Ident),
    /// A string literal.
    StringE(StrLit),
    /// A number literal, as written in the source.
    NumberE(NumberKind, String),
}

use ExprKind::*;

#[cfg(test)]
impl Expr {
    /// Sees this expression as a call.
    ///
    /// Returns: `(name, args)`.
    ///
    /// # Errors
    /// Returns `None` if the expression is not a call.
    pub fn as_call(&self) -> Option<(&Ident, &[Expr])> {
        if let CallE { name, args } = &self.kind {
            Some((name, args))
        } else {
            None
        }
    }

    /// Sees this expression as an assignment.
    ///
    /// # Errors
    /// Returns `None` if the expression is not an assignment.
    pub fn as_assign(&self) -> Option<(&Ident, &Expr)> {
        if let AssignE(name, rhs) = &self.kind {
            Some((name, rhs))
        } else {
            None
        }
    }

    /// Sees this expression as a name.
    ///
    /// # Errors
    /// Returns `None` if the expression is not a name.
    pub fn as_name(&self) -> Option<&Ident> {
        if let NameE(name) = &self.kind {
            Some(name)
        } else {
            None
        }
    }

    /// Sees this expression as a string literal.
    ///
    /// # Errors
    /// Returns `None` if the expression is not a string.
    pub fn as_string(&self) -> Option<&StrLit> {
        if let StringE(lit) = &self.kind {
            Some(lit)
        } else {
            None
        }
    }

    /// Sees this expression as a number literal.
    ///
    /// # Errors
    /// Returns `None` if the expression is not a number.
    pub fn as_number(&self) -> Option<(NumberKind, &str)> {
        if let NumberE(kind, text) = &self.kind {
            Some((*kind, text))
        } else {
            None
        }
    }
}

impl From<ExprKind> for Expr {
    fn from(kind: ExprKind) -> Self {
        Expr {
            kind,
            span: Span::default(),
        }
    }
}

/// Shortcut to create an `Expr` which is just a variable, based on its name.
pub fn var(name: impl Into<Ident>) -> Expr {
    NameE(name.into()).into()
}

/// Shortcut to create a constant integer `Expr` based on some integer value.
pub fn int(value: impl Into<BigInt>) -> Expr {
    NumberE(NumberKind::Dec, value.into().to_string()).into()
}

/// Shortcut to create a number literal of any kind.
pub fn number(kind: NumberKind, text: impl ToString) -> Expr {
    NumberE(kind, text.to_string()).into()
}

/// Shortcut to create a single-quoted string, taken verbatim.
pub fn raw(content: impl ToString) -> Expr {
    StringE(StrLit {
        content: content.to_string(),
        quote: Quote::Single,
        long: false,
    })
    .into()
}

/// Shortcut to create a double-quoted format string.
pub fn fmt(content: impl ToString) -> Expr {
    StringE(StrLit {
        content: content.to_string(),
        quote: Quote::Double,
        long: false,
    })
    .into()
}

/// Shortcut to create a call `Expr`.
pub fn call(name: impl Into<Ident>, args: impl IntoIterator<Item = Expr>) -> Expr {
    CallE {
        name: name.into(),
        args: args.into_iter().collect(),
    }
    .into()
}

/// Shortcut to create an assignment `Expr`.
pub fn assign(name: impl Into<Ident>, rhs: Expr) -> Expr {
    AssignE(name.into(), Box::new(rhs)).into()
}

impl From<u64> for Expr {
    fn from(value: u64) -> Self {
        int(value)
    }
}

impl From<&str> for Expr {
    fn from(content: &str) -> Self {
        raw(content)
    }
}

/// Parses the token of a string literal.
fn string_lit(pair: Pair<Rule>) -> StrLit {
    let long = matches!(pair.as_rule(), Rule::long_string);
    let text = pair.as_str();
    let delimiter = if long { 3 } else { 1 };
    let quote = if text.starts_with('"') {
        Quote::Double
    } else {
        Quote::Single
    };
    StrLit {
        content: text[delimiter..text.len() - delimiter].to_owned(),
        quote,
        long,
    }
}

impl<'ctx> Parsable<'ctx, Pair<'ctx, Rule>> for Expr {
    fn parse(pair: Pair<'ctx, Rule>, ctx: &mut Context<'ctx>) -> Self {
        let span = Span::from(pair.as_span());
        let kind = match pair.as_rule() {
            Rule::line_stmt | Rule::thing => {
                let mut pairs = pair.into_inner();
                return ctx.parse(consume!(pairs));
            }
            Rule::funccall => {
                let mut pairs = pair.into_inner();
                let name = ctx.parse(consume!(pairs, Rule::name));
                let args = consume!(pairs, Rule::comma_list)
                    .into_inner()
                    .map(|arg| ctx.parse(arg))
                    .collect();
                CallE { name, args }
            }
            Rule::assignment => {
                let mut pairs = pair.into_inner();
                let name = ctx.parse(consume!(pairs, Rule::name));
                let rhs: Expr = ctx.parse(consume!(pairs, Rule::line_stmt));
                AssignE(name, Box::new(rhs))
            }
            Rule::name => NameE(ctx.parse(pair)),
            Rule::string | Rule::long_string => StringE(string_lit(pair)),
            Rule::dec_number => NumberE(NumberKind::Dec, pair.as_str().to_owned()),
            Rule::hex_number => NumberE(NumberKind::Hex, pair.as_str().to_owned()),
            Rule::oct_number => NumberE(NumberKind::Oct, pair.as_str().to_owned()),
            Rule::bin_number => NumberE(NumberKind::Bin, pair.as_str().to_owned()),
            Rule::float_number => NumberE(NumberKind::Float, pair.as_str().to_owned()),
            Rule::imag_number => NumberE(NumberKind::Imag, pair.as_str().to_owned()),
            rule => panic!("parser internal error: expected expression, found {rule:?}"),
        };
        Expr { kind, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[parses("print('hello', x, 42,)" as line_stmt)]
    #[test]
    fn call_with_trailing_comma(expr: Expr) {
        let (name, args) = expr.as_call().unwrap();
        assert_eq!(name, "print");
        assert_eq!(args.len(), 3);
        assert_eq!(args[0].as_string().unwrap().content, "hello");
        assert_eq!(args[1].as_name().unwrap(), "x");
        assert_eq!(args[2].as_number().unwrap(), (NumberKind::Dec, "42"));
        assert_eq!(expr.span, Span::new(0, 22));
    }

    #[parses("f()" as line_stmt)]
    #[test]
    fn call_without_args(expr: Expr) {
        let (name, args) = expr.as_call().unwrap();
        assert_eq!(name, "f");
        assert!(args.is_empty());
    }

    #[parses("x = y = add(1, 2)" as line_stmt)]
    #[test]
    fn chained_assignment(expr: Expr) {
        let (x, rhs) = expr.as_assign().unwrap();
        assert_eq!(x, "x");
        let (y, rhs) = rhs.as_assign().unwrap();
        assert_eq!(y, "y");
        assert_eq!(rhs.as_call().unwrap().0, "add");
    }

    #[parses("\"the answer is {x}\"" as line_stmt)]
    #[test]
    fn format_string(expr: Expr) {
        let lit = expr.as_string().unwrap();
        assert_eq!(lit.content, "the answer is {x}");
        assert!(lit.is_format());
        assert!(!lit.long);
    }

    #[parses("'''it's\nlong'''" as line_stmt)]
    #[test]
    fn long_raw_string(expr: Expr) {
        let lit = expr.as_string().unwrap();
        assert_eq!(lit.content, "it's\nlong");
        assert!(!lit.is_format());
        assert!(lit.long);
        assert_eq!(lit.source_form(), "'''it's\nlong'''");
    }

    #[parses("'don\\'t'" as line_stmt)]
    #[test]
    fn escaped_quote_is_kept(expr: Expr) {
        assert_eq!(expr.as_string().unwrap().content, "don\\'t");
    }

    #[parses("1_000" as line_stmt)]
    #[test]
    fn decimal_with_separators(expr: Expr) {
        assert_eq!(expr.as_number().unwrap(), (NumberKind::Dec, "1_000"));
    }

    #[test]
    fn number_kinds() -> anyhow::Result<()> {
        use crate::ast::parse_rule;
        use crate::config::Config;
        for (input, kind) in [
            ("0x2A", NumberKind::Hex),
            ("0o52", NumberKind::Oct),
            ("0b101010", NumberKind::Bin),
            ("4.2", NumberKind::Float),
            (".5e3", NumberKind::Float),
            ("1e3", NumberKind::Float),
            ("42j", NumberKind::Imag),
            ("0", NumberKind::Dec),
        ] {
            let config = Config {
                input,
                ..Config::default()
            };
            let mut ctx = Context::new(config);
            let expr: Expr = parse_rule(&mut ctx, Rule::line_stmt)?;
            assert_eq!(expr.as_number(), Some((kind, input)), "{input}");
        }
        Ok(())
    }
}

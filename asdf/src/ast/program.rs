//! Parsing programs, and defining their representation in the AST.

use pest::iterators::Pair;

use super::{Context, FunDef, Parsable, Span};
use crate::grammar::*;

/// A program: a list of function definitions, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Functions defined in the program.
    pub funs: Vec<FunDef>,
    /// Codespan.
    pub span: Span,
}

impl Program {
    /// Looks up a function by name.
    pub fn get(&self, name: &str) -> Option<&FunDef> {
        self.funs.iter().find(|f| f.name == name)
    }
}

impl From<Vec<FunDef>> for Program {
    fn from(funs: Vec<FunDef>) -> Self {
        Program {
            funs,
            span: Span::default(),
        }
    }
}

impl From<FunDef> for Program {
    fn from(f: FunDef) -> Self {
        Program::from(vec![f])
    }
}

impl<'ctx> Parsable<'ctx, Pair<'ctx, Rule>> for Program {
    fn parse(pair: Pair<'ctx, Rule>, ctx: &mut Context<'ctx>) -> Self {
        assert_eq!(pair.as_rule(), Rule::program, "parser internal error");
        let span = Span::from(pair.as_span());
        let mut funs = vec![];
        for pair in pair.into_inner() {
            match pair.as_rule() {
                Rule::function_def => funs.push(ctx.parse(pair)),
                Rule::EOI => (),
                rule => panic!("parser internal error: unexpected rule {rule:?}"),
            }
        }
        Program { funs, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[parses("# header\n\ndef main()\n    print(f(21))\n\n\ndef f(x)\n    mul(x, 2)\n# footer" as program)]
    #[test]
    fn two_functions(p: Program) {
        assert_eq!(p.funs.len(), 2);
        assert_eq!(p.funs[0].name, "main");
        assert_eq!(p.get("f").unwrap().arity(), 1);
        assert!(p.get("g").is_none());
    }

    #[parses("def main():\n    if x:\n        a\n    b\n" as program)]
    #[test]
    fn dedent_closes_branch(p: Program) {
        let main = &p.funs[0];
        assert_eq!(main.body.stmts.len(), 2);
        let (branches, else_body) = main.body.stmts[0].as_if().unwrap();
        assert_eq!(branches[0].body.stmts.len(), 1);
        assert!(else_body.is_none());
    }
}

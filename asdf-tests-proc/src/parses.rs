use proc_macro::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, Error, Ident, LitStr, Result, Token};

use crate::one_arg::OneArgFn;

/// `"source" as rule`, optionally followed by `, leaving "rest"` when the rule
/// is expected to stop before the end of the source.
struct ParseAttr {
    input_str: LitStr,
    rule: Ident,
    rest: Option<LitStr>,
}

impl Parse for ParseAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let input_str = input.parse()?;
        input.parse::<Token![as]>()?;
        let rule = input.parse()?;
        let rest = if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            let keyword: Ident = input.parse()?;
            if keyword != "leaving" {
                return Err(Error::new(keyword.span(), "expected `leaving \"rest\"`"));
            }
            Some(input.parse()?)
        } else {
            None
        };
        Ok(Self {
            input_str,
            rule,
            rest,
        })
    }
}

pub fn parses(attr: TokenStream, item: TokenStream) -> TokenStream {
    let ParseAttr {
        input_str,
        rule,
        rest,
    } = parse_macro_input!(attr as ParseAttr);
    let OneArgFn {
        name,
        attrs,
        body,
        arg_name,
        arg_ty,
    } = parse_macro_input!(item as OneArgFn);
    let rest = rest.map(|lit| lit.value()).unwrap_or_default();

    quote! {
        #(#attrs)*
        fn #name() -> ::anyhow::Result<()> {
            use ::pest::Parser;
            use crate::ast::parse_rule;
            use crate::grammar::{Grammar, Rule};
            let input = #input_str;

            let config = crate::config::Config { input, ..::std::default::Default::default() };
            let mut ctx = crate::Context::new(config);

            let #arg_name: #arg_ty = match parse_rule(&mut ctx, Rule::#rule) {
                Ok(el) => el,
                Err(err) => {
                    ctx.reporter.display()?;
                    return Err(err);
                }
            };
            eprintln!("Parsed expression: {:?}", #arg_name);

            // A rule may match a prefix only: check what it left behind
            let end = Grammar::parse(Rule::#rule, input)?
                .next()
                .map_or(0, |pair| pair.as_span().end());
            ::anyhow::ensure!(
                input[end..].trim_end() == #rest,
                "rule `{}` left {:?} unparsed",
                stringify!(#rule),
                &input[end..]
            );

            #body
            Ok(())
        }
    }
    .into()
}

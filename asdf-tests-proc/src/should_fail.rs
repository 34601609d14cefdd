use proc_macro::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Attribute, Block, Error, Expr, Ident, ItemFn, Result, Token};

struct ShouldFailAttr {
    expected_errors: Punctuated<Expr, Token![,]>,
}

impl Parse for ShouldFailAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let expected_errors = Punctuated::parse_terminated(input)?;
        Ok(Self { expected_errors })
    }
}

struct ShouldFailFn {
    name: Ident,
    attrs: Vec<Attribute>,
    program: Block,
}

impl Parse for ShouldFailFn {
    fn parse(input: ParseStream) -> Result<Self> {
        let f: ItemFn = input.parse()?;
        if !f.sig.inputs.is_empty() {
            return Err(Error::new(f.sig.inputs.span(), "expected no arguments"));
        }
        Ok(Self {
            name: f.sig.ident,
            attrs: f.attrs,
            program: *f.block,
        })
    }
}

pub fn should_fail(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = parse_macro_input!(attr as ShouldFailAttr);
    let item = parse_macro_input!(item as ShouldFailFn);

    let ShouldFailAttr { expected_errors } = attr;
    let ShouldFailFn {
        name,
        attrs,
        program,
    } = item;

    quote! {
        #(#attrs)*
        fn #name() -> ::anyhow::Result<()> {
            let p: ::asdf_lib::ast::Program = #program;
            match ::asdf_lib::execute(&p, "") {
                Err(fail) => {
                    let code = fail.code();
                    let expected: &[&str] = &[#expected_errors];
                    if expected.contains(&code) {
                        Ok(())
                    } else {
                        ::anyhow::bail!("Error code mismatch. Expected {expected:?}, got {code} ({fail})");
                    }
                }
                Ok(output) => {
                    ::anyhow::bail!("Program should fail, but printed {output:?}");
                }
            }
        }
    }
    .into()
}

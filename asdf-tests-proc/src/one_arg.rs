use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Attribute, Block, Error, FnArg, Ident, ItemFn, Pat, Result, Type};

/// A test function taking exactly one argument, which the generated test
/// binds before running the body.
pub struct OneArgFn {
    pub name: Ident,
    pub attrs: Vec<Attribute>,
    pub body: Block,
    pub arg_name: Ident,
    pub arg_ty: Type,
}

impl Parse for OneArgFn {
    fn parse(input: ParseStream) -> Result<Self> {
        let f: ItemFn = input.parse()?;
        let mut inputs = f.sig.inputs.iter();
        let (Some(arg), None) = (inputs.next(), inputs.next()) else {
            return Err(Error::new(
                f.sig.inputs.span(),
                format!(
                    "expected exactly one argument, found {} in {}",
                    f.sig.inputs.len(),
                    f.sig.ident
                ),
            ));
        };
        let FnArg::Typed(arg) = arg else {
            return Err(Error::new(arg.span(), "argument may not be a receiver"));
        };
        let Pat::Ident(arg_name) = &*arg.pat else {
            return Err(Error::new(arg.pat.span(), "argument must be an identifier"));
        };
        Ok(Self {
            arg_name: arg_name.ident.clone(),
            arg_ty: (*arg.ty).clone(),
            name: f.sig.ident,
            attrs: f.attrs,
            body: *f.block,
        })
    }
}

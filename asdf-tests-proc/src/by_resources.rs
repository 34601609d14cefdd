use std::path::{Path, PathBuf};

use glob::glob;
use proc_macro::TokenStream;
use syn::{parse_macro_input, Error, LitStr};

use crate::one_arg::OneArgFn;

/// Name of the test generated for `path`: the file stem, as an identifier.
fn test_suffix(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("no file name in {}", path.display()))
        .to_string_lossy()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

pub fn by_resources(attr: TokenStream, item: TokenStream) -> TokenStream {
    let pattern = parse_macro_input!(attr as LitStr);
    let OneArgFn {
        name,
        attrs,
        body,
        arg_name,
        arg_ty,
    } = parse_macro_input!(item as OneArgFn);

    // The pattern is relative to the crate under test, wherever cargo runs from
    let root = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let full_pattern = Path::new(&root).join(pattern.value());
    let mut paths: Vec<PathBuf> = match glob(&full_pattern.to_string_lossy()) {
        Ok(entries) => entries.filter_map(|entry| entry.ok()).collect(),
        Err(err) => return Error::new(pattern.span(), err).to_compile_error().into(),
    };
    if paths.is_empty() {
        let msg = format!("no resource matches {}", full_pattern.display());
        return Error::new(pattern.span(), msg).to_compile_error().into();
    }
    paths.sort();

    let tests = paths.iter().map(|path| {
        let test_name = format_ident!("{}__{}", name, test_suffix(path));
        let path = path.display().to_string();
        quote! {
            #(#attrs)*
            #[allow(non_snake_case)]
            fn #test_name() -> ::anyhow::Result<()> {
                // Rebuild the tests when the resource changes
                const _: &str = include_str!(#path);
                let #arg_name: #arg_ty = #path.into();
                #body
                Ok(())
            }
        }
    });

    quote! {
        #(#tests)*
    }
    .into()
}

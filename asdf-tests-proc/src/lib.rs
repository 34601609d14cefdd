extern crate proc_macro;
use proc_macro::TokenStream;

#[macro_use]
extern crate quote;

mod by_resources;
mod one_arg;
mod parses;
mod should_fail;

/// Turns a function building a program into a test that runs it and checks
/// its output.
#[proc_macro_attribute]
pub fn asdf_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    asdf_test::asdf_test(attr, item)
}

/// Turns a function building a program into a test that checks that it
/// fails with one of the given error codes.
#[proc_macro_attribute]
pub fn should_fail(attr: TokenStream, item: TokenStream) -> TokenStream {
    should_fail::should_fail(attr, item)
}

/// Parses a string according to a grammar rule and hands the result to the
/// test function.
///
/// The rule must consume the whole string, up to trailing whitespace, unless
/// the expected leftover is given with `leaving "rest"`.
#[proc_macro_attribute]
pub fn parses(attr: TokenStream, item: TokenStream) -> TokenStream {
    parses::parses(attr, item)
}

/// Generates one test per file matching the glob pattern.
#[proc_macro_attribute]
pub fn by_resources(attr: TokenStream, item: TokenStream) -> TokenStream {
    by_resources::by_resources(attr, item)
}

//! Grammar of the language, derived by `pest` from `grammar.pest`.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Parser generated from the grammar file.
#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct Grammar;

/// Human-readable name of a grammar rule, for parser diagnostics.
pub fn rule_name(rule: &Rule) -> String {
    match rule {
        Rule::EOI => "end of input",
        Rule::program => "program",
        Rule::function_def => "function definition",
        Rule::params => "parameters",
        Rule::body => "indented body",
        Rule::stmt => "statement",
        Rule::do_stmt => "`do` block",
        Rule::if_stmt => "`if` statement",
        Rule::elifs | Rule::elif_stmt => "`elif` branch",
        Rule::else_stmt => "`else` branch",
        Rule::line_stmt | Rule::thing => "expression",
        Rule::funccall => "function call",
        Rule::comma_list => "arguments",
        Rule::assignment => "assignment",
        Rule::name => "name",
        Rule::long_string | Rule::string => "string",
        Rule::hex_number
        | Rule::oct_number
        | Rule::bin_number
        | Rule::imag_number
        | Rule::float_number
        | Rule::dec_number => "number",
        #[allow(unreachable_patterns)]
        _ => "token",
    }
    .to_string()
}

//! Examples.

mod branching;
mod counting;
mod factorial;
mod format;
mod hello;

pub use branching::*;
pub use counting::*;
pub use factorial::*;
pub use format::*;
pub use hello::*;

pub use crate::ast::*;

/// Shortcut for a `main` function without parameters.
pub fn main(stmts: Vec<Stmt>) -> FunDef {
    fun("main", Vec::<&str>::new(), stmts)
}

/// Shortcut for a call to `print` as a statement.
pub fn print(args: impl IntoIterator<Item = Expr>) -> Stmt {
    line(call("print", args))
}

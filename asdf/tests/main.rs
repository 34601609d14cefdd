//! Integration tests.

#[macro_use]
extern crate asdf_tests_proc;

pub(crate) mod exec;
pub(crate) mod failures;
pub(crate) mod interpret;

pub use asdf_lib::ast::*;
use asdf_lib::examples;

use super::*;

use asdf_lib::codes::*;

mod calls;
mod names;
mod values;

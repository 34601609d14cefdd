use super::*;

mod branching;
mod counting;
mod factorial;
mod format;
mod hello_world;
mod scoping;

//! Format strings.

use super::*;

/// Interpolates a variable in a string.
pub fn the_answer() -> Program {
    main(vec![
        line(assign("x", int(42))),
        print([fmt("the answer is {x}")]),
    ])
    .into()
}

/// Mixes format strings, raw strings and escaped braces.
pub fn braces() -> Program {
    main(vec![
        line(assign("name", raw("asdf"))),
        print([fmt("{{name}} is {name}"), raw("{name}")]),
    ])
    .into()
}

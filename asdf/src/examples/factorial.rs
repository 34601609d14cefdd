//! Factorial of the integer given on the standard input... well, of its length.

use super::*;

/// Factorial function, with an `if`/`else` chain.
pub fn factorial_fn() -> FunDef {
    fun(
        "fact",
        ["n"],
        vec![if_chain(
            [(
                call("leq", [var("n"), int(1)]),
                vec![line(int(1))],
            )],
            Some(vec![line(call(
                "mul",
                [var("n"), call("fact", [call("sub", [var("n"), int(1)])])],
            ))]),
        )],
    )
}

/// Reads a word and prints the factorial of its length.
pub fn factorial_of_input() -> Program {
    vec![
        main(vec![
            line(assign("word", call("input", []))),
            line(assign("n", call("length", [var("word")]))),
            line(assign("res", call("fact", [var("n")]))),
            print([fmt("{n}! = {res}")]),
        ]),
        factorial_fn(),
    ]
    .into()
}

//! Conditional chains and `do` blocks.

use super::*;

/// Classifies a number with an `if`/`elif`/`else` chain.
pub fn sign_fn() -> FunDef {
    fun(
        "sign",
        ["x"],
        vec![if_chain(
            [
                (call("lt", [var("x"), int(0)]), vec![line(raw("negative"))]),
                (call("eq", [var("x"), int(0)]), vec![line(raw("zero"))]),
            ],
            Some(vec![line(raw("positive"))]),
        )],
    )
}

/// Prints the sign of a few numbers.
pub fn signs() -> Program {
    vec![
        main(vec![
            print([call("sign", [call("sub", [int(0), int(5)])])]),
            print([call("sign", [int(0)])]),
            print([call("sign", [int(5)])]),
        ]),
        sign_fn(),
    ]
    .into()
}

/// Groups statements in a `do` block, whose result is the last statement.
pub fn do_block_result() -> Program {
    main(vec![
        do_block(vec![
            line(assign("a", int(20))),
            line(assign("b", int(22))),
            line(call("add", [var("a"), var("b")])),
        ]),
        print([var("_"), var("a")]),
    ])
    .into()
}

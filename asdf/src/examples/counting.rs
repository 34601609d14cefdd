//! Loops, the recursive way.

use super::*;

/// Counts `x` from 0 to 10 by recursion, then prints it.
pub fn count_to_10() -> Program {
    vec![
        main(vec![
            line(assign("x", call("count", [int(0)]))),
            print([var("x")]),
        ]),
        fun(
            "count",
            ["x"],
            vec![if_chain(
                [(
                    call("lt", [var("x"), int(10)]),
                    vec![line(call("count", [call("add", [var("x"), int(1)])]))],
                )],
                Some(vec![line(var("x"))]),
            )],
        ),
    ]
    .into()
}

use super::*;

#[asdf_test("10\n")]
fn count_to_10() -> Program {
    examples::count_to_10()
}

#[asdf_test("0\n1\n2\n")]
fn count_with_prints() -> Program {
    vec![
        examples::main(vec![line(call("loop", [int(0), int(3)]))]),
        fun(
            "loop",
            ["i", "n"],
            vec![if_chain(
                [(
                    call("lt", [var("i"), var("n")]),
                    vec![
                        examples::print([var("i")]),
                        line(call("loop", [call("add", [var("i"), int(1)]), var("n")])),
                    ],
                )],
                None,
            )],
        ),
    ]
    .into()
}

use super::*;

#[asdf_test("1\n")]
fn calls_have_their_own_variables() -> Program {
    vec![
        examples::main(vec![
            line(assign("x", int(1))),
            line(call("set_x", [])),
            examples::print([var("x")]),
        ]),
        fun("set_x", Vec::<&str>::new(), vec![line(assign("x", int(2)))]),
    ]
    .into()
}

#[asdf_test("7\n")]
fn underscore_starts_as_first_argument() -> Program {
    vec![
        examples::main(vec![examples::print([call("first", [int(7), int(8)])])]),
        fun("first", ["a", "b"], vec![line(var("_"))]),
    ]
    .into()
}

#[asdf_test("a\nb\na b\n")]
fn arguments_are_evaluated_in_order() -> Program {
    Program::from(examples::main(vec![line(call(
        "print",
        [call("print", [raw("a")]), call("print", [raw("b")])],
    ))]))
}

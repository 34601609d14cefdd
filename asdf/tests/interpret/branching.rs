use super::*;

#[asdf_test("negative\nzero\npositive\n")]
fn signs() -> Program {
    examples::signs()
}

#[asdf_test("42 20\n")]
fn do_block_result() -> Program {
    examples::do_block_result()
}

#[asdf_test("kept\n")]
fn absent_else_keeps_last_value() -> Program {
    Program::from(examples::main(vec![
        line(raw("kept")),
        if_chain([(var("false"), vec![line(raw("skipped"))])], None::<Vec<Stmt>>),
        examples::print([var("_")]),
    ]))
}

#[asdf_test("empty\n")]
fn empty_string_is_falsy() -> Program {
    Program::from(examples::main(vec![if_chain(
        [(raw(""), vec![examples::print([raw("full")])])],
        Some(vec![examples::print([raw("empty")])]),
    )]))
}

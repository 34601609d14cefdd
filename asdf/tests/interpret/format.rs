use super::*;

#[asdf_test("the answer is 42\n")]
fn the_answer() -> Program {
    examples::the_answer()
}

#[asdf_test("{name} is asdf {name}\n")]
fn braces() -> Program {
    examples::braces()
}

#[asdf_test("\nx=True, y=None\n")]
fn format_other_values() -> Program {
    Program::from(examples::main(vec![
        line(assign("x", call("eq", [int(1), int(1)]))),
        line(assign("y", call("print", []))),
        examples::print([fmt("x={x}, y={y}")]),
    ]))
}

use super::*;

#[asdf_test("42\n")]
fn print_42() -> Program {
    examples::print_42()
}

#[asdf_test("42\n")]
fn double_call() -> Program {
    examples::double_call()
}

#[asdf_test("Hello, world!\n")]
fn hello_world() -> Program {
    Program::from(examples::main(vec![
        line(assign("s", raw("Hello, world!"))),
        examples::print([var("s")]),
    ]))
}

#[asdf_test("\n\n1 two True None\n")]
fn print_forms() -> Program {
    Program::from(examples::main(vec![
        examples::print([]),
        examples::print([int(1), raw("two"), var("true"), call("print", [])]),
    ]))
}

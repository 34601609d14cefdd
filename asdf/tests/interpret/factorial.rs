use super::*;

#[asdf_test("5! = 120\n", "hello\n")]
fn factorial_of_input() -> Program {
    examples::factorial_of_input()
}

#[asdf_test("1! = 1\n", "x")]
fn factorial_without_newline() -> Program {
    examples::factorial_of_input()
}

#[asdf_test("3628800\n")]
fn factorial_of_10() -> Program {
    vec![
        examples::main(vec![examples::print([call("fact", [int(10)])])]),
        examples::factorial_fn(),
    ]
    .into()
}

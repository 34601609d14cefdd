use super::*;

#[should_fail(DIVISION_BY_ZERO_ERROR)]
#[test]
fn division_by_zero() -> Program {
    Program::from(examples::main(vec![line(call("div", [int(1), int(0)]))]))
}

#[should_fail(UNSUPPORTED_COMPARISON_ERROR)]
#[test]
fn compare_int_and_string() -> Program {
    Program::from(examples::main(vec![line(call("lt", [int(1), raw("2")]))]))
}

#[should_fail(NO_LENGTH_ERROR)]
#[test]
fn length_of_int() -> Program {
    Program::from(examples::main(vec![line(call("length", [int(42)]))]))
}

#[should_fail(ARITHMETIC_ERROR)]
#[test]
fn add_strings() -> Program {
    Program::from(examples::main(vec![line(call("add", [raw("a"), raw("b")]))]))
}

#[should_fail(NOT_IMPLEMENTED_ERROR)]
#[test]
fn float_literal() -> Program {
    Program::from(examples::main(vec![line(number(NumberKind::Float, "1.5"))]))
}

#[should_fail(IO_ERROR)]
#[test]
fn input_at_end_of_file() -> Program {
    Program::from(examples::main(vec![line(call("input", []))]))
}

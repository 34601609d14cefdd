use super::*;

#[should_fail(UNDEFINED_NAME_ERROR)]
#[test]
fn undefined_variable() -> Program {
    Program::from(examples::main(vec![examples::print([var("y")])]))
}

#[should_fail(NOT_A_VALUE_ERROR)]
#[test]
fn function_as_value() -> Program {
    Program::from(examples::main(vec![examples::print([var("print")])]))
}

#[should_fail(RESERVED_NAME_ERROR)]
#[test]
fn overwrite_builtin() -> Program {
    Program::from(examples::main(vec![line(assign("add", int(1)))]))
}

#[should_fail(RESERVED_NAME_ERROR)]
#[test]
fn overwrite_underscore() -> Program {
    Program::from(examples::main(vec![line(assign("_", int(1)))]))
}

#[should_fail(RESERVED_NAME_ERROR)]
#[test]
fn define_builtin() -> Program {
    vec![
        examples::main(vec![line(int(0))]),
        fun("print", ["x"], vec![line(var("x"))]),
    ]
    .into()
}

#[should_fail(RESERVED_NAME_ERROR)]
#[test]
fn define_twice() -> Program {
    vec![
        examples::main(vec![line(int(0))]),
        fun("f", Vec::<&str>::new(), vec![line(int(1))]),
        fun("f", Vec::<&str>::new(), vec![line(int(2))]),
    ]
    .into()
}

#[should_fail(FORMAT_KEY_ERROR)]
#[test]
fn unknown_format_key() -> Program {
    Program::from(examples::main(vec![examples::print([fmt("hello {who}")])]))
}

#[should_fail(FORMAT_KEY_ERROR)]
#[test]
fn unclosed_placeholder() -> Program {
    Program::from(examples::main(vec![
        line(assign("who", raw("you"))),
        examples::print([fmt("hello {who")]),
    ]))
}

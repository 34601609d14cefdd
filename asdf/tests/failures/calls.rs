use super::*;

#[should_fail(UNDEFINED_NAME_ERROR)]
#[test]
fn undefined_function() -> Program {
    examples::undefined_call()
}

#[should_fail(ARITY_ERROR)]
#[test]
fn lonely_add() -> Program {
    examples::lonely_add()
}

#[should_fail(ARITY_ERROR)]
#[test]
fn user_function_arity() -> Program {
    vec![
        examples::main(vec![line(call("f", [int(1), int(2)]))]),
        fun("f", ["x"], vec![line(var("x"))]),
    ]
    .into()
}

#[should_fail(ARITY_ERROR)]
#[test]
fn builtin_arity() -> Program {
    Program::from(examples::main(vec![line(call("length", [raw("a"), raw("b")]))]))
}

#[should_fail(NOT_CALLABLE_ERROR)]
#[test]
fn call_of_value() -> Program {
    Program::from(examples::main(vec![
        line(assign("x", int(1))),
        line(call("x", [])),
    ]))
}

#[should_fail(NO_ENTRY_POINT_ERROR)]
#[test]
fn no_main() -> Program {
    Program::from(fun("start", Vec::<&str>::new(), vec![line(int(0))]))
}

#[should_fail(ARITY_ERROR)]
#[test]
fn main_with_params() -> Program {
    Program::from(fun("main", ["argv"], vec![line(int(0))]))
}

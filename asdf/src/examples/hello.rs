//! Printing, and calling functions.

use super::*;

/// Prints the answer.
pub fn print_42() -> Program {
    main(vec![print([raw("42")])]).into()
}

/// Doubles 21 through a function call.
pub fn double_call() -> Program {
    vec![
        main(vec![print([call("f", [int(21)])])]),
        fun("f", ["x"], vec![line(call("mul", [var("x"), int(2)]))]),
    ]
    .into()
}

/// Calls a function that does not exist.
pub fn undefined_call() -> Program {
    main(vec![line(call("undefinedfun", [int(42)]))]).into()
}

/// Adds a single number.
pub fn lonely_add() -> Program {
    main(vec![print([call("add", [int(1)])])]).into()
}

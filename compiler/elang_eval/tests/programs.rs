//! End-to-end programs through the public embedding API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use elang_eval::{EvalErrorKind, EvalMode, Interpreter, InterpreterBuilder, TypeTag, Value};
use elang_ir::{AstBuilder, SharedInterner};
use pretty_assertions::assert_eq;

fn interpreter() -> (SharedInterner, Interpreter) {
    let interner = SharedInterner::default();
    let interp = InterpreterBuilder::new()
        .interner(interner.clone())
        .mode(EvalMode::TestRun)
        .build();
    (interner, interp)
}

fn ints(values: &[i64]) -> Value {
    Value::vector(values.iter().copied().map(Value::int).collect())
}

#[test]
fn fibonacci_with_vectors() {
    let (interner, mut interp) = interpreter();
    let b = AstBuilder::new(&interner);
    // fib = [1, 1]; while length(fib) < 10 { push!(fib, fib[length(fib)] + fib[length(fib) - 1]) }
    let len = || b.call("length", vec![b.ident("fib")]);
    let program = b.program(vec![
        b.assign("fib", b.vector(vec![b.int(1), b.int(1)])),
        b.while_(b.lt(len(), b.int(10)), vec![b.expr(b.call(
            "push!",
            vec![
                b.ident("fib"),
                b.add(
                    b.index(b.ident("fib"), len()),
                    b.index(b.ident("fib"), b.sub(len(), b.int(1))),
                ),
            ],
        ))]),
        b.expr(b.ident("fib")),
    ]);
    assert_eq!(
        interp.run(&program),
        Ok(ints(&[1, 1, 2, 3, 5, 8, 13, 21, 34, 55]))
    );
}

#[test]
fn vector_aliasing_through_function_call() {
    let (interner, mut interp) = interpreter();
    let b = AstBuilder::new(&interner);
    let program = b.program(vec![
        b.function("append_twice", &[("v", TypeTag::Vector), ("x", TypeTag::Any)], vec![
            b.expr(b.call("push!", vec![b.ident("v"), b.ident("x")])),
            b.expr(b.call("push!", vec![b.ident("v"), b.ident("x")])),
        ]),
        b.assign("data", b.vector(vec![])),
        b.assign("alias", b.ident("data")),
        b.expr(b.call("append_twice", vec![b.ident("data"), b.str("z")])),
        b.expr(b.call("length", vec![b.ident("alias")])),
    ]);
    assert_eq!(interp.run(&program), Ok(Value::int(2)));

    let data = interp.global("data").unwrap();
    let alias = interp.global("alias").unwrap();
    assert!(data.same_handle(&alias));
}

#[test]
fn string_aliasing_with_in_place_case() {
    let (interner, mut interp) = interpreter();
    let b = AstBuilder::new(&interner);
    let program = b.program(vec![
        b.assign("s", b.str("Shout")),
        b.assign("t", b.ident("s")),
        b.assign("copy", b.call("lower", vec![b.ident("s")])),
        b.expr(b.call("upper!", vec![b.ident("s")])),
        b.expr(b.vector(vec![b.ident("t"), b.ident("copy")])),
    ]);
    assert_eq!(
        interp.run(&program),
        Ok(Value::vector(vec![
            Value::string("SHOUT"),
            Value::string("shout"),
        ]))
    );
}

#[test]
fn string_literals_are_fresh_each_evaluation() {
    let (interner, mut interp) = interpreter();
    let b = AstBuilder::new(&interner);
    let program = b.program(vec![
        b.assign("out", b.vector(vec![])),
        b.for_each("i", b.range(b.int(2)), vec![
            b.assign("s", b.str("a")),
            b.expr(b.call("upper!", vec![b.ident("s")])),
            b.expr(b.call("push!", vec![b.ident("out"), b.ident("s")])),
        ]),
        b.expr(b.ident("out")),
    ]);
    assert_eq!(
        interp.run(&program),
        Ok(Value::vector(vec![Value::string("A"), Value::string("A")]))
    );
}

#[test]
fn membership_operand_order() {
    let (interner, mut interp) = interpreter();
    let b = AstBuilder::new(&interner);
    // The element is evaluated before the collection.
    let program = b.program(vec![
        b.assign("log", b.vector(vec![])),
        b.expr(b.contains(
            b.block_expr(vec![
                b.expr(b.call("push!", vec![b.ident("log"), b.str("element")])),
                b.expr(b.str("ell")),
            ]),
            b.block_expr(vec![
                b.expr(b.call("push!", vec![b.ident("log"), b.str("collection")])),
                b.expr(b.str("hello")),
            ]),
        )),
    ]);
    assert_eq!(interp.run(&program), Ok(Value::Bool(true)));
    assert_eq!(
        interp.global("log"),
        Some(Value::vector(vec![
            Value::string("element"),
            Value::string("collection"),
        ]))
    );
}

#[test]
fn sum_of_range_with_mixed_arithmetic() {
    let (interner, mut interp) = interpreter();
    let b = AstBuilder::new(&interner);
    let program = b.program(vec![
        b.assign("total", b.float(0.5)),
        b.for_each("k", b.range_from(b.int(3), b.int(5)), vec![
            b.assign("total", b.add(b.ident("total"), b.ident("k"))),
        ]),
        b.expr(b.ident("total")),
    ]);
    assert_eq!(interp.run(&program), Ok(Value::float(12.5)));
}

#[test]
fn zeros_ones_and_pop() {
    let (interner, mut interp) = interpreter();
    let b = AstBuilder::new(&interner);
    let program = b.program(vec![
        b.assign("z", b.call("zeros", vec![b.int(3)])),
        b.assign("o", b.call("ones", vec![b.int(2)])),
        b.assign("last", b.call("pop!", vec![b.ident("o")])),
        b.expr(b.vector(vec![b.ident("z"), b.ident("o"), b.ident("last")])),
    ]);
    assert_eq!(
        interp.run(&program),
        Ok(Value::vector(vec![ints(&[0, 0, 0]), ints(&[1]), Value::int(1)]))
    );
}

#[test]
fn pop_on_empty_vector_fails() {
    let (interner, mut interp) = interpreter();
    let b = AstBuilder::new(&interner);
    let err = interp
        .run(&b.program(vec![b.expr(b.call("pop!", vec![b.vector(vec![])]))]))
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::IndexOutOfBounds { index: 0, len: 0 });
}

#[test]
fn oversized_vectors_fail_without_allocating() {
    let (interner, mut interp) = interpreter();
    let b = AstBuilder::new(&interner);
    for program in [
        b.program(vec![b.expr(b.call("zeros", vec![b.int(i64::MAX)]))]),
        b.program(vec![b.expr(b.call("ones", vec![b.int(i64::MAX)]))]),
        b.program(vec![b.expr(b.range_from(b.int(1), b.int(i64::MAX)))]),
    ] {
        let err = interp.run(&program).unwrap_err();
        assert!(
            matches!(err.kind, EvalErrorKind::CapacityExceeded { .. }),
            "{err}"
        );
    }
}

#[test]
fn self_containing_vectors() {
    let (interner, mut interp) = interpreter();
    let b = AstBuilder::new(&interner);
    let program = b.program(vec![
        b.assign("a", b.vector(vec![])),
        b.assign("c", b.vector(vec![])),
        b.expr(b.call("push!", vec![b.ident("a"), b.ident("a")])),
        b.expr(b.call("push!", vec![b.ident("c"), b.ident("c")])),
        b.expr(b.call("show", vec![b.ident("a")])),
        b.expr(b.vector(vec![
            b.eq(b.ident("a"), b.ident("c")),
            b.ne(b.ident("a"), b.ident("c")),
            b.contains(b.int(1), b.ident("a")),
            b.contains(b.ident("c"), b.ident("a")),
        ])),
    ]);
    assert_eq!(
        interp.run(&program),
        Ok(Value::vector(vec![
            Value::Bool(true),
            Value::Bool(false),
            Value::Bool(false),
            Value::Bool(true),
        ]))
    );
    assert_eq!(interp.output(), "[[...]] (type: Vector)\n");

    for name in ["a", "c"] {
        let v = interp.global(name).unwrap();
        v.as_vector_handle().unwrap().borrow_mut().clear();
    }
}

#[test]
fn show_through_embedding_call() {
    let (_, mut interp) = interpreter();
    interp.call("show", vec![Value::string("hi")]).unwrap();
    assert_eq!(interp.output(), "\"hi\" (type: String)\n");
}

#[test]
fn deep_expression_nesting() {
    let (interner, mut interp) = interpreter();
    let b = AstBuilder::new(&interner);
    let mut expr = b.int(0);
    for _ in 0..1_000 {
        expr = b.add(expr, b.int(1));
    }
    assert_eq!(
        interp.run(&b.program(vec![b.expr(expr)])),
        Ok(Value::int(1_000))
    );
}

#[test]
fn deep_user_recursion_in_interpret_mode() {
    let interner = SharedInterner::default();
    let mut interp = InterpreterBuilder::new()
        .interner(interner.clone())
        .mode(EvalMode::Interpret)
        .print_handler(elang_eval::silent_handler())
        .build();
    let b = AstBuilder::new(&interner);
    // count(n) = if n == 0 { 0 } else { 1 + count(n - 1) }
    let program = b.program(vec![
        b.function("count", &[("n", TypeTag::Integer)], vec![b.if_else(
            b.eq(b.ident("n"), b.int(0)),
            vec![b.expr(b.int(0))],
            vec![b.expr(b.add(
                b.int(1),
                b.call("count", vec![b.sub(b.ident("n"), b.int(1))]),
            ))],
        )]),
        b.expr(b.call("count", vec![b.int(3_000)])),
    ]);
    assert_eq!(interp.run(&program), Ok(Value::int(3_000)));
}

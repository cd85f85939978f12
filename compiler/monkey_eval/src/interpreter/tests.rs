#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use monkey_ir::{BinaryOp, BlockStatement, Expression, Identifier, Program, Statement};
use monkey_parse::parse;
use pretty_assertions::assert_eq;

use crate::environment::Environment;
use crate::errors::EvalError;
use crate::interpreter::Interpreter;
use crate::print_handler::silent_handler;
use crate::value::Value;

fn run_with(interp: &Interpreter, source: &str) -> Result<Value, EvalError> {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "parse errors in {source:?}: {:?}",
        output.errors
    );
    interp.eval_program(&output.program, &Environment::new())
}

fn run(source: &str) -> Result<Value, EvalError> {
    let interp = Interpreter::builder().print_handler(silent_handler()).build();
    run_with(&interp, source)
}

fn eval(source: &str) -> Value {
    run(source).unwrap()
}

fn error(source: &str) -> String {
    match run(source) {
        Ok(value) => panic!("expected an error from {source:?}, got {value}"),
        Err(error) => error.to_string(),
    }
}

#[test]
fn integer_arithmetic() {
    let cases = [
        ("5", 5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ("7 % 3", 1),
        ("-7 / 2", -3),
        ("-7 % 2", -1),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "{source}");
    }
}

#[test]
fn boolean_expressions() {
    let cases = [
        ("true", true),
        ("1 < 2", true),
        ("1 > 1", false),
        ("1 != 2", true),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("(1 > 2) == true", false),
        ("!5", false),
        ("!!5", true),
        ("!0", false),
        ("\"Test\" == \"Test\"", true),
        ("\"Mike\" == \"ekiM\"", false),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Boolean(expected), "{source}");
    }
}

#[test]
fn conditionals() {
    let cases = [
        ("if (true) { 10 }", Value::Integer(10)),
        ("if (false) { 10 }", Value::Null),
        ("if (1) { 10 }", Value::Integer(10)),
        ("if (1 > 2) { 10 } else { 20 }", Value::Integer(20)),
        ("if (true) { }", Value::Void),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn return_statements() {
    let cases = [
        "return 10;",
        "return 10; 9;",
        "return 2 * 5; 9;",
        "9; return 2 * 5; 9",
        "if (10 > 1) { if (10 > 1) { return 10; } return 1; }",
    ];
    for source in cases {
        assert_eq!(eval(source), Value::Integer(10), "{source}");
    }
}

#[test]
fn error_messages() {
    let cases = [
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("5; true + false; 5;", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        ("\"Hello\" - \"World\"", "unknown operator: STRING - STRING"),
        (
            "{\"name\": \"Monkey\"}[fn(x) { x }];",
            "unusable as hash key: FUNCTION",
        ),
        ("{[1]: 2}", "unusable as hash key: ARRAY"),
        ("5[0]", "index operator not supported: INTEGER"),
        ("let x = 5; x(1)", "not a function: INTEGER"),
        (
            "fn(a, b) { a }(1)",
            "wrong number of arguments, expected 2 got 1",
        ),
        ("if (true) { break; }", "break statement invalid outside of a for loop"),
        ("if (true) { skip; }", "skip statement invalid outside of a for loop"),
        ("for (x in 5) { x }", "cannot enumerate over INTEGER"),
        (
            "for (k, v in [1]) { k }",
            "value identifier is allowed only when enumerating over hashes",
        ),
        ("1 / 0", "division by zero"),
        ("1 % 0", "division by zero"),
        ("1 == true", "type mismatch: INTEGER == BOOLEAN"),
        ("\"a\" != \"b\"", "unknown operator: STRING != STRING"),
        ("[1] + [1]", "unknown operator: ARRAY + ARRAY"),
        ("9223372036854775807 + 1", "integer overflow in addition"),
    ];
    for (source, expected) in cases {
        assert_eq!(error(source), expected, "{source}");
    }
}

#[test]
fn let_bindings() {
    let cases = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
        ("let a = 1; let a = a + 1; a", 2),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "{source}");
    }
    assert_eq!(eval("let a = 1;"), Value::Void);
}

#[test]
fn compound_assignment() {
    let cases = [
        ("let x = 10; x += 5; x", 15),
        ("let x = 10; x -= 5; x", 5),
        ("let x = 10; x *= 5; x", 50),
        ("let x = 10; x /= 5; x", 2),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "{source}");
    }
}

#[test]
fn assignment_inside_function_shadows() {
    let source = "let x = 1; let f = fn() { x += 1; x }; f() + x";
    assert_eq!(eval(source), Value::Integer(3));
}

#[test]
fn function_application() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "{source}");
    }
}

#[test]
fn closures() {
    let source = "
        let newAdder = fn(x) { fn(y) { x + y } };
        let addTwo = newAdder(2);
        addTwo(7);
    ";
    assert_eq!(eval(source), Value::Integer(9));
}

#[test]
fn closures_see_later_bindings() {
    let source = "let f = fn() { later }; let later = 3; f()";
    assert_eq!(eval(source), Value::Integer(3));
}

#[test]
fn recursion() {
    let source = "
        let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
        fib(15)
    ";
    assert_eq!(eval(source), Value::Integer(610));
}

#[test]
fn return_only_leaves_the_innermost_function() {
    let source = "let f = fn() { return 1; 2 }; f() + 10";
    assert_eq!(eval(source), Value::Integer(11));
}

#[test]
fn strings() {
    assert_eq!(
        eval("\"Hello\" + \" \" + \"World!\""),
        Value::string("Hello World!")
    );
    assert_eq!(eval("\"\""), Value::string(""));
}

#[test]
fn arrays_and_indexing() {
    let cases = [
        ("[1, 2, 3][0]", Value::Integer(1)),
        ("[1, 2, 3][2]", Value::Integer(3)),
        ("let i = 0; [1][i];", Value::Integer(1)),
        ("[1, 2, 3][1 + 1];", Value::Integer(3)),
        ("let a = [1, 2, 3]; a[0] + a[1] + a[2];", Value::Integer(6)),
        ("[1, 2, 3][3]", Value::Null),
        ("[1, 2, 3][-1]", Value::Null),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
    assert_eq!(eval("[1, 2 * 2, 3 + 3]").to_string(), "[1, 4, 6]");
}

#[test]
fn hashes() {
    let source = r#"
        let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }
    "#;
    assert_eq!(
        eval(source).to_string(),
        r#"{"one": 1, "two": 2, "three": 3, 4: 4, true: 5, false: 6}"#
    );

    let cases = [
        (r#"{"foo": 5}["foo"]"#, Value::Integer(5)),
        (r#"{"foo": 5}["bar"]"#, Value::Null),
        (r#"let key = "foo"; {"foo": 5}[key]"#, Value::Integer(5)),
        (r#"{}["foo"]"#, Value::Null),
        ("{5: 5}[5]", Value::Integer(5)),
        ("{true: 5}[true]", Value::Integer(5)),
        ("{1: 1, 1: 2}[1]", Value::Integer(2)),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn hash_keys_of_different_kinds_stay_apart() {
    let source = r#"
        let h = {1: "a", "1": "b", true: "c"};
        [h[1], h["1"], h[true], len(h)]
    "#;
    assert_eq!(eval(source).to_string(), r#"["a", "b", "c", 3]"#);
    assert_eq!(eval(r#"{1: "a"}["1"]"#), Value::Null);
    assert_eq!(eval(r#"{1: "a"}[true]"#), Value::Null);
}

#[test]
fn block_statements_share_the_enclosing_scope() {
    let block = Statement::Block(BlockStatement::new(vec![
        Statement::Let {
            name: Identifier::new("x"),
            value: Expression::Integer(2),
        },
        Statement::Expression(Expression::infix(
            BinaryOp::Mul,
            Expression::identifier("x"),
            Expression::Integer(3),
        )),
    ]));
    let interp = Interpreter::builder().print_handler(silent_handler()).build();
    let env = Environment::new();

    let program = Program::new(vec![block.clone()]);
    assert_eq!(interp.eval_program(&program, &env).unwrap(), Value::Integer(6));
    assert_eq!(env.get("x"), Some(Value::Integer(2)));

    let program = Program::new(vec![
        block,
        Statement::Return(Expression::identifier("x")),
        Statement::Expression(Expression::Integer(0)),
    ]);
    assert_eq!(
        interp.eval_program(&program, &Environment::new()).unwrap(),
        Value::Integer(2)
    );
    assert_eq!(
        interp
            .eval_program(&Program::new(vec![Statement::Block(BlockStatement::new(vec![]))]), &env)
            .unwrap(),
        Value::Void
    );
}

#[test]
fn composite_equality_is_identity() {
    let cases = [
        ("fn(x) { x } == fn(x) { x }", false),
        ("let f = fn(x) { x }; f == f", true),
        ("[1] == [1]", false),
        ("let a = [1]; a == a", true),
        ("len == len", true),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Boolean(expected), "{source}");
    }
}

#[test]
fn for_over_arrays() {
    let source = "let sum = 0; for (x in [1, 2, 3]) { sum += x; }; sum";
    // The loop scope is nested, so `sum += x` shadows inside it.
    assert_eq!(eval(source), Value::Integer(0));

    let source = "let f = fn() { let acc = 0; for (x in [1, 2, 3]) { acc += x; }; acc }; f()";
    assert_eq!(eval(source), Value::Integer(0));

    let source = "
        let f = fn() { for (x in [1, 2, 3]) { let acc = x; if (x == 3) { return acc; } } };
        f()
    ";
    assert_eq!(eval(source), Value::Integer(3));
}

#[test]
fn for_loop_control() {
    let cases = [
        (
            "for (i in [2, 1, 4, 3, 6, 5]) { if (i % 2 == 1) { return false; } if (i % 2 == 0) { break; } };",
            Value::Null,
        ),
        (
            "for (i in [1, 2, 3]) { if (i != 3) { skip; } return true; };",
            Value::Boolean(true),
        ),
        ("for (i in [1, 2]) { i }", Value::Null),
        ("for (x in 5) { }", Value::Void),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn for_returns_from_enclosing_function() {
    let source = "
        let find = fn(xs, want) { for (x in xs) { if (x == want) { return x * 10; } }; -1 };
        [find([1, 2, 3], 2), find([1, 2, 3], 9)]
    ";
    assert_eq!(eval(source).to_string(), "[20, -1]");
}

#[test]
fn for_over_strings_and_hashes() {
    let source = r#"
        let f = fn(s) { for (c in s) { if (c == "b") { return c; } }; "" };
        f("abc")
    "#;
    assert_eq!(eval(source), Value::string("b"));

    let source = r#"
        let h = {"a": 1, "b": 2};
        let pick = fn() { for (k, v in h) { if (v == 2) { return k; } } };
        pick()
    "#;
    assert_eq!(eval(source), Value::string("b"));

    let source = r#"let f = fn() { for (k in {7: "x"}) { return k; } }; f()"#;
    assert_eq!(eval(source), Value::Integer(7));
}

#[test]
fn break_does_not_cross_function_boundaries() {
    let source = "let f = fn() { break; }; for (x in [1]) { f() }";
    assert_eq!(
        error(source),
        "break statement invalid outside of a for loop"
    );
}

#[test]
fn nested_loops_break_inner_only() {
    let source = "
        let f = fn() {
            for (i in [1, 2]) {
                for (j in [1, 2]) { break; }
                if (i == 2) { return i * 100; }
            }
        };
        f()
    ";
    assert_eq!(eval(source), Value::Integer(200));
}

#[test]
fn call_depth_is_bounded() {
    let interp = Interpreter::builder()
        .print_handler(silent_handler())
        .max_call_depth(50)
        .build();
    let source = "let f = fn(n) { if (n == 0) { 0 } else { f(n - 1) } };";

    let shallow = format!("{source} f(40)");
    assert_eq!(run_with(&interp, &shallow).unwrap(), Value::Integer(0));

    let deep = format!("{source} f(100)");
    assert_eq!(
        run_with(&interp, &deep).unwrap_err().to_string(),
        "maximum call depth of 50 exceeded"
    );
}

#[test]
fn macro_literals_evaluate_to_macros() {
    assert_eq!(eval("macro(x) { x }").type_name(), "MACRO");
    assert_eq!(error("macro(x) { x }(1)"), "not a function: MACRO");
}

#[test]
fn quote_requires_one_argument() {
    assert_eq!(
        error("quote(1, 2)"),
        "wrong number of arguments, expected 1 got 2"
    );
}

use pretty_assertions::assert_eq;

use super::{eval, run};
use crate::Value;

#[test]
fn user_defined_map_and_reduce() {
    let source = "
        let mymap = fn(arr, f) {
            let iter = fn(arr, accumulated) {
                if (len(arr) == 0) {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))));
                }
            };
            iter(arr, []);
        };
        let myreduce = fn(arr, initial, f) {
            let iter = fn(arr, result) {
                if (len(arr) == 0) { result } else { iter(rest(arr), f(result, first(arr))) }
            };
            iter(arr, initial);
        };
        let doubled = mymap([1, 2, 3, 4], fn(x) { x * 2 });
        myreduce(doubled, 0, fn(acc, x) { acc + x });
    ";
    assert_eq!(eval(source), Value::Integer(20));
}

#[test]
fn printing_from_loops() {
    let source = r#"
        let people = [{"name": "Alice", "age": 24}, {"name": "Anna", "age": 28}];
        for (person in people) {
            if (person["age"] > 25) { skip; }
            puts(person["name"]);
        }
        for (key, value in {"x": 1, "y": 2}) {
            puts(key + "=" + str(value));
        }
    "#;
    let (result, output) = run(source);
    assert_eq!(result, Ok(Value::Null));
    assert_eq!(output, "\"Alice\"\n\"x=1\"\n\"y=2\"\n");
}

#[test]
fn counter_closures_are_independent() {
    let source = "
        let make = fn(start) { fn(step) { start + step } };
        let a = make(10);
        let b = make(100);
        [a(1), b(1), a(2)]
    ";
    assert_eq!(eval(source).to_string(), "[11, 101, 12]");
}

#[test]
fn deep_recursion_does_not_overflow_the_stack() {
    let source = "
        let count = fn(n) { if (n == 0) { 0 } else { 1 + count(n - 1) } };
        count(5000)
    ";
    assert_eq!(eval(source), Value::Integer(5000));
}

#[test]
fn output_before_an_error_is_kept() {
    let (result, output) = run(r#"puts("before"); missing; puts("after")"#);
    assert_eq!(
        result.map_err(|e| e.to_string()),
        Err("identifier not found: missing".to_string())
    );
    assert_eq!(output, "\"before\"\n");
}

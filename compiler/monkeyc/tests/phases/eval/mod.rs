//! Evaluation through the pipeline.

use monkey_eval::Value;
use pretty_assertions::assert_eq;

use crate::common::{run, session};

#[test]
fn arithmetic() {
    assert_eq!(run("5 + 5 + 5 + 5 - 10"), Value::Integer(10));
    assert_eq!(run("(5 + 10 * 2 + 15 / 3) * 2 + -10"), Value::Integer(50));
}

#[test]
fn closures_capture_their_environment() {
    assert_eq!(
        run("let newAdder = fn(x) { fn(y) { x + y }; };
             let addTwo = newAdder(2);
             addTwo(3);"),
        Value::Integer(5)
    );
}

#[test]
fn errors_propagate_and_stop_evaluation() {
    assert_eq!(
        run("5 + true;").to_string(),
        "ERROR: type mismatch: INTEGER + BOOLEAN"
    );
    assert_eq!(run("foobar").to_string(), "ERROR: identifier not found: foobar");

    let (mut session, print) = session();
    let result = session.run(r#"puts(1); 5 + true; puts(2);"#);
    assert_eq!(
        result.map(|value| value.to_string()),
        Ok("ERROR: type mismatch: INTEGER + BOOLEAN".to_owned())
    );
    assert_eq!(print.get_output(), "1\n");
}

#[test]
fn out_of_range_index_is_null() {
    assert_eq!(run("[1, 2, 3][3]"), Value::Null);
    assert_eq!(run("[1, 2, 3][-1]"), Value::Null);
}

#[test]
fn bindings_persist_across_runs() {
    let (mut session, _) = session();
    assert_eq!(session.run("let a = 2;"), Ok(Value::Null));
    assert_eq!(session.run("let f = fn(x) { x * a };"), Ok(Value::Null));
    assert_eq!(session.run("f(21)"), Ok(Value::Integer(42)));
}

#[test]
fn map_and_reduce_in_the_language() {
    let source = "
        let map = fn(arr, f) {
          let iter = fn(arr, accumulated) {
            if (len(arr) == 0) { accumulated } else { iter(rest(arr), push(accumulated, f(first(arr)))) }
          };
          iter(arr, []);
        };
        let reduce = fn(arr, initial, f) {
          let iter = fn(arr, result) {
            if (len(arr) == 0) { result } else { iter(rest(arr), f(result, first(arr))) }
          };
          iter(arr, initial);
        };
        let doubled = map([1, 2, 3, 4], fn(x) { x * 2 });
        reduce(doubled, 0, fn(acc, x) { acc + x });
    ";
    assert_eq!(run(source), Value::Integer(20));
}

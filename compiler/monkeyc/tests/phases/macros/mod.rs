//! Macro definition and expansion through the pipeline.

use monkey_eval::Value;
use pretty_assertions::assert_eq;

use crate::common::{render, run, session};

const UNLESS: &str = r#"
    let unless = macro(cond, conseq, alter) {
      quote(if (!(unquote(cond))) { unquote(conseq); } else { unquote(alter); });
    };
    unless(10 > 5, puts("not greater"), puts("greater"));
"#;

#[test]
fn unless_expands_to_handwritten_equivalent() {
    let (mut session, _) = session();
    let program = monkeyc::parse_source(UNLESS).program;

    let expanded = session.expand(program);

    assert_eq!(
        expanded.to_string(),
        render(r#"if (!(10 > 5)) { puts("not greater") } else { puts("greater") }"#)
    );
    assert!(session.take_expansion_errors().is_empty());
}

#[test]
fn unless_evaluates_only_the_chosen_branch() {
    let (mut session, print) = session();
    assert_eq!(session.run(UNLESS), Ok(Value::Null));
    assert_eq!(print.get_output(), "greater\n");
}

#[test]
fn define_removes_only_macro_definitions() {
    let (mut session, _) = session();
    let program = monkeyc::parse_source(
        "let number = 1;
         let function = fn(x, y) { x + y };
         let mymacro = macro(x, y) { x + y; };",
    )
    .program;

    let expanded = session.expand(program);

    assert_eq!(expanded.len(), 2);
    assert_eq!(
        expanded.to_string(),
        "let number = 1;\nlet function = fn(x, y) { (x + y) };"
    );
}

#[test]
fn macros_are_invisible_to_evaluation() {
    assert_eq!(
        run("let m = macro() { quote(1) }; m").to_string(),
        "ERROR: identifier not found: m"
    );
}

#[test]
fn macro_arity_mismatch_is_a_runtime_error() {
    assert_eq!(
        run("let m = macro(a) { quote(unquote(a)) }; m(1, 2)").to_string(),
        "ERROR: wrong number of arguments. got=2, want=1"
    );
}

#[test]
fn failed_expansion_is_the_result() {
    let (mut session, print) = session();
    let result = session.run(r#"puts("first"); let m = macro() { 1 }; m();"#);

    assert_eq!(
        result.map(|value| value.to_string()),
        Ok("ERROR: macro `m` must return a quoted AST node, got INTEGER".to_owned())
    );
    assert_eq!(print.get_output(), "");
}

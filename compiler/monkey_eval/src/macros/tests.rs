use super::*;
use crate::buffer_handler;
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Program {
    let output = monkey_parse::parse(source);
    assert!(!output.has_errors(), "{:?}", output.error_messages());
    output.program
}

fn eval(source: &str) -> Value {
    let mut interpreter = Interpreter::with_print_handler(buffer_handler());
    let env = interpreter.new_environment();
    interpreter.eval_program(&parse(source), env)
}

fn quoted(source: &str) -> String {
    match eval(source) {
        Value::Quote(node) => node.to_string(),
        other => panic!("expected a quote, got {other}"),
    }
}

/// Define and expand `source`, returning the rendered program and the
/// recorded failures.
fn expand(source: &str) -> (String, Vec<EvalError>) {
    let mut interpreter = Interpreter::with_print_handler(buffer_handler());
    let env = interpreter.new_environment();
    let mut program = parse(source);
    interpreter.define_macros(&mut program, env);
    let expanded = interpreter.expand_macros(program, env);
    (expanded.to_string(), interpreter.take_expansion_errors())
}

#[test]
fn test_quote_leaves_argument_unevaluated() {
    let cases = [
        ("quote(5)", "5"),
        ("quote(5 + 8)", "(5 + 8)"),
        ("quote(foobar)", "foobar"),
        ("quote(foobar + barfoo)", "(foobar + barfoo)"),
    ];
    for (input, expected) in cases {
        assert_eq!(quoted(input), expected, "{input}");
    }
}

#[test]
fn test_unquote_splices_values() {
    let cases = [
        ("quote(unquote(4))", "4"),
        ("quote(unquote(4 + 4))", "8"),
        ("quote(8 + unquote(4 + 4))", "(8 + 8)"),
        ("quote(unquote(4 + 4) + 8)", "(8 + 8)"),
        ("let foobar = 8; quote(foobar)", "foobar"),
        ("let foobar = 8; quote(unquote(foobar))", "8"),
        ("quote(unquote(true))", "true"),
        ("quote(unquote(true == false))", "false"),
        ("quote(unquote(quote(4 + 4)))", "(4 + 4)"),
        (
            "let quotedInfixExpression = quote(4 + 4);
             quote(unquote(4 + 4) + unquote(quotedInfixExpression))",
            "(8 + (4 + 4))",
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(quoted(input), expected, "{input}");
    }
}

#[test]
fn test_unquote_converts_strings_and_collections() {
    assert_eq!(quoted(r#"quote(unquote("hi"))"#), r#""hi""#);
    assert_eq!(quoted("quote(unquote([1, 2 * 2]))"), "[1, 4]");
    assert_eq!(quoted(r#"quote(unquote({"a": 1}))"#), r#"{"a": 1}"#);
}

#[test]
fn test_unquote_of_unconvertible_value_is_an_error() {
    assert_eq!(
        eval("quote(unquote(fn(x) { x }))").to_string(),
        "ERROR: cannot convert FUNCTION into an AST node"
    );
    assert_eq!(
        eval("quote(unquote(missing))").to_string(),
        "ERROR: identifier not found: missing"
    );
}

#[test]
fn test_quote_arity() {
    assert_eq!(
        eval("quote(1, 2)").to_string(),
        "ERROR: wrong number of arguments. got=2, want=1"
    );
}

#[test]
fn test_quote_cannot_be_shadowed() {
    assert_eq!(quoted("let quote = fn(x) { x }; quote(1 + 1)"), "(1 + 1)");
}

#[test]
fn test_define_macros_removes_definitions() {
    let mut interpreter = Interpreter::with_print_handler(buffer_handler());
    let env = interpreter.new_environment();
    let mut program = parse(
        "let number = 1;
         let function = fn(x, y) { x + y };
         let mymacro = macro(x, y) { x + y; };",
    );

    interpreter.define_macros(&mut program, env);

    assert_eq!(program.len(), 2);
    assert!(interpreter.environments().get(env, "number").is_none());
    assert!(interpreter.environments().get(env, "function").is_none());

    let Some(Value::Macro(mac)) = interpreter.environments().get(env, "mymacro") else {
        panic!("mymacro is not bound to a macro");
    };
    let parameters: Vec<_> = mac.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(parameters, ["x", "y"]);
    assert_eq!(mac.body.to_string(), "{ (x + y) }");
}

#[test]
fn test_define_macros_ignores_nested_definitions() {
    let mut interpreter = Interpreter::with_print_handler(buffer_handler());
    let env = interpreter.new_environment();
    let mut program = parse("let f = fn() { let m = macro() { 1 }; m };");

    interpreter.define_macros(&mut program, env);

    assert_eq!(program.len(), 1);
    assert!(interpreter.environments().get(env, "m").is_none());
}

#[test]
fn test_expand_macros() {
    let cases = [
        (
            "let infixExpression = macro() { quote(1 + 2); };
             infixExpression();",
            "(1 + 2)",
        ),
        (
            "let reverse = macro(a, b) { quote(unquote(b) - unquote(a)); };
             reverse(2 + 2, 10 - 5);",
            "(10 - 5) - (2 + 2)",
        ),
        (
            r#"let unless = macro(condition, consequence, alternative) {
                 quote(if (!(unquote(condition))) {
                     unquote(consequence);
                 } else {
                     unquote(alternative);
                 });
             };
             unless(10 > 5, puts("not greater"), puts("greater"));"#,
            r#"if (!(10 > 5)) { puts("not greater") } else { puts("greater") }"#,
        ),
    ];

    for (input, expected) in cases {
        let (expanded, errors) = expand(input);
        assert_eq!(expanded, parse(expected).to_string(), "{input}");
        assert!(errors.is_empty(), "{errors:?}");
    }
}

#[test]
fn test_expansion_reaches_nested_calls() {
    let (expanded, _) = expand(
        "let twice = macro(x) { quote(unquote(x) + unquote(x)) };
         let f = fn() { [twice(1), twice(twice(2))] };",
    );
    assert_eq!(expanded, "let f = fn() { [(1 + 1), ((2 + 2) + (2 + 2))] };");
}

#[test]
fn test_macro_arguments_are_not_evaluated() {
    let mut interpreter = Interpreter::with_print_handler(buffer_handler());
    let env = interpreter.new_environment();
    let macro_env = interpreter.new_environment();
    let mut program = parse(
        r#"let ignore = macro(x) { quote(1) };
           ignore(puts("side effect"));"#,
    );
    interpreter.define_macros(&mut program, macro_env);
    let program = interpreter.expand_macros(program, macro_env);

    assert_eq!(interpreter.eval_program(&program, env), Value::Integer(1));
    assert_eq!(interpreter.print_handler().get_output(), "");
}

#[test]
fn test_macro_arity_mismatch_fails_at_evaluation() {
    let mut interpreter = Interpreter::with_print_handler(buffer_handler());
    let env = interpreter.new_environment();
    let macro_env = interpreter.new_environment();
    let mut program = parse("let m = macro(a, b) { quote(a) }; m(1);");
    interpreter.define_macros(&mut program, macro_env);
    let program = interpreter.expand_macros(program, macro_env);

    assert!(interpreter.take_expansion_errors().is_empty());
    assert_eq!(
        interpreter.eval_program(&program, env).to_string(),
        "ERROR: wrong number of arguments. got=1, want=2"
    );
}

#[test]
fn test_macro_returning_non_quote_is_recorded() {
    let (expanded, errors) = expand("let m = macro() { 1 }; m();");
    assert_eq!(expanded, "m()");
    assert_eq!(
        errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["macro `m` must return a quoted AST node, got INTEGER"]
    );
}

#[test]
fn test_macro_body_error_is_recorded() {
    let (expanded, errors) = expand("let m = macro() { missing }; m();");
    assert_eq!(expanded, "m()");
    assert_eq!(
        errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["identifier not found: missing"]
    );
}

#[test]
fn test_macro_value_outside_expansion() {
    assert_eq!(
        eval("let f = fn() { let m = macro() { quote(1) }; m() }; f()").to_string(),
        "ERROR: macro called outside of expansion"
    );
}

#[test]
fn test_expansion_frames_are_released() {
    let mut interpreter = Interpreter::with_print_handler(buffer_handler());
    let env = interpreter.new_environment();
    let mut program = parse("let m = macro(x) { quote(unquote(x)) }; m(1); m(2); m(3);");
    interpreter.define_macros(&mut program, env);
    let frames = interpreter.environments().len();

    interpreter.expand_macros(program, env);

    assert_eq!(interpreter.environments().len(), frames);
}

//! Core parser tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::parse;
use monkey_ir::{
    BlockStatement, Expression, Identifier, InfixOperator, LetStatement, PrefixOperator, Program,
    ReturnStatement, Statement,
};
use pretty_assertions::assert_eq;

fn parse_ok(source: &str) -> Program {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        output.error_messages()
    );
    output.program
}

/// The only statement of `source`, which must be an expression statement.
fn parse_expression(source: &str) -> Expression {
    let program = parse_ok(source);
    assert_eq!(program.len(), 1, "expected one statement in {source:?}");
    match program.statements.into_iter().next() {
        Some(Statement::Expression(stmt)) => stmt.expression,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn ident(name: &str) -> Expression {
    Expression::identifier(name)
}

fn int(value: i64) -> Expression {
    Expression::IntegerLiteral(value)
}

#[test]
fn test_let_statements() {
    let cases = [
        ("let x = 5;", "x", int(5)),
        ("let y = true;", "y", Expression::Boolean(true)),
        ("let foobar = y;", "foobar", ident("y")),
        ("let z = 1 + 2", "z", Expression::infix(int(1), InfixOperator::Add, int(2))),
    ];

    for (source, name, value) in cases {
        let program = parse_ok(source);
        assert_eq!(
            program.statements,
            vec![Statement::Let(LetStatement {
                name: Identifier::new(name),
                value,
            })]
        );
    }
}

#[test]
fn test_return_statements() {
    let cases = [
        ("return 5;", int(5)),
        ("return true;", Expression::Boolean(true)),
        ("return foobar;", ident("foobar")),
    ];

    for (source, value) in cases {
        let program = parse_ok(source);
        assert_eq!(
            program.statements,
            vec![Statement::Return(ReturnStatement { value })]
        );
    }
}

#[test]
fn test_program_keeps_statement_order() {
    let program = parse_ok("let a = 1; a; return a");
    assert_eq!(program.to_string(), "let a = 1;\na\nreturn a;");
}

#[test]
fn test_literals() {
    assert_eq!(parse_expression("foobar;"), ident("foobar"));
    assert_eq!(parse_expression("5;"), int(5));
    assert_eq!(parse_expression("true"), Expression::Boolean(true));
    assert_eq!(parse_expression("false;"), Expression::Boolean(false));
    assert_eq!(parse_expression("\"hello world\";"), Expression::string("hello world"));
    assert_eq!(parse_expression("9223372036854775807"), int(i64::MAX));
}

#[test]
fn test_prefix_expressions() {
    let cases = [
        ("!5;", PrefixOperator::Not, int(5)),
        ("-15;", PrefixOperator::Neg, int(15)),
        ("!foobar;", PrefixOperator::Not, ident("foobar")),
        ("-foobar;", PrefixOperator::Neg, ident("foobar")),
        ("!true;", PrefixOperator::Not, Expression::Boolean(true)),
        ("!false;", PrefixOperator::Not, Expression::Boolean(false)),
    ];

    for (source, operator, right) in cases {
        assert_eq!(parse_expression(source), Expression::prefix(operator, right));
    }
}

#[test]
fn test_infix_expressions() {
    let cases = [
        ("5 + 5;", InfixOperator::Add),
        ("5 - 5;", InfixOperator::Sub),
        ("5 * 5;", InfixOperator::Mul),
        ("5 / 5;", InfixOperator::Div),
        ("5 > 5;", InfixOperator::Gt),
        ("5 < 5;", InfixOperator::Lt),
        ("5 == 5;", InfixOperator::Eq),
        ("5 != 5;", InfixOperator::NotEq),
    ];

    for (source, operator) in cases {
        assert_eq!(parse_expression(source), Expression::infix(int(5), operator, int(5)));
    }

    assert_eq!(
        parse_expression("true != false"),
        Expression::infix(
            Expression::Boolean(true),
            InfixOperator::NotEq,
            Expression::Boolean(false)
        )
    );
}

#[test]
fn test_if_expression() {
    let expected = Expression::if_else(
        Expression::infix(ident("x"), InfixOperator::Lt, ident("y")),
        BlockStatement::new(vec![ident("x").into_statement()]),
        None,
    );
    assert_eq!(parse_expression("if (x < y) { x }"), expected);
}

#[test]
fn test_if_else_expression() {
    let expected = Expression::if_else(
        Expression::infix(ident("x"), InfixOperator::Lt, ident("y")),
        BlockStatement::new(vec![ident("x").into_statement()]),
        Some(BlockStatement::new(vec![ident("y").into_statement()])),
    );
    assert_eq!(parse_expression("if (x < y) { x } else { y }"), expected);
}

#[test]
fn test_function_literal() {
    let expected = Expression::function(
        vec![Identifier::new("x"), Identifier::new("y")],
        BlockStatement::new(vec![
            Expression::infix(ident("x"), InfixOperator::Add, ident("y")).into_statement()
        ]),
    );
    assert_eq!(parse_expression("fn(x, y) { x + y; }"), expected);
}

#[test]
fn test_function_parameters() {
    let cases: [(&str, &[&str]); 3] = [
        ("fn() {};", &[]),
        ("fn(x) {};", &["x"]),
        ("fn(x, y, z) {};", &["x", "y", "z"]),
    ];

    for (source, names) in cases {
        let Expression::Function(literal) = parse_expression(source) else {
            panic!("expected a function literal for {source:?}");
        };
        let parsed: Vec<&str> = literal.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(parsed, names.to_vec());
        assert!(literal.body.statements.is_empty());
    }
}

#[test]
fn test_macro_literal() {
    let Expression::Macro(literal) = parse_expression("macro(x, y) { x + y; }") else {
        panic!("expected a macro literal");
    };
    assert_eq!(
        literal.parameters,
        vec![Identifier::new("x"), Identifier::new("y")]
    );
    assert_eq!(literal.body.to_string(), "{ (x + y) }");
}

#[test]
fn test_call_expression() {
    let expected = Expression::call(
        ident("add"),
        vec![
            int(1),
            Expression::infix(int(2), InfixOperator::Mul, int(3)),
            Expression::infix(int(4), InfixOperator::Add, int(5)),
        ],
    );
    assert_eq!(parse_expression("add(1, 2 * 3, 4 + 5);"), expected);
    assert_eq!(parse_expression("f()"), Expression::call(ident("f"), vec![]));
}

#[test]
fn test_array_literal() {
    assert_eq!(parse_expression("[]"), Expression::array(vec![]));
    assert_eq!(
        parse_expression("[1, 2 * 2, 3 + 3]"),
        Expression::array(vec![
            int(1),
            Expression::infix(int(2), InfixOperator::Mul, int(2)),
            Expression::infix(int(3), InfixOperator::Add, int(3)),
        ])
    );
}

#[test]
fn test_index_expression() {
    assert_eq!(
        parse_expression("myArray[1 + 1]"),
        Expression::index(
            ident("myArray"),
            Expression::infix(int(1), InfixOperator::Add, int(1))
        )
    );
}

#[test]
fn test_hash_literals() {
    assert_eq!(parse_expression("{}"), Expression::hash(vec![]));

    assert_eq!(
        parse_expression(r#"{"one": 1, "two": 2, "three": 3}"#),
        Expression::hash(vec![
            (Expression::string("one"), int(1)),
            (Expression::string("two"), int(2)),
            (Expression::string("three"), int(3)),
        ])
    );

    assert_eq!(
        parse_expression("{true: 1, 2: 0 + 1}"),
        Expression::hash(vec![
            (Expression::Boolean(true), int(1)),
            (int(2), Expression::infix(int(0), InfixOperator::Add, int(1))),
        ])
    );
}

#[test]
fn test_hash_keeps_source_order() {
    let rendered = parse_expression(r#"{"b": 1, "a": 2}"#).to_string();
    assert_eq!(rendered, r#"{"b": 1, "a": 2}"#);
}

#[test]
fn test_empty_source() {
    assert_eq!(parse_ok(""), Program::default());
    assert_eq!(parse_ok("  \n\t "), Program::default());
}

#[test]
fn test_unclosed_block_ends_at_eof() {
    let program = parse_ok("if (x) { y");
    assert_eq!(program.to_string(), "if x { y }");
}

#[test]
fn test_deeply_nested_grouping() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_expression(&source), int(1));
}

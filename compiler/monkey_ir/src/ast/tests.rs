use super::*;
use pretty_assertions::assert_eq;

fn int(value: i64) -> Expression {
    Expression::IntegerLiteral(value)
}

#[test]
fn test_let_statement_rendering() {
    let program = Program::new(vec![Statement::Let(LetStatement {
        name: Identifier::new("myVar"),
        value: Expression::identifier("anotherVar"),
    })]);

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_operator_rendering_is_fully_parenthesised() {
    let expr = Expression::infix(
        Expression::prefix(PrefixOperator::Neg, Expression::identifier("a")),
        InfixOperator::Mul,
        Expression::identifier("b"),
    );

    assert_eq!(expr.to_string(), "((-a) * b)");
}

#[test]
fn test_if_else_rendering() {
    let expr = Expression::if_else(
        Expression::prefix(
            PrefixOperator::Not,
            Expression::infix(int(10), InfixOperator::Gt, int(5)),
        ),
        BlockStatement::new(vec![Expression::call(
            Expression::identifier("puts"),
            vec![Expression::string("not greater")],
        )
        .into_statement()]),
        Some(BlockStatement::new(vec![Expression::call(
            Expression::identifier("puts"),
            vec![Expression::string("greater")],
        )
        .into_statement()])),
    );

    assert_eq!(
        expr.to_string(),
        r#"if (!(10 > 5)) { puts("not greater") } else { puts("greater") }"#
    );
}

#[test]
fn test_function_and_call_rendering() {
    let func = Expression::function(
        vec![Identifier::new("x"), Identifier::new("y")],
        BlockStatement::new(vec![Expression::infix(
            Expression::identifier("x"),
            InfixOperator::Add,
            Expression::identifier("y"),
        )
        .into_statement()]),
    );
    assert_eq!(func.to_string(), "fn(x, y) { (x + y) }");

    let call = Expression::call(func, vec![int(1), int(2)]);
    assert_eq!(call.to_string(), "fn(x, y) { (x + y) }(1, 2)");
}

#[test]
fn test_empty_block_rendering() {
    let func = Expression::function(vec![], BlockStatement::default());
    assert_eq!(func.to_string(), "fn() { }");
}

#[test]
fn test_collection_rendering() {
    let array = Expression::array(vec![int(1), Expression::string("two"), Expression::Boolean(true)]);
    assert_eq!(array.to_string(), r#"[1, "two", true]"#);

    let index = Expression::index(Expression::identifier("xs"), int(0));
    assert_eq!(index.to_string(), "(xs[0])");

    let hash = Expression::hash(vec![
        (Expression::string("one"), int(1)),
        (int(2), Expression::Boolean(false)),
    ]);
    assert_eq!(hash.to_string(), r#"{"one": 1, 2: false}"#);
}

#[test]
fn test_program_statements_on_separate_lines() {
    let program = Program::new(vec![
        Statement::Return(ReturnStatement { value: int(5) }),
        int(6).into_statement(),
    ]);

    assert_eq!(program.to_string(), "return 5;\n6");
}

#[test]
fn test_callee_name() {
    let call = CallExpression {
        function: Box::new(Expression::identifier("unquote")),
        arguments: vec![],
    };
    assert_eq!(call.callee_name(), Some("unquote"));

    let call = CallExpression {
        function: Box::new(Expression::function(vec![], BlockStatement::default())),
        arguments: vec![],
    };
    assert_eq!(call.callee_name(), None);
}

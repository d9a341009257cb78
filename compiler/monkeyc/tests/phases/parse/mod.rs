//! Parser behaviour seen through the pipeline.

use pretty_assertions::assert_eq;

use crate::common::{render, session};

#[test]
fn precedence_renders_fully_parenthesized() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
    ];
    for (input, expected) in cases {
        assert_eq!(render(input), expected, "{input}");
    }
}

#[test]
fn parse_errors_prevent_evaluation() {
    let (mut session, print) = session();

    let Err(errors) = session.run(r#"puts("never"); let = 1;"#) else {
        panic!("expected parse errors");
    };

    assert_eq!(
        errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["expected next token to be IDENT, got = instead"]
    );
    assert_eq!(print.get_output(), "");
}

#[test]
fn parse_errors_are_in_source_order() {
    let (mut session, _) = session();

    let Err(errors) = session.run("let x 5; let = 10; let 838383;") else {
        panic!("expected parse errors");
    };

    assert_eq!(
        errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        [
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "expected next token to be IDENT, got INT instead",
        ]
    );
}

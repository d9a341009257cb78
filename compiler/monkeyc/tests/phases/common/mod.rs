//! Shared helpers for phase tests.

use monkey_eval::{buffer_handler, SharedPrintHandler, Value};
use monkeyc::{parse_source, Session};

/// A session whose `puts` output is captured.
pub fn session() -> (Session, SharedPrintHandler) {
    let print = buffer_handler();
    (Session::with_print_handler(print.clone()), print)
}

/// Run `source` in a fresh session, failing the test on parse errors.
pub fn run(source: &str) -> Value {
    let (mut session, _) = session();
    match session.run(source) {
        Ok(value) => value,
        Err(errors) => panic!("parse errors in {source:?}: {errors:?}"),
    }
}

/// Canonical rendering of `source`, failing the test on parse errors.
pub fn render(source: &str) -> String {
    let output = parse_source(source);
    assert!(!output.has_errors(), "{:?}", output.error_messages());
    output.program.to_string()
}

//! Debug commands: `lex`, `parse` and `expand`.

use monkey_lexer::tokenize;

use super::{parse_or_report, read_file, CommandError};
use crate::Session;

/// Print the token stream, one token per line.
pub fn lex_file(path: &str) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let tokens = tokenize(&source);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {token}");
    }
    Ok(())
}

/// Print the canonical rendering of the parsed program.
pub fn parse_file(path: &str) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let program = parse_or_report(path, &source)?;
    println!("{program}");
    Ok(())
}

/// Print the program after macro definitions are removed and macro calls
/// are expanded.
pub fn expand_file(path: &str) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let program = parse_or_report(path, &source)?;

    let mut session = Session::new();
    let expanded = session.expand(program);
    println!("{expanded}");

    match session.take_expansion_errors().into_iter().next() {
        Some(error) => Err(CommandError::Runtime(error)),
        None => Ok(()),
    }
}

//! Pratt parser for Monkey.
//!
//! Statements are dispatched on their first token; expressions are parsed
//! by precedence climbing over per-token prefix and infix rules (see
//! `grammar::expr`). Errors never abort the parse: each failing statement
//! is recorded and skipped, and the caller receives the best-effort
//! [`Program`] together with every [`ParseError`] in source order.

mod cursor;
mod error;
mod grammar;
mod precedence;

pub use cursor::Cursor;
pub use error::ParseError;
pub use precedence::Precedence;

use monkey_ir::{Program, TokenKind};
use monkey_lexer::Lexer;
use tracing::trace;

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    pub fn new(lexer: Lexer<'src>) -> Self {
        Parser {
            cursor: Cursor::new(lexer),
            errors: Vec::new(),
        }
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();

        while !self.cursor.is_at_end() {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => self.recover(error),
            }
            self.cursor.advance();
        }

        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    /// Record `error` and skip to the end of the failed statement.
    ///
    /// Stops on `;` (the statement terminator, consumed by the caller's
    /// advance), `}` (belongs to an enclosing block) or end of input.
    fn recover(&mut self, error: ParseError) {
        trace!(%error, span = ?error.span(), "parse error");
        self.errors.push(error);

        while !matches!(
            self.cursor.current_kind(),
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        ) {
            self.cursor.advance();
        }
    }
}

/// Result of parsing: the program and every error found on the way.
///
/// A program with errors is partial and must not be evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error messages in source order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Parse a source text.
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(Lexer::new(source)).parse_program()
}

#[cfg(test)]
mod tests;

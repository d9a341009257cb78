//! Parse error types.

use monkey_ir::{Span, TokenKind};

/// A recoverable syntax error.
///
/// `Display` gives the diagnostic message; [`ParseError::span`] points at
/// the offending token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token after the current one was not the one the production needs.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    /// No expression can start with this token.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixRule { kind: TokenKind, span: Span },

    /// Integer literal outside the `i64` range.
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger { literal: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::NoPrefixRule { span, .. }
            | ParseError::InvalidInteger { span, .. } => *span,
        }
    }
}

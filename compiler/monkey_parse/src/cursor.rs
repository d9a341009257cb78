//! Two-token window over the lexer.

use std::mem;

use monkey_ir::{Span, Token, TokenKind};
use monkey_lexer::Lexer;

use crate::ParseError;

/// The current token plus one token of lookahead.
///
/// Tokens are pulled from the lexer on demand; at end of input both slots
/// hold `Eof` and advancing is a no-op.
pub struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Token,
    peek: Token,
}

impl<'src> Cursor<'src> {
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Cursor {
            lexer,
            current,
            peek,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    #[inline]
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is(TokenKind::Eof)
    }

    /// Shift the window by one token, returning the token shifted out.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// Advance if the lookahead is `kind`; otherwise leave the window as is
    /// and report what was found instead.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_is(kind) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind,
                found: self.peek.kind,
                span: self.peek.span,
            })
        }
    }
}

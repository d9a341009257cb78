//! Expression parsing.
//!
//! Pratt parsing: each token kind that can start an expression has a
//! prefix rule, and each token kind that can continue one has an infix
//! rule. [`Parser::parse_expression`] applies the prefix rule for the
//! current token, then keeps applying infix rules while the next token
//! binds tighter than the requested [`Precedence`].
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point and the rule tables
//! - `operators.rs`: Token to operator mapping
//! - `primary.rs`: Literals, identifiers, prefix operators, `if`, `fn`, `macro`
//! - `postfix.rs`: Infix operators, calls, indexing

mod operators;
mod postfix;
mod primary;

use monkey_ir::{Expression, TokenKind};
use monkey_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser, Precedence};

type PrefixRule<'src> = fn(&mut Parser<'src>) -> Result<Expression, ParseError>;
type InfixRule<'src> = fn(&mut Parser<'src>, Expression) -> Result<Expression, ParseError>;

impl<'src> Parser<'src> {
    /// Parse an expression whose infix operators all bind tighter than
    /// `precedence`.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Result<Expression, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
        let kind = self.cursor.current_kind();
        let Some(prefix) = Self::prefix_rule(kind) else {
            return Err(ParseError::NoPrefixRule {
                kind,
                span: self.cursor.current_span(),
            });
        };
        let mut left = prefix(self)?;

        while !self.cursor.peek_is(TokenKind::Semicolon)
            && precedence < Precedence::of(self.cursor.peek_kind())
        {
            let Some(infix) = Self::infix_rule(self.cursor.peek_kind()) else {
                return Ok(left);
            };
            self.cursor.advance();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    fn prefix_rule(kind: TokenKind) -> Option<PrefixRule<'src>> {
        let rule: PrefixRule<'src> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::String => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::Macro => Self::parse_macro_literal,
            TokenKind::LBracket => Self::parse_array_literal,
            TokenKind::LBrace => Self::parse_hash_literal,
            _ => return None,
        };
        Some(rule)
    }

    fn infix_rule(kind: TokenKind) -> Option<InfixRule<'src>> {
        let rule: InfixRule<'src> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => Self::parse_infix_expression,
            TokenKind::LParen => Self::parse_call_expression,
            TokenKind::LBracket => Self::parse_index_expression,
            _ => return None,
        };
        Some(rule)
    }

    /// Comma-separated expressions up to `end`, starting on the opening
    /// delimiter and ending on `end`.
    pub(crate) fn parse_expression_list(
        &mut self,
        end: TokenKind,
    ) -> Result<Vec<Expression>, ParseError> {
        let mut list = Vec::new();

        if self.cursor.peek_is(end) {
            self.cursor.advance();
            return Ok(list);
        }

        self.cursor.advance();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.cursor.peek_is(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.cursor.expect_peek(end)?;
        Ok(list)
    }
}

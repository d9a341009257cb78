//! Infix and Postfix Parsing
//!
//! Rules that extend an already-parsed left operand: binary operators,
//! calls and indexing. Each starts on the operator token.

use monkey_ir::{Expression, TokenKind};

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    /// `<left> <op> <right>`. Left-associative: the right operand only takes
    /// operators that bind tighter than this one.
    pub(crate) fn parse_infix_expression(
        &mut self,
        left: Expression,
    ) -> Result<Expression, ParseError> {
        let Some(operator) = self.match_infix_op() else {
            return Ok(left);
        };
        let precedence = Precedence::of(self.cursor.current_kind());
        self.cursor.advance();
        let right = self.parse_expression(precedence)?;
        Ok(Expression::infix(left, operator, right))
    }

    /// `<callee>(<args>)`
    pub(crate) fn parse_call_expression(
        &mut self,
        function: Expression,
    ) -> Result<Expression, ParseError> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Ok(Expression::call(function, arguments))
    }

    /// `<left>[<index>]`
    pub(crate) fn parse_index_expression(
        &mut self,
        left: Expression,
    ) -> Result<Expression, ParseError> {
        self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::RBracket)?;
        Ok(Expression::index(left, index))
    }
}

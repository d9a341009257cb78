//! Operator Matching Helpers

use monkey_ir::{InfixOperator, PrefixOperator, TokenKind};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_prefix_op(&self) -> Option<PrefixOperator> {
        match self.cursor.current_kind() {
            TokenKind::Bang => Some(PrefixOperator::Not),
            TokenKind::Minus => Some(PrefixOperator::Neg),
            _ => None,
        }
    }

    pub(crate) fn match_infix_op(&self) -> Option<InfixOperator> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(InfixOperator::Add),
            TokenKind::Minus => Some(InfixOperator::Sub),
            TokenKind::Asterisk => Some(InfixOperator::Mul),
            TokenKind::Slash => Some(InfixOperator::Div),
            TokenKind::Lt => Some(InfixOperator::Lt),
            TokenKind::Gt => Some(InfixOperator::Gt),
            TokenKind::Eq => Some(InfixOperator::Eq),
            TokenKind::NotEq => Some(InfixOperator::NotEq),
            _ => None,
        }
    }
}

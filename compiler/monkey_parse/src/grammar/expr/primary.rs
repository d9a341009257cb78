//! Primary Expression Parsing
//!
//! Literals, identifiers, prefix operators, grouping, and the keyword
//! expressions `if`, `fn` and `macro`.

use monkey_ir::{Expression, Identifier, MacroLiteral, TokenKind};
use std::rc::Rc;

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    pub(crate) fn parse_identifier(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::identifier(self.cursor.current().literal.as_str()))
    }

    pub(crate) fn parse_integer_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.cursor.current();
        token
            .literal
            .parse::<i64>()
            .map(Expression::IntegerLiteral)
            .map_err(|_| ParseError::InvalidInteger {
                literal: token.literal.clone(),
                span: token.span,
            })
    }

    pub(crate) fn parse_string_literal(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::string(self.cursor.current().literal.as_str()))
    }

    pub(crate) fn parse_boolean(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::Boolean(self.cursor.check(TokenKind::True)))
    }

    /// `!<expr>` or `-<expr>`
    pub(crate) fn parse_prefix_expression(&mut self) -> Result<Expression, ParseError> {
        let Some(operator) = self.match_prefix_op() else {
            return Err(ParseError::NoPrefixRule {
                kind: self.cursor.current_kind(),
                span: self.cursor.current_span(),
            });
        };
        self.cursor.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::prefix(operator, right))
    }

    /// `( <expr> )`
    pub(crate) fn parse_grouped_expression(&mut self) -> Result<Expression, ParseError> {
        self.cursor.advance();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::RParen)?;
        Ok(expression)
    }

    /// `if (<cond>) { ... }` with an optional `else { ... }`
    pub(crate) fn parse_if_expression(&mut self) -> Result<Expression, ParseError> {
        self.cursor.expect_peek(TokenKind::LParen)?;
        self.cursor.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::RParen)?;

        self.cursor.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block();

        let alternative = if self.cursor.peek_is(TokenKind::Else) {
            self.cursor.advance();
            self.cursor.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block())
        } else {
            None
        };

        Ok(Expression::if_else(condition, consequence, alternative))
    }

    /// `fn(<params>) { ... }`
    pub(crate) fn parse_function_literal(&mut self) -> Result<Expression, ParseError> {
        self.cursor.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;
        self.cursor.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();
        Ok(Expression::function(parameters, body))
    }

    /// `macro(<params>) { ... }`
    pub(crate) fn parse_macro_literal(&mut self) -> Result<Expression, ParseError> {
        self.cursor.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;
        self.cursor.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();
        Ok(Expression::Macro(MacroLiteral {
            parameters,
            body: Rc::new(body),
        }))
    }

    /// Parameter names, starting on `(` and ending on `)`.
    fn parse_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut parameters = Vec::new();

        if self.cursor.peek_is(TokenKind::RParen) {
            self.cursor.advance();
            return Ok(parameters);
        }

        self.cursor.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.cursor.current().literal.as_str()));

        while self.cursor.peek_is(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.cursor.current().literal.as_str()));
        }

        self.cursor.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }

    /// `[<elements>]`
    pub(crate) fn parse_array_literal(&mut self) -> Result<Expression, ParseError> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Ok(Expression::array(elements))
    }

    /// `{<key>: <value>, ...}`
    pub(crate) fn parse_hash_literal(&mut self) -> Result<Expression, ParseError> {
        let mut pairs = Vec::new();

        while !self.cursor.peek_is(TokenKind::RBrace) {
            self.cursor.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.cursor.expect_peek(TokenKind::Colon)?;
            self.cursor.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.cursor.peek_is(TokenKind::RBrace) {
                self.cursor.expect_peek(TokenKind::Comma)?;
            }
        }

        self.cursor.expect_peek(TokenKind::RBrace)?;
        Ok(Expression::hash(pairs))
    }
}

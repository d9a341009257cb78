//! Statement and block parsing.
//!
//! Every production starts with the cursor on its first token and leaves
//! it on its last token; the caller advances past it.

mod expr;

use monkey_ir::{
    BlockStatement, ExpressionStatement, Identifier, LetStatement, ReturnStatement, Statement,
    TokenKind,
};

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr>;`
    fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
        self.cursor.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cursor.current().literal.as_str());

        self.cursor.expect_peek(TokenKind::Assign)?;
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Let(LetStatement { name, value }))
    }

    /// `return <expr>;`
    fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Return(ReturnStatement { value }))
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Expression(ExpressionStatement { expression }))
    }

    fn skip_optional_semicolon(&mut self) {
        if self.cursor.peek_is(TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }

    /// `{ <statements> }`, starting on the `{`.
    ///
    /// Errors inside the block are recorded here so that one bad statement
    /// does not discard the rest of the body. A block left open at end of
    /// input ends there.
    pub(crate) fn parse_block(&mut self) -> BlockStatement {
        let mut statements = Vec::new();
        self.cursor.advance();

        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            match self.parse_statement() {
                Ok(statement) => {
                    statements.push(statement);
                    self.cursor.advance();
                }
                Err(error) => {
                    self.recover(error);
                    if !self.cursor.check(TokenKind::RBrace) {
                        self.cursor.advance();
                    }
                }
            }
        }

        BlockStatement::new(statements)
    }
}

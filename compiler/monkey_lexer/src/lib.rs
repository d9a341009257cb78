//! Lexer for Monkey using logos.
//!
//! The parser pulls tokens one at a time through [`Lexer::next_token`];
//! tools that want the whole stream use [`tokenize`].

use logos::Logos;
use monkey_ir::{Span, Token, TokenKind};

/// Raw token from logos (before conversion to [`TokenKind`]).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[token("macro")]
    Macro,

    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Kept as text: range checking belongs to the parser.
    #[regex(r"[0-9]+")]
    Int,

    // No escape sequences.
    #[regex(r#""[^"]*""#)]
    String,

    // Runs to end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// Pull-based tokenizer over a source string.
pub struct Lexer<'src> {
    logos: logos::Lexer<'src, RawToken>,
    eof_offset: u32,
    /// Set once the iterator has handed out `Eof`.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            logos: RawToken::lexer(source),
            eof_offset: u32::try_from(source.len()).unwrap_or(u32::MAX),
            finished: false,
        }
    }

    /// Next token. Once input is exhausted every call returns `Eof`.
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.logos.next() else {
            return Token::eof(self.eof_offset);
        };

        let span = Span::from_range(self.logos.span());
        let slice = self.logos.slice();

        match result {
            Ok(raw) => {
                let (kind, literal) = convert_token(raw, slice);
                Token::new(kind, literal, span)
            }
            Err(()) => Token::new(TokenKind::Illegal, slice, span),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields `Eof` exactly once, then ends.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

/// Lex a whole source text. The last token is always `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

fn convert_token(raw: RawToken, slice: &str) -> (TokenKind, &str) {
    let kind = match raw {
        RawToken::Int => TokenKind::Int,
        RawToken::String => return (TokenKind::String, &slice[1..slice.len() - 1]),
        RawToken::UnterminatedString => TokenKind::Illegal,
        RawToken::Ident => TokenKind::Ident,

        // Keywords
        RawToken::Function => TokenKind::Function,
        RawToken::Let => TokenKind::Let,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,
        RawToken::Macro => TokenKind::Macro,

        // Operators
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Asterisk => TokenKind::Asterisk,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,

        // Delimiters
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
    };
    (kind, slice)
}

//! Monkey IR - tokens, syntax tree and tree rewriting.
//!
//! This crate holds the data shared by every phase of the pipeline:
//! - [`Span`] for source locations (diagnostics only)
//! - [`Token`] / [`TokenKind`] produced by the lexer
//! - The AST ([`Program`], [`Statement`], [`Expression`], ...) with its
//!   canonical source rendering via `Display`
//! - The [`modify`] engine that rewrites a tree bottom-up
//!
//! # Design
//!
//! AST nodes form a strict tree: every node owns its children. Function and
//! macro bodies sit behind an `Rc` so that runtime closures can share the body
//! with the tree that produced them without copying it. Rewriting never
//! mutates a shared body in place; it rebuilds the node.

pub mod ast;
pub mod modify;
mod span;
mod token;

pub use ast::{
    ArrayLiteral, BlockStatement, CallExpression, Expression, ExpressionStatement,
    FunctionLiteral, HashLiteral, Identifier, IfExpression, IndexExpression, InfixExpression,
    InfixOperator, LetStatement, MacroLiteral, PrefixExpression, PrefixOperator, Program,
    ReturnStatement, Statement,
};
pub use modify::{Modifier, Node};
pub use span::Span;
pub use token::{Token, TokenKind};

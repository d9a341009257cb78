//! Syntax tree.
//!
//! Statements and expressions are closed enums so that every traversal
//! (rendering, rewriting, evaluation) is an exhaustive `match` checked by the
//! compiler.
//!
//! # Module Structure
//!
//! - `mod.rs`: node types and constructors
//! - `operators.rs`: prefix and infix operators
//! - `display.rs`: canonical source rendering

mod display;
mod operators;

use std::rc::Rc;

pub use operators::{InfixOperator, PrefixOperator};

/// Root of a parsed source text: statements in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let(LetStatement),
    /// `return <value>;`
    Return(ReturnStatement),
    /// A bare expression, optionally followed by `;`.
    Expression(ExpressionStatement),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
    pub value: Expression,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

/// `{ ... }` body of an `if` branch, function or macro.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        BlockStatement { statements }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

/// Expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i64),
    StringLiteral(String),
    Boolean(bool),
    Prefix(Box<PrefixExpression>),
    Infix(Box<InfixExpression>),
    If(Box<IfExpression>),
    Function(FunctionLiteral),
    Macro(MacroLiteral),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(Box<IndexExpression>),
    Hash(HashLiteral),
}

/// `<op><right>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixExpression {
    pub operator: PrefixOperator,
    pub right: Expression,
}

/// `<left> <op> <right>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfixExpression {
    pub left: Expression,
    pub operator: InfixOperator,
    pub right: Expression,
}

/// `if (<condition>) { ... } else { ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfExpression {
    pub condition: Expression,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

/// `fn(<parameters>) { <body> }`
///
/// The body is shared with every closure created from this literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
}

/// `macro(<parameters>) { <body> }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroLiteral {
    pub parameters: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
}

/// `<function>(<arguments>)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpression {
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl CallExpression {
    /// Name of the callee when it is a plain identifier.
    pub fn callee_name(&self) -> Option<&str> {
        match &*self.function {
            Expression::Identifier(ident) => Some(&ident.name),
            _ => None,
        }
    }
}

/// `[<elements>]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
}

/// `<left>[<index>]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexExpression {
    pub left: Expression,
    pub index: Expression,
}

/// `{<key>: <value>, ...}`, pairs kept in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashLiteral {
    pub pairs: Vec<(Expression, Expression)>,
}

// Constructors used by the parser, the macro expander and tests.

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral(value.into())
    }

    pub fn prefix(operator: PrefixOperator, right: Expression) -> Self {
        Expression::Prefix(Box::new(PrefixExpression { operator, right }))
    }

    pub fn infix(left: Expression, operator: InfixOperator, right: Expression) -> Self {
        Expression::Infix(Box::new(InfixExpression {
            left,
            operator,
            right,
        }))
    }

    pub fn index(left: Expression, index: Expression) -> Self {
        Expression::Index(Box::new(IndexExpression { left, index }))
    }

    pub fn call(function: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call(CallExpression {
            function: Box::new(function),
            arguments,
        })
    }

    pub fn if_else(
        condition: Expression,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    ) -> Self {
        Expression::If(Box::new(IfExpression {
            condition,
            consequence,
            alternative,
        }))
    }

    pub fn function(parameters: Vec<Identifier>, body: BlockStatement) -> Self {
        Expression::Function(FunctionLiteral {
            parameters,
            body: Rc::new(body),
        })
    }

    pub fn array(elements: Vec<Expression>) -> Self {
        Expression::Array(ArrayLiteral { elements })
    }

    pub fn hash(pairs: Vec<(Expression, Expression)>) -> Self {
        Expression::Hash(HashLiteral { pairs })
    }

    /// Wrap in an expression statement.
    pub fn into_statement(self) -> Statement {
        Statement::Expression(ExpressionStatement { expression: self })
    }
}

#[cfg(test)]
mod tests;

//! Bottom-up tree rewriting.
//!
//! [`modify`] rebuilds a tree, offering every expression, block and statement
//! to a [`Modifier`] after its children have been rewritten (post-order, in
//! source order). This is the only place outside rendering that matches every
//! node kind, so new node kinds need handling here and nowhere else for macro
//! expansion to see them.
//!
//! Identifiers in binding position (`let` names, parameter lists) are not
//! expressions and are never offered to the modifier.
//!
//! # Example
//!
//! ```
//! use monkey_ir::modify::{map_expressions, Node};
//! use monkey_ir::{Expression, InfixOperator};
//!
//! let tree = Expression::infix(
//!     Expression::IntegerLiteral(1),
//!     InfixOperator::Add,
//!     Expression::IntegerLiteral(2),
//! );
//! let doubled = map_expressions(Node::Expression(tree), |expr| match expr {
//!     Expression::IntegerLiteral(n) => Expression::IntegerLiteral(n * 2),
//!     other => other,
//! });
//! assert_eq!(doubled.to_string(), "(2 + 4)");
//! ```

use std::fmt;
use std::rc::Rc;

use monkey_stack::ensure_sufficient_stack;

use crate::ast::{
    ArrayLiteral, BlockStatement, CallExpression, Expression, ExpressionStatement,
    FunctionLiteral, HashLiteral, IfExpression, IndexExpression, InfixExpression, LetStatement,
    MacroLiteral, PrefixExpression, Program, ReturnStatement, Statement,
};

/// Any rewritable tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Program(Program),
    Statement(Statement),
    Block(BlockStatement),
    Expression(Expression),
}

impl Node {
    pub fn into_expression(self) -> Option<Expression> {
        match self {
            Node::Expression(expression) => Some(expression),
            _ => None,
        }
    }
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Node::Program(program)
    }
}

impl From<Statement> for Node {
    fn from(statement: Statement) -> Self {
        Node::Statement(statement)
    }
}

impl From<BlockStatement> for Node {
    fn from(block: BlockStatement) -> Self {
        Node::Block(block)
    }
}

impl From<Expression> for Node {
    fn from(expression: Expression) -> Self {
        Node::Expression(expression)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(program) => write!(f, "{program}"),
            Node::Statement(statement) => write!(f, "{statement}"),
            Node::Block(block) => write!(f, "{block}"),
            Node::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

/// Per-kind rewrite hooks. Every hook defaults to the identity.
///
/// A hook receives a node whose children have already been rewritten and
/// returns its replacement. Hooks are typed by position, so a rewrite can
/// never put a statement where an expression belongs.
pub trait Modifier {
    fn modify_expression(&mut self, expression: Expression) -> Expression {
        expression
    }

    fn modify_block(&mut self, block: BlockStatement) -> BlockStatement {
        block
    }

    fn modify_statement(&mut self, statement: Statement) -> Statement {
        statement
    }

    fn modify_program(&mut self, program: Program) -> Program {
        program
    }
}

/// Rewrite any node.
pub fn modify<M: Modifier + ?Sized>(node: Node, modifier: &mut M) -> Node {
    match node {
        Node::Program(program) => Node::Program(modify_program(program, modifier)),
        Node::Statement(statement) => Node::Statement(modify_statement(statement, modifier)),
        Node::Block(block) => Node::Block(modify_block(block, modifier)),
        Node::Expression(expression) => Node::Expression(modify_expression(expression, modifier)),
    }
}

/// Rewrite only expressions, using a closure.
pub fn map_expressions(node: Node, transform: impl FnMut(Expression) -> Expression) -> Node {
    struct ExpressionFn<F>(F);

    impl<F: FnMut(Expression) -> Expression> Modifier for ExpressionFn<F> {
        fn modify_expression(&mut self, expression: Expression) -> Expression {
            (self.0)(expression)
        }
    }

    modify(node, &mut ExpressionFn(transform))
}

pub fn modify_program<M: Modifier + ?Sized>(program: Program, modifier: &mut M) -> Program {
    let statements = program
        .statements
        .into_iter()
        .map(|statement| modify_statement(statement, modifier))
        .collect();
    modifier.modify_program(Program { statements })
}

pub fn modify_statement<M: Modifier + ?Sized>(statement: Statement, modifier: &mut M) -> Statement {
    let statement = match statement {
        Statement::Let(LetStatement { name, value }) => Statement::Let(LetStatement {
            name,
            value: modify_expression(value, modifier),
        }),
        Statement::Return(ReturnStatement { value }) => Statement::Return(ReturnStatement {
            value: modify_expression(value, modifier),
        }),
        Statement::Expression(ExpressionStatement { expression }) => {
            Statement::Expression(ExpressionStatement {
                expression: modify_expression(expression, modifier),
            })
        }
    };
    modifier.modify_statement(statement)
}

pub fn modify_block<M: Modifier + ?Sized>(block: BlockStatement, modifier: &mut M) -> BlockStatement {
    let statements = block
        .statements
        .into_iter()
        .map(|statement| modify_statement(statement, modifier))
        .collect();
    modifier.modify_block(BlockStatement { statements })
}

/// Rewrite a shared body. The original `Rc` is reused when this is its only
/// owner, otherwise the body is copied first.
fn modify_shared_block<M: Modifier + ?Sized>(
    body: Rc<BlockStatement>,
    modifier: &mut M,
) -> Rc<BlockStatement> {
    Rc::new(modify_block(Rc::unwrap_or_clone(body), modifier))
}

fn modify_all<M: Modifier + ?Sized>(expressions: Vec<Expression>, modifier: &mut M) -> Vec<Expression> {
    expressions
        .into_iter()
        .map(|expression| modify_expression(expression, modifier))
        .collect()
}

pub fn modify_expression<M: Modifier + ?Sized>(expression: Expression, modifier: &mut M) -> Expression {
    ensure_sufficient_stack(|| {
        let expression = rebuild_children(expression, modifier);
        modifier.modify_expression(expression)
    })
}

fn rebuild_children<M: Modifier + ?Sized>(expression: Expression, modifier: &mut M) -> Expression {
    match expression {
        Expression::Identifier(_)
        | Expression::IntegerLiteral(_)
        | Expression::StringLiteral(_)
        | Expression::Boolean(_) => expression,
        Expression::Prefix(prefix) => {
            let PrefixExpression { operator, right } = *prefix;
            Expression::prefix(operator, modify_expression(right, modifier))
        }
        Expression::Infix(infix) => {
            let InfixExpression {
                left,
                operator,
                right,
            } = *infix;
            let left = modify_expression(left, modifier);
            let right = modify_expression(right, modifier);
            Expression::infix(left, operator, right)
        }
        Expression::If(if_expr) => {
            let IfExpression {
                condition,
                consequence,
                alternative,
            } = *if_expr;
            let condition = modify_expression(condition, modifier);
            let consequence = modify_block(consequence, modifier);
            let alternative = alternative.map(|block| modify_block(block, modifier));
            Expression::if_else(condition, consequence, alternative)
        }
        Expression::Function(FunctionLiteral { parameters, body }) => {
            Expression::Function(FunctionLiteral {
                parameters,
                body: modify_shared_block(body, modifier),
            })
        }
        Expression::Macro(MacroLiteral { parameters, body }) => Expression::Macro(MacroLiteral {
            parameters,
            body: modify_shared_block(body, modifier),
        }),
        Expression::Call(CallExpression {
            function,
            arguments,
        }) => {
            let function = modify_expression(*function, modifier);
            let arguments = modify_all(arguments, modifier);
            Expression::call(function, arguments)
        }
        Expression::Array(ArrayLiteral { elements }) => Expression::Array(ArrayLiteral {
            elements: modify_all(elements, modifier),
        }),
        Expression::Index(index) => {
            let IndexExpression { left, index } = *index;
            let left = modify_expression(left, modifier);
            let index = modify_expression(index, modifier);
            Expression::index(left, index)
        }
        Expression::Hash(HashLiteral { pairs }) => {
            let pairs = pairs
                .into_iter()
                .map(|(key, value)| {
                    let key = modify_expression(key, modifier);
                    let value = modify_expression(value, modifier);
                    (key, value)
                })
                .collect();
            Expression::Hash(HashLiteral { pairs })
        }
    }
}

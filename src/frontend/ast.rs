//! Abstract Syntax Tree definitions for Jimmy Script

use std::fmt;

use crate::frontend::token::Token;
use crate::utils::Interval;

/// An expression node
#[derive(Debug, Clone)]
pub enum Node {
    /// Integer or float literal
    NumberLiteral { token: Token },
    /// `+x` or `-x`
    UnaryOp {
        op: Token,
        operand: Box<Node>,
        interval: Interval,
    },
    /// `left op right`
    BinaryOp {
        op: Token,
        left: Box<Node>,
        right: Box<Node>,
        interval: Interval,
    },
    /// `let name = value`
    VarAssign {
        name: Token,
        value: Box<Node>,
        interval: Interval,
    },
    /// A bare identifier
    VarAccess { name: Token },
}

impl Node {
    pub fn unary(op: Token, operand: Node) -> Self {
        let interval = op.interval.merge(operand.interval());
        Node::UnaryOp {
            op,
            operand: Box::new(operand),
            interval,
        }
    }

    pub fn binary(op: Token, left: Node, right: Node) -> Self {
        let interval = left.interval().merge(right.interval());
        Node::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            interval,
        }
    }

    /// `keyword` is the `let` token the assignment starts at
    pub fn assign(keyword: &Token, name: Token, value: Node) -> Self {
        let interval = keyword.interval.merge(value.interval());
        Node::VarAssign {
            name,
            value: Box::new(value),
            interval,
        }
    }

    /// The source span covered by this node
    pub fn interval(&self) -> &Interval {
        match self {
            Node::NumberLiteral { token } => &token.interval,
            Node::UnaryOp { interval, .. } => interval,
            Node::BinaryOp { interval, .. } => interval,
            Node::VarAssign { interval, .. } => interval,
            Node::VarAccess { name } => &name.interval,
        }
    }
}

/// S-expression-like rendering, used in debug logs and tests
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::NumberLiteral { token } => match &token.value {
                Some(value) => write!(f, "{}", value),
                None => write!(f, "?"),
            },
            Node::UnaryOp { op, operand, .. } => write!(f, "({:?} {})", op.kind, operand),
            Node::BinaryOp { op, left, right, .. } => {
                write!(f, "({} {:?} {})", left, op.kind, right)
            }
            Node::VarAssign { name, value, .. } => {
                write!(f, "(let {} {})", name.text().unwrap_or("?"), value)
            }
            Node::VarAccess { name } => write!(f, "{}", name.text().unwrap_or("?")),
        }
    }
}

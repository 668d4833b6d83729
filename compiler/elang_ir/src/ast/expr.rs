//! Expression nodes.

use super::{BinaryOp, Block, UnaryOp};
use crate::Name;

/// Expression node.
///
/// A closed set: the evaluator matches exhaustively, so every kind either
/// produces a value or an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// String literal. Evaluates to a fresh string handle each time.
    Str(String),
    /// Vector literal, elements evaluated left to right.
    Vector(Vec<Expr>),
    /// Variable reference.
    Ident(Name),
    /// Arithmetic, logical or comparison operator.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Unary operator.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Range construction: `range(end)` or `range(start, end)`.
    Range {
        start: Option<Box<Expr>>,
        end: Box<Expr>,
    },
    /// Membership test: `element in collection`.
    In {
        element: Box<Expr>,
        collection: Box<Expr>,
    },
    /// Indexing: `target[index]`, 1-based.
    Index { target: Box<Expr>, index: Box<Expr> },
    /// Function call by name.
    Call { callee: Name, args: Vec<Expr> },
    /// A block used as an expression; yields its trailing value.
    Block(Block),
}

impl Expr {
    /// Short description of the node kind, for tracing.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Expr::Int(_) => "int",
            Expr::Float(_) => "float",
            Expr::Bool(_) => "bool",
            Expr::Str(_) => "string",
            Expr::Vector(_) => "vector",
            Expr::Ident(_) => "ident",
            Expr::Binary { .. } => "binary",
            Expr::Unary { .. } => "unary",
            Expr::Range { .. } => "range",
            Expr::In { .. } => "in",
            Expr::Index { .. } => "index",
            Expr::Call { .. } => "call",
            Expr::Block(_) => "block",
        }
    }
}

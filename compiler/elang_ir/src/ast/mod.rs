//! Syntax tree handed to the engine by the parser.
//!
//! The tree is assumed to be syntactically valid; the engine never
//! re-validates it.

mod expr;
mod operators;
mod stmt;

pub use expr::Expr;
pub use operators::{BinaryOp, UnaryOp, AT_METHOD, IN_METHOD, RANGE_METHOD};
pub use stmt::{Block, FunctionDecl, Param, SharedBlock, Stmt};

#[cfg(test)]
mod tests;

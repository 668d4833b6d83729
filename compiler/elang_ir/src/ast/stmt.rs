//! Statement nodes, blocks and function declarations.

use std::sync::Arc;

use super::Expr;
use crate::{Name, TypeTag};

/// A sequence of statements. Its value is the value of the last statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// Function bodies are shared between the declaration and every overload
/// registered from it.
pub type SharedBlock = Arc<Block>;

/// Declared parameter: binding name and required type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Name,
    pub ty: TypeTag,
}

/// User function declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Name,
    pub params: Vec<Param>,
    pub body: SharedBlock,
}

/// Statement kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// Bare expression; its value becomes the block's running value.
    Expr(Expr),
    /// `name = value`.
    Assign { name: Name, value: Expr },
    /// `if condition { .. } else { .. }`.
    If {
        condition: Expr,
        then_branch: Block,
        else_branch: Option<Block>,
    },
    /// `while condition { .. }`.
    While { condition: Expr, body: Block },
    /// `for binding in iterable { .. }`.
    For {
        binding: Name,
        iterable: Expr,
        body: Block,
    },
    /// Function declaration, registered into the enclosing scope.
    Function(FunctionDecl),
}

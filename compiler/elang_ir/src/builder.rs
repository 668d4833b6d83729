//! Programmatic construction of syntax trees.
//!
//! The parser is an external collaborator; embedders without one (and the
//! engine's own tests) build programs with `AstBuilder`, which interns
//! every identifier through the interpreter's interner.

#![allow(
    clippy::unused_self,
    reason = "uniform `b.int(1)`-style builder API even for constructors that need no interner"
)]

use std::sync::Arc;

use crate::ast::{BinaryOp, Block, Expr, FunctionDecl, Param, Stmt, UnaryOp};
use crate::{Name, StringInterner, TypeTag};

/// Builder for expressions, statements and blocks.
#[derive(Clone, Copy)]
pub struct AstBuilder<'a> {
    interner: &'a StringInterner,
}

impl<'a> AstBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        AstBuilder { interner }
    }

    /// Intern an identifier.
    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    // Literals

    pub fn int(&self, n: i64) -> Expr {
        Expr::Int(n)
    }

    pub fn float(&self, f: f64) -> Expr {
        Expr::Float(f)
    }

    pub fn bool(&self, b: bool) -> Expr {
        Expr::Bool(b)
    }

    pub fn str(&self, s: &str) -> Expr {
        Expr::Str(s.to_owned())
    }

    pub fn vector(&self, items: Vec<Expr>) -> Expr {
        Expr::Vector(items)
    }

    pub fn ident(&self, s: &str) -> Expr {
        Expr::Ident(self.name(s))
    }

    // Operators

    pub fn binary(&self, op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::Add, left, right)
    }

    pub fn sub(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::Sub, left, right)
    }

    pub fn mul(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::Mul, left, right)
    }

    pub fn div(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::Div, left, right)
    }

    pub fn and(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::And, left, right)
    }

    pub fn or(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::Or, left, right)
    }

    pub fn eq(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::Eq, left, right)
    }

    pub fn ne(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::NotEq, left, right)
    }

    pub fn lt(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::Lt, left, right)
    }

    pub fn lte(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::LtEq, left, right)
    }

    pub fn gt(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::Gt, left, right)
    }

    pub fn gte(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::GtEq, left, right)
    }

    pub fn not(&self, operand: Expr) -> Expr {
        Expr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(operand),
        }
    }

    /// `range(end)`: `1..end` inclusive.
    pub fn range(&self, end: Expr) -> Expr {
        Expr::Range {
            start: None,
            end: Box::new(end),
        }
    }

    /// `range(start, end)`: `start..end` inclusive.
    pub fn range_from(&self, start: Expr, end: Expr) -> Expr {
        Expr::Range {
            start: Some(Box::new(start)),
            end: Box::new(end),
        }
    }

    /// `element in collection`.
    pub fn contains(&self, element: Expr, collection: Expr) -> Expr {
        Expr::In {
            element: Box::new(element),
            collection: Box::new(collection),
        }
    }

    /// `target[index]`, 1-based.
    pub fn index(&self, target: Expr, index: Expr) -> Expr {
        Expr::Index {
            target: Box::new(target),
            index: Box::new(index),
        }
    }

    pub fn call(&self, callee: &str, args: Vec<Expr>) -> Expr {
        Expr::Call {
            callee: self.name(callee),
            args,
        }
    }

    /// A block in expression position.
    pub fn block_expr(&self, stmts: Vec<Stmt>) -> Expr {
        Expr::Block(Block::new(stmts))
    }

    // Statements

    pub fn expr(&self, expr: Expr) -> Stmt {
        Stmt::Expr(expr)
    }

    pub fn assign(&self, name: &str, value: Expr) -> Stmt {
        Stmt::Assign {
            name: self.name(name),
            value,
        }
    }

    pub fn if_(&self, condition: Expr, then_branch: Vec<Stmt>) -> Stmt {
        Stmt::If {
            condition,
            then_branch: Block::new(then_branch),
            else_branch: None,
        }
    }

    pub fn if_else(&self, condition: Expr, then_branch: Vec<Stmt>, else_branch: Vec<Stmt>) -> Stmt {
        Stmt::If {
            condition,
            then_branch: Block::new(then_branch),
            else_branch: Some(Block::new(else_branch)),
        }
    }

    pub fn while_(&self, condition: Expr, body: Vec<Stmt>) -> Stmt {
        Stmt::While {
            condition,
            body: Block::new(body),
        }
    }

    pub fn for_each(&self, binding: &str, iterable: Expr, body: Vec<Stmt>) -> Stmt {
        Stmt::For {
            binding: self.name(binding),
            iterable,
            body: Block::new(body),
        }
    }

    /// Function declaration with `(name, type)` parameters.
    pub fn function(&self, name: &str, params: &[(&str, TypeTag)], body: Vec<Stmt>) -> Stmt {
        Stmt::Function(FunctionDecl {
            name: self.name(name),
            params: params
                .iter()
                .map(|&(param, ty)| Param {
                    name: self.name(param),
                    ty,
                })
                .collect(),
            body: Arc::new(Block::new(body)),
        })
    }

    /// Top-level program block.
    pub fn program(&self, stmts: Vec<Stmt>) -> Block {
        Block::new(stmts)
    }
}

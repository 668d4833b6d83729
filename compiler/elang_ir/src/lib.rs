//! E language IR: interned names, type tags and the syntax tree.
//!
//! This crate contains the data handed to the evaluation engine:
//! - `Name` and `StringInterner` for identifiers
//! - `TypeTag` for value kinds and declared parameter types
//! - `Expr`, `Stmt`, `Block` and `FunctionDecl`, a closed set of nodes
//! - `AstBuilder` for constructing programs without a parser
//!
//! Operators are plain data here. `BinaryOp::method_name` gives the
//! reserved call name each one desugars to.

pub mod ast;
mod builder;
mod interner;
mod name;
mod type_tag;

pub use ast::{
    BinaryOp, Block, Expr, FunctionDecl, Param, SharedBlock, Stmt, UnaryOp, AT_METHOD, IN_METHOD,
    RANGE_METHOD,
};
pub use builder::AstBuilder;
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use type_tag::TypeTag;

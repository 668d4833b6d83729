use super::*;
use std::collections::HashSet;

#[test]
fn test_binary_method_names_are_distinct() {
    let names: HashSet<_> = BinaryOp::ALL.iter().map(|op| op.method_name()).collect();
    assert_eq!(names.len(), BinaryOp::ALL.len());
}

#[test]
fn test_method_names_use_reserved_form() {
    for op in BinaryOp::ALL {
        let name = op.method_name();
        assert!(name.starts_with("__") && name.ends_with("__"), "{name}");
    }
    assert_eq!(UnaryOp::Not.method_name(), "__not__");
}

#[test]
fn test_symbols() {
    assert_eq!(BinaryOp::GtEq.as_symbol(), ">=");
    assert_eq!(BinaryOp::Or.as_symbol(), "or");
}

#[test]
fn test_empty_block() {
    assert!(Block::default().is_empty());
    assert!(!Block::new(vec![Stmt::Expr(Expr::Int(1))]).is_empty());
}

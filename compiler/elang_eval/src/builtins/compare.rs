//! Equality and ordering operators.
//!
//! Numeric pairs (mixed ones promoted), Boolean pairs and, for ordering,
//! String pairs have dedicated overloads. `__eq__`/`__ne__` also cover
//! String, Vector and Void pairs by kind-then-payload equality. Pairs of
//! different kinds have no overload; the evaluator falls back to
//! [`unmatched_equality`] for them, so they compare unequal unless a later
//! registration says otherwise.

use std::cmp::Ordering;

use elang_ir::{BinaryOp, TypeTag};
use elang_value::{no_matching_overload, EvalError, Value};

use super::{float_operands, Registrar, NUMERIC_PAIRS};

/// Ordering of two same-family values.
///
/// `Ok(None)` for unordered floats (NaN); `Err` for kinds with no ordering.
fn partial_ordering(name: &str, args: &[Value]) -> Result<Option<Ordering>, EvalError> {
    if let Some((a, b)) = float_operands(args) {
        return Ok(a.partial_cmp(&b));
    }
    match args {
        [Value::Int(a), Value::Int(b)] => Ok(Some(a.cmp(b))),
        [Value::Bool(a), Value::Bool(b)] => Ok(Some(a.cmp(b))),
        [Value::Str(a), Value::Str(b)] => Ok(Some(a.borrow().as_str().cmp(b.borrow().as_str()))),
        _ => Err(no_matching_overload(name, args)),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CompareOp {
    Eq,
    Ne,
    Gte,
    Gt,
    Lte,
    Lt,
}

impl CompareOp {
    const ORDERING: [CompareOp; 4] = [Self::Gte, Self::Gt, Self::Lte, Self::Lt];

    fn method_name(self) -> &'static str {
        match self {
            Self::Eq => BinaryOp::Eq.method_name(),
            Self::Ne => BinaryOp::NotEq.method_name(),
            Self::Gte => BinaryOp::GtEq.method_name(),
            Self::Gt => BinaryOp::Gt.method_name(),
            Self::Lte => BinaryOp::LtEq.method_name(),
            Self::Lt => BinaryOp::Lt.method_name(),
        }
    }

    /// Whether the operator holds for an ordering. Unordered never holds,
    /// except for `!=`.
    fn holds(self, ordering: Option<Ordering>) -> bool {
        match self {
            Self::Eq => ordering == Some(Ordering::Equal),
            Self::Ne => ordering != Some(Ordering::Equal),
            Self::Gte => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            Self::Gt => ordering == Some(Ordering::Greater),
            Self::Lte => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            Self::Lt => ordering == Some(Ordering::Less),
        }
    }

    fn apply(self, args: &[Value]) -> Result<Value, EvalError> {
        let ordering = partial_ordering(self.method_name(), args)?;
        Ok(Value::Bool(self.holds(ordering)))
    }

    /// `==`/`!=` by kind-then-payload equality.
    fn apply_equality(self, args: &[Value]) -> Result<Value, EvalError> {
        match args {
            [a, b] => Ok(Value::Bool(a.equals(b) == (self == Self::Eq))),
            _ => Err(no_matching_overload(self.method_name(), args)),
        }
    }
}

/// `==` on operands no `__eq__` overload accepts.
pub(crate) fn unmatched_equality(args: &[Value]) -> Result<Value, EvalError> {
    CompareOp::Eq.apply_equality(args)
}

/// `!=` on operands no `__ne__` overload accepts.
pub(crate) fn unmatched_inequality(args: &[Value]) -> Result<Value, EvalError> {
    CompareOp::Ne.apply_equality(args)
}

pub(super) fn register(registrar: &mut Registrar<'_>) {
    const BOOL_PAIR: [TypeTag; 2] = [TypeTag::Boolean, TypeTag::Boolean];
    const STRING_PAIR: [TypeTag; 2] = [TypeTag::String, TypeTag::String];
    const PAYLOAD_PAIRS: [[TypeTag; 2]; 3] = [
        STRING_PAIR,
        [TypeTag::Vector, TypeTag::Vector],
        [TypeTag::Void, TypeTag::Void],
    ];

    for op in [CompareOp::Eq, CompareOp::Ne] {
        for signature in NUMERIC_PAIRS.into_iter().chain([BOOL_PAIR]) {
            registrar.native(op.method_name(), &signature, move |args| op.apply(args));
        }
        for signature in PAYLOAD_PAIRS {
            registrar.native(op.method_name(), &signature, move |args| op.apply_equality(args));
        }
    }

    for op in CompareOp::ORDERING {
        for signature in NUMERIC_PAIRS.into_iter().chain([BOOL_PAIR, STRING_PAIR]) {
            registrar.native(op.method_name(), &signature, move |args| op.apply(args));
        }
    }
}

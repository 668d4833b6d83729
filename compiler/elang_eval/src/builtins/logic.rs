//! Boolean operators.
//!
//! `and`/`or` are ordinary calls, so both operands are evaluated before
//! dispatch; there is no short-circuiting.

use elang_ir::{BinaryOp, TypeTag, UnaryOp};
use elang_value::{no_matching_overload, Value};

use super::Registrar;

pub(super) fn register(registrar: &mut Registrar<'_>) {
    let not = UnaryOp::Not.method_name();
    registrar.native(not, &[TypeTag::Boolean], move |args| match args {
        [Value::Bool(b)] => Ok(Value::Bool(!b)),
        _ => Err(no_matching_overload(not, args)),
    });

    let and = BinaryOp::And.method_name();
    registrar.native(and, &[TypeTag::Boolean, TypeTag::Boolean], move |args| {
        match args {
            [Value::Bool(a), Value::Bool(b)] => Ok(Value::Bool(*a && *b)),
            _ => Err(no_matching_overload(and, args)),
        }
    });

    let or = BinaryOp::Or.method_name();
    registrar.native(or, &[TypeTag::Boolean, TypeTag::Boolean], move |args| {
        match args {
            [Value::Bool(a), Value::Bool(b)] => Ok(Value::Bool(*a || *b)),
            _ => Err(no_matching_overload(or, args)),
        }
    });
}

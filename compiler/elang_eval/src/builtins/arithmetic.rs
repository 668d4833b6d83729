//! Arithmetic operators.
//!
//! Integer pairs use checked arithmetic; overflow and division by zero are
//! errors. Any pair involving a Float promotes the Integer side and follows
//! IEEE semantics, so Float division by zero yields an infinity or NaN.

use elang_ir::{BinaryOp, TypeTag};
use elang_value::{
    division_by_zero, integer_overflow, no_matching_overload, EvalResult, Value,
};

use super::{float_operands, Registrar, NUMERIC_PAIRS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    const ALL: [ArithOp; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    fn method_name(self) -> &'static str {
        match self {
            Self::Add => BinaryOp::Add.method_name(),
            Self::Sub => BinaryOp::Sub.method_name(),
            Self::Mul => BinaryOp::Mul.method_name(),
            Self::Div => BinaryOp::Div.method_name(),
        }
    }

    fn ints(self, a: i64, b: i64) -> EvalResult {
        let result = match self {
            Self::Add => a.checked_add(b).ok_or_else(|| integer_overflow("addition")),
            Self::Sub => a
                .checked_sub(b)
                .ok_or_else(|| integer_overflow("subtraction")),
            Self::Mul => a
                .checked_mul(b)
                .ok_or_else(|| integer_overflow("multiplication")),
            Self::Div => {
                if b == 0 {
                    return Err(division_by_zero());
                }
                a.checked_div(b).ok_or_else(|| integer_overflow("division"))
            }
        };
        result.map(Value::int)
    }

    fn floats(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
        }
    }

    fn apply(self, args: &[Value]) -> EvalResult {
        if let [Value::Int(a), Value::Int(b)] = args {
            return self.ints(*a, *b);
        }
        match float_operands(args) {
            Some((a, b)) => Ok(Value::float(self.floats(a, b))),
            None => Err(no_matching_overload(self.method_name(), args)),
        }
    }
}

/// String concatenation into a fresh buffer.
fn concat(args: &[Value]) -> EvalResult {
    match args {
        [Value::Str(a), Value::Str(b)] => {
            let mut joined = a.borrow().clone();
            joined.push_str(&b.borrow());
            Ok(Value::string(joined))
        }
        _ => Err(no_matching_overload(ArithOp::Add.method_name(), args)),
    }
}

pub(super) fn register(registrar: &mut Registrar<'_>) {
    for op in ArithOp::ALL {
        for signature in NUMERIC_PAIRS {
            registrar.native(op.method_name(), &signature, move |args| op.apply(args));
        }
    }
    registrar.native(
        ArithOp::Add.method_name(),
        &[TypeTag::String, TypeTag::String],
        concat,
    );
}

//! Native standard library.
//!
//! Everything the language does to values, operators included, is an
//! overload registered here into the global scope. Each native is
//! registered once per supported signature; the dispatcher picks the first
//! whose kinds match, so more specific signatures come before `Any`
//! parameters.
//!
//! No prelude overload takes `Any` in every position of an operator, so
//! later registrations for new kind pairs stay reachable. The behavior of
//! `==`, `!=` and indexing on kinds nothing accepts is an
//! [`OperatorFallback`], applied by the evaluator only after resolution
//! finds no overload.
//!
//! # Module Structure
//!
//! - [`arithmetic`]: `__add__ __sub__ __mul__ __div__`
//! - [`compare`]: `__eq__ __ne__ __gte__ __gt__ __lte__ __lt__`
//! - [`logic`]: `__not__ __and__ __or__`
//! - [`collections`]: `range zeros ones length push! pop! __at__ __in__`
//! - [`strings`]: `upper! lower! upper lower`
//! - [`io`]: `show`
//!
//! Natives destructure their argument slice exhaustively. The slice always
//! matches the registered signature, but a mismatch still surfaces as
//! `NoMatchingOverload` rather than a panic.

mod arithmetic;
mod collections;
mod compare;
mod io;
mod logic;
mod strings;

use std::rc::Rc;

use elang_ir::{BinaryOp, Name, StringInterner, TypeTag};
use elang_value::{integer_overflow, EvalResult, Value};

use crate::environment::{Environment, ScopeId};
use crate::method::{Argument, Method};
use crate::print_handler::SharedPrintHandler;

/// Register the full prelude into the global scope.
pub(crate) fn register_prelude(
    env: &mut Environment,
    interner: &StringInterner,
    print_handler: &SharedPrintHandler,
) {
    let mut registrar = Registrar { env, interner };
    arithmetic::register(&mut registrar);
    compare::register(&mut registrar);
    logic::register(&mut registrar);
    collections::register(&mut registrar);
    strings::register(&mut registrar);
    io::register(&mut registrar, print_handler);
}

/// Result of an operator whose operands no overload accepts.
pub(crate) type OperatorFallback = fn(&[Value]) -> EvalResult;

/// Fallback for a binary operator, if it has one.
pub(crate) fn binary_fallback(op: BinaryOp) -> Option<OperatorFallback> {
    match op {
        BinaryOp::Eq => Some(compare::unmatched_equality),
        BinaryOp::NotEq => Some(compare::unmatched_inequality),
        _ => None,
    }
}

/// Fallback for `__at__`: a typed error naming the offending operand.
pub(crate) fn index_fallback(args: &[Value]) -> EvalResult {
    Err(collections::not_indexable(args))
}

/// Registers natives into the global scope.
pub(crate) struct Registrar<'a> {
    env: &'a mut Environment,
    interner: &'a StringInterner,
}

impl Registrar<'_> {
    /// Register `f` under `name` for one positional signature.
    pub(crate) fn native<F>(&mut self, name: &str, signature: &[TypeTag], f: F)
    where
        F: Fn(&[Value]) -> EvalResult + 'static,
    {
        let params = signature
            .iter()
            .map(|ty| Argument::new(Name::EMPTY, *ty))
            .collect();
        let method = Method::native(self.interner.intern(name), params, Rc::new(f));
        self.env.register_overload(ScopeId::GLOBAL, method);
    }
}

/// Integer-to-float promotion for mixed-kind overloads.
#[expect(
    clippy::cast_precision_loss,
    reason = "promotion follows IEEE conversion, as for any i64 -> f64"
)]
#[inline]
pub(crate) fn promote(n: i64) -> f64 {
    n as f64
}

/// Float operands of a mixed or float pair. `None` for anything else,
/// Integer pairs included.
pub(crate) fn float_operands(args: &[Value]) -> Option<(f64, f64)> {
    match args {
        [Value::Int(a), Value::Float(b)] => Some((promote(*a), *b)),
        [Value::Float(a), Value::Int(b)] => Some((*a, promote(*b))),
        [Value::Float(a), Value::Float(b)] => Some((*a, *b)),
        _ => None,
    }
}

/// A collection length as an Integer value.
pub(crate) fn length_value(len: usize) -> EvalResult {
    i64::try_from(len)
        .map(Value::int)
        .map_err(|_| integer_overflow("length"))
}

/// Every ordered pair of numeric kinds.
pub(crate) const NUMERIC_PAIRS: [[TypeTag; 2]; 4] = [
    [TypeTag::Integer, TypeTag::Integer],
    [TypeTag::Integer, TypeTag::Float],
    [TypeTag::Float, TypeTag::Integer],
    [TypeTag::Float, TypeTag::Float],
];

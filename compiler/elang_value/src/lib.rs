//! E language runtime values and evaluation errors.
//!
//! - `Value`: the closed tagged union every computation produces
//! - `Heap<T>`: the shared mutable handle behind `String` and `Vector`
//! - `EvalError`, `EvalErrorKind`, `EvalResult`: the failure taxonomy
//!
//! Error construction goes through the factory functions re-exported here.

pub mod errors;
mod value;

pub use errors::{
    capacity_exceeded, condition_not_boolean, division_by_zero, index_out_of_bounds,
    integer_overflow, no_matching_overload, not_iterable, pop_empty_vector,
    recursion_limit_exceeded, type_mismatch, unbound_variable, unknown_function, BacktraceFrame,
    EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
};
pub use value::{Heap, TypeTag, Value};

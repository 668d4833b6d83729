//! Vector and range natives, indexing and membership.
//!
//! Indexing and ranges are 1-based. `push!` and `pop!` mutate the vector's
//! shared buffer, so every alias observes the change.

use elang_ir::{TypeTag, AT_METHOD, IN_METHOD, RANGE_METHOD};
use elang_value::{
    capacity_exceeded, index_out_of_bounds, no_matching_overload, pop_empty_vector,
    type_mismatch, EvalError, EvalResult, Value,
};

use super::{length_value, Registrar};

/// Zero-based position of 1-based `index` in a collection of `len`.
fn position(index: i64, len: usize) -> Result<usize, EvalError> {
    usize::try_from(index)
        .ok()
        .filter(|i| (1..=len).contains(i))
        .map(|i| i - 1)
        .ok_or_else(|| index_out_of_bounds(index, len))
}

/// Longest vector `range`, `zeros` and `ones` will build.
pub(crate) const MAX_VECTOR_LEN: usize = 1 << 28;

/// Allocate room for `requested` elements, failing on sizes past
/// [`MAX_VECTOR_LEN`] or ones the allocator refuses.
fn vector_with_capacity(requested: u64) -> Result<Vec<Value>, EvalError> {
    let len = usize::try_from(requested)
        .ok()
        .filter(|len| *len <= MAX_VECTOR_LEN)
        .ok_or_else(|| capacity_exceeded(requested, MAX_VECTOR_LEN))?;
    let mut items = Vec::new();
    items
        .try_reserve_exact(len)
        .map_err(|_| capacity_exceeded(requested, MAX_VECTOR_LEN))?;
    Ok(items)
}

/// `min..=max` as Integer values; empty when `max < min`.
fn inclusive_range(min: i64, max: i64) -> EvalResult {
    let span = i128::from(max) - i128::from(min) + 1;
    let requested = u64::try_from(span.max(0)).unwrap_or(u64::MAX);
    let mut items = vector_with_capacity(requested)?;
    items.extend((min..=max).map(Value::int));
    Ok(Value::vector(items))
}

fn filled(n: i64, fill: i64) -> EvalResult {
    let requested = u64::try_from(n).unwrap_or(0);
    let mut items = vector_with_capacity(requested)?;
    items.extend((0..requested).map(|_| Value::int(fill)));
    Ok(Value::vector(items))
}

fn range(args: &[Value]) -> EvalResult {
    match args {
        [Value::Int(max)] => inclusive_range(1, *max),
        [Value::Int(min), Value::Int(max)] => inclusive_range(*min, *max),
        _ => Err(no_matching_overload(RANGE_METHOD, args)),
    }
}

fn length(args: &[Value]) -> EvalResult {
    match args {
        [Value::Vector(items)] => length_value(items.borrow().len()),
        [Value::Str(s)] => length_value(s.borrow().chars().count()),
        _ => Err(no_matching_overload("length", args)),
    }
}

/// Append in place; returns the same handle.
fn push(args: &[Value]) -> EvalResult {
    match args {
        [vector @ Value::Vector(items), value] => {
            items.borrow_mut().push(value.clone());
            Ok(vector.clone())
        }
        _ => Err(no_matching_overload("push!", args)),
    }
}

/// Remove and return the trailing element.
fn pop(args: &[Value]) -> EvalResult {
    match args {
        [Value::Vector(items)] => items.borrow_mut().pop().ok_or_else(pop_empty_vector),
        _ => Err(no_matching_overload("pop!", args)),
    }
}

fn at(args: &[Value]) -> EvalResult {
    match args {
        [Value::Vector(items), Value::Int(index)] => {
            let items = items.borrow();
            let pos = position(*index, items.len())?;
            Ok(items[pos].clone())
        }
        [Value::Str(s), Value::Int(index)] => {
            let s = s.borrow();
            let len = s.chars().count();
            let pos = position(*index, len)?;
            let c = s.chars().nth(pos).ok_or_else(|| index_out_of_bounds(*index, len))?;
            Ok(Value::string(c.to_string()))
        }
        _ => Err(not_indexable(args)),
    }
}

/// Indexing with no overload for the operand kinds: a bad index on a
/// collection, or a target that is not a collection.
pub(crate) fn not_indexable(args: &[Value]) -> EvalError {
    match args {
        [Value::Vector(_) | Value::Str(_), index] => {
            type_mismatch("index", TypeTag::Integer, index)
        }
        [target, _] => type_mismatch("indexed value", TypeTag::Vector, target),
        _ => no_matching_overload(AT_METHOD, args),
    }
}

/// `__in__(collection, element)`.
fn contains(args: &[Value]) -> EvalResult {
    match args {
        [Value::Vector(items), element] => {
            Ok(Value::Bool(items.borrow().iter().any(|item| item.equals(element))))
        }
        [Value::Str(haystack), Value::Str(needle)] => Ok(Value::Bool(
            haystack.borrow().contains(needle.borrow().as_str()),
        )),
        _ => Err(no_matching_overload(IN_METHOD, args)),
    }
}

pub(super) fn register(registrar: &mut Registrar<'_>) {
    use TypeTag::{Any, Integer, String, Vector};

    registrar.native(RANGE_METHOD, &[Integer], range);
    registrar.native(RANGE_METHOD, &[Integer, Integer], range);

    registrar.native("zeros", &[Integer], |args| match args {
        [Value::Int(n)] => filled(*n, 0),
        _ => Err(no_matching_overload("zeros", args)),
    });
    registrar.native("ones", &[Integer], |args| match args {
        [Value::Int(n)] => filled(*n, 1),
        _ => Err(no_matching_overload("ones", args)),
    });

    registrar.native("length", &[Vector], length);
    registrar.native("length", &[String], length);

    registrar.native("push!", &[Vector, Any], push);
    registrar.native("pop!", &[Vector], pop);

    registrar.native(AT_METHOD, &[Vector, Integer], at);
    registrar.native(AT_METHOD, &[String, Integer], at);

    registrar.native(IN_METHOD, &[Vector, Any], contains);
    registrar.native(IN_METHOD, &[String, String], contains);
}

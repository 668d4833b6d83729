use std::rc::Rc;

use super::*;
use crate::method::{Argument, NativeFn};
use elang_ir::{SharedInterner, TypeTag};
use pretty_assertions::assert_eq;

fn native_returning(n: i64) -> NativeFn {
    Rc::new(move |_: &[Value]| Ok(Value::int(n)))
}

fn overload(name: Name, ty: TypeTag, result: i64) -> Method {
    Method::native(name, vec![Argument::new(Name::EMPTY, ty)], native_returning(result))
}

fn call_first(env: &Environment, scope: ScopeId, name: Name) -> Option<Value> {
    let args = [Value::int(0)];
    env.collect_overloads(scope, name)
        .into_iter()
        .find(|m| m.accepts(&args))
        .and_then(|m| match &m.body {
            crate::method::MethodBody::Native(f) => f(&args[..]).ok(),
            crate::method::MethodBody::User { .. } => None,
        })
}

#[test]
fn test_lookup_walks_to_root() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.assign_variable(ScopeId::GLOBAL, x, Value::int(1), AssignMode::Local);
    let child = env.push_scope(ScopeId::GLOBAL).unwrap();
    let grandchild = env.push_scope(child).unwrap();

    assert_eq!(env.lookup_variable(grandchild, x), Some(Value::int(1)));
}

#[test]
fn test_lookup_unbound() {
    let interner = SharedInterner::default();
    let env = Environment::new();
    assert_eq!(env.lookup_variable(ScopeId::GLOBAL, interner.intern("y")), None);
}

#[test]
fn test_local_assign_shadows() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.assign_variable(ScopeId::GLOBAL, x, Value::int(1), AssignMode::Local);
    let child = env.push_scope(ScopeId::GLOBAL).unwrap();
    let target = env.assign_variable(child, x, Value::int(2), AssignMode::Local);

    assert_eq!(target, child);
    assert_eq!(env.lookup_variable(child, x), Some(Value::int(2)));
    assert_eq!(env.lookup_variable(ScopeId::GLOBAL, x), Some(Value::int(1)));
}

#[test]
fn test_write_through_updates_ancestor() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.assign_variable(ScopeId::GLOBAL, x, Value::int(1), AssignMode::Local);
    let child = env.push_scope(ScopeId::GLOBAL).unwrap();
    let target = env.assign_variable(child, x, Value::int(5), AssignMode::WriteThrough);

    assert_eq!(target, ScopeId::GLOBAL);
    assert!(env.scope(child).variable(x).is_none());
    assert_eq!(env.lookup_variable(ScopeId::GLOBAL, x), Some(Value::int(5)));
}

#[test]
fn test_write_through_prefers_nearest_binding() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.assign_variable(ScopeId::GLOBAL, x, Value::int(1), AssignMode::Local);
    let child = env.push_scope(ScopeId::GLOBAL).unwrap();
    env.assign_variable(child, x, Value::int(2), AssignMode::Local);
    let grandchild = env.push_scope(child).unwrap();
    env.assign_variable(grandchild, x, Value::int(3), AssignMode::WriteThrough);

    assert_eq!(env.scope(child).variable(x), Some(&Value::int(3)));
    assert_eq!(env.lookup_variable(ScopeId::GLOBAL, x), Some(Value::int(1)));
}

#[test]
fn test_write_through_fresh_name_is_innermost() {
    let interner = SharedInterner::default();
    let y = interner.intern("y");

    let mut env = Environment::new();
    let child = env.push_scope(ScopeId::GLOBAL).unwrap();
    let target = env.assign_variable(child, y, Value::Bool(true), AssignMode::WriteThrough);

    assert_eq!(target, child);
    assert_eq!(env.lookup_variable(ScopeId::GLOBAL, y), None);

    env.pop_scope(child);
    assert_eq!(env.lookup_variable(ScopeId::GLOBAL, y), None);
}

#[test]
fn test_push_pop_lifo() {
    let mut env = Environment::new();
    assert_eq!(env.depth(), 1);
    let a = env.push_scope(ScopeId::GLOBAL).unwrap();
    let b = env.push_scope(a).unwrap();
    assert_eq!(env.depth(), 3);
    assert_eq!(env.scope(b).parent(), Some(a));
    env.pop_scope(b);
    env.pop_scope(a);
    assert_eq!(env.depth(), 1);
}

#[test]
fn test_pop_reuses_ids() {
    let mut env = Environment::new();
    let first = env.push_scope(ScopeId::GLOBAL).unwrap();
    env.pop_scope(first);
    let second = env.push_scope(ScopeId::GLOBAL).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_collect_overloads_order() {
    let interner = SharedInterner::default();
    let f = interner.intern("f");

    let mut env = Environment::new();
    env.register_overload(ScopeId::GLOBAL, overload(f, TypeTag::Integer, 1));
    env.register_overload(ScopeId::GLOBAL, overload(f, TypeTag::Any, 2));
    let child = env.push_scope(ScopeId::GLOBAL).unwrap();
    env.register_overload(child, overload(f, TypeTag::Boolean, 3));

    let kinds: Vec<TypeTag> = env
        .collect_overloads(child, f)
        .iter()
        .map(|m| m.params[0].ty)
        .collect();
    assert_eq!(kinds, vec![TypeTag::Boolean, TypeTag::Integer, TypeTag::Any]);
}

#[test]
fn test_duplicate_signature_earlier_wins() {
    let interner = SharedInterner::default();
    let f = interner.intern("f");

    let mut env = Environment::new();
    env.register_overload(ScopeId::GLOBAL, overload(f, TypeTag::Integer, 1));
    env.register_overload(ScopeId::GLOBAL, overload(f, TypeTag::Integer, 2));

    assert_eq!(env.collect_overloads(ScopeId::GLOBAL, f).len(), 2);
    assert_eq!(call_first(&env, ScopeId::GLOBAL, f), Some(Value::int(1)));
}

#[test]
fn test_inner_overload_shadows_outer() {
    let interner = SharedInterner::default();
    let f = interner.intern("f");

    let mut env = Environment::new();
    env.register_overload(ScopeId::GLOBAL, overload(f, TypeTag::Integer, 1));
    let child = env.push_scope(ScopeId::GLOBAL).unwrap();
    env.register_overload(child, overload(f, TypeTag::Integer, 2));

    assert_eq!(call_first(&env, child, f), Some(Value::int(2)));
    assert_eq!(call_first(&env, ScopeId::GLOBAL, f), Some(Value::int(1)));
}

#[test]
fn test_overloads_are_scope_private() {
    let interner = SharedInterner::default();
    let f = interner.intern("f");

    let mut env = Environment::new();
    let child = env.push_scope(ScopeId::GLOBAL).unwrap();
    env.register_overload(child, overload(f, TypeTag::Integer, 1));

    assert!(env.collect_overloads(ScopeId::GLOBAL, f).is_empty());
    assert!(env.scope(ScopeId::GLOBAL).overloads(f).is_empty());
}

#[test]
fn test_full_arena_is_stack_overflow() {
    let mut env = Environment::with_scope_limit(3);
    let a = env.push_scope(ScopeId::GLOBAL).unwrap();
    let b = env.push_scope(a).unwrap();

    let err = env.push_scope(b).unwrap_err();
    assert_eq!(err.kind, elang_value::EvalErrorKind::StackOverflow { depth: 2 });
    assert_eq!(env.depth(), 3);

    env.pop_scope(b);
    assert_eq!(env.push_scope(a).unwrap(), b);
}

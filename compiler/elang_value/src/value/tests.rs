use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_kind_matches_payload() {
    assert_eq!(Value::Void.kind(), TypeTag::Void);
    assert_eq!(Value::int(1).kind(), TypeTag::Integer);
    assert_eq!(Value::float(1.0).kind(), TypeTag::Float);
    assert_eq!(Value::Bool(true).kind(), TypeTag::Boolean);
    assert_eq!(Value::string("a").kind(), TypeTag::String);
    assert_eq!(Value::vector(vec![]).kind(), TypeTag::Vector);
}

#[test]
fn test_kind_mismatch_is_not_equal() {
    assert!(!Value::int(1).equals(&Value::float(1.0)));
    assert!(!Value::int(1).equals(&Value::Bool(true)));
    assert!(!Value::string("1").equals(&Value::int(1)));
    assert!(!Value::Void.equals(&Value::vector(vec![])));
}

#[test]
fn test_payload_equality() {
    assert_eq!(Value::string("abc"), Value::string("abc"));
    assert_eq!(
        Value::vector(vec![Value::int(1), Value::string("x")]),
        Value::vector(vec![Value::int(1), Value::string("x")])
    );
    assert_ne!(
        Value::vector(vec![Value::int(1)]),
        Value::vector(vec![Value::int(1), Value::int(2)])
    );
    assert_ne!(Value::float(f64::NAN), Value::float(f64::NAN));
}

#[test]
fn test_clone_aliases_vector_buffer() {
    let v = Value::vector(vec![Value::int(1)]);
    let alias = v.clone();
    if let Some(items) = v.as_vector_handle() {
        items.borrow_mut().push(Value::int(2));
    }
    assert!(v.same_handle(&alias));
    assert_eq!(alias, Value::vector(vec![Value::int(1), Value::int(2)]));
}

#[test]
fn test_clone_aliases_string_buffer() {
    let s = Value::string("abc");
    let alias = s.clone();
    if let Some(buf) = s.as_str_handle() {
        buf.borrow_mut().make_ascii_uppercase();
    }
    assert_eq!(alias.display_value(), "ABC");
}

#[test]
fn test_fresh_values_do_not_alias() {
    let a = Value::string("x");
    let b = Value::string("x");
    assert!(!a.same_handle(&b));
    assert!(!Value::int(1).same_handle(&Value::int(1)));
}

#[test]
fn test_display() {
    let v = Value::vector(vec![Value::int(1), Value::float(2.5), Value::string("s")]);
    assert_eq!(v.to_string(), "[1, 2.5, \"s\"]");
    assert_eq!(Value::float(2.0).to_string(), "2.0");
    assert_eq!(Value::string("s").display_value(), "s");
    assert_eq!(Value::Void.to_string(), "void");
}

#[test]
fn test_accessors() {
    assert_eq!(Value::int(3).as_int(), Some(3));
    assert_eq!(Value::float(3.0).as_int(), None);
    assert_eq!(Value::float(3.0).as_float(), Some(3.0));
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert!(Value::int(1).as_vector_handle().is_none());
}

/// A vector holding a handle to itself.
fn self_containing() -> Value {
    let v = Value::vector(vec![Value::int(1)]);
    v.as_vector_handle().unwrap().borrow_mut().push(v.clone());
    v
}

fn break_cycle(v: &Value) {
    v.as_vector_handle().unwrap().borrow_mut().clear();
}

#[test]
fn test_self_containing_vectors_compare_without_looping() {
    let a = self_containing();
    let c = self_containing();
    assert!(a.equals(&c));
    assert!(a.equals(&a.clone()));

    let other = Value::vector(vec![Value::int(2), a.clone()]);
    assert!(!a.equals(&other));

    break_cycle(&a);
    break_cycle(&c);
}

#[test]
fn test_self_containing_vector_formats_placeholder() {
    let a = self_containing();
    assert_eq!(a.to_string(), "[1, [...]]");
    assert_eq!(format!("{a:?}"), "Vector([Int(1), Vector([...])])");

    // The same buffer twice side by side is not a cycle.
    let inner = Value::vector(vec![Value::int(7)]);
    let pair = Value::vector(vec![inner.clone(), inner]);
    assert_eq!(pair.to_string(), "[[7], [7]]");

    break_cycle(&a);
}

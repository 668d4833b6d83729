//! Runtime values for the E language engine.
//!
//! # Handle semantics
//!
//! `Int`, `Float` and `Bool` are plain copies. `Str` and `Vector` hold a
//! [`Heap`] handle: cloning the value aliases the buffer, so `push!`,
//! `pop!` and in-place case conversion are visible through every alias.
//!
//! ```text
//! let v = Value::vector(vec![]);
//! let alias = v.clone();
//! // push! through `v` is observed through `alias`
//! ```

mod heap;

use std::fmt;

use rustc_hash::FxHashSet;

pub use elang_ir::TypeTag;
pub use heap::Heap;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// Absence of a result.
    Void,
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Shared mutable string.
    Str(Heap<String>),
    /// Shared mutable vector.
    Vector(Heap<Vec<Value>>),
}

// Factory Methods (the only way to allocate a handle)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value with a fresh buffer.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a vector value with a fresh buffer.
    #[inline]
    pub fn vector(items: Vec<Value>) -> Self {
        Value::Vector(Heap::new(items))
    }
}

// Value Methods

impl Value {
    /// Kind tag of this value. Never `TypeTag::Any`.
    pub fn kind(&self) -> TypeTag {
        match self {
            Value::Void => TypeTag::Void,
            Value::Int(_) => TypeTag::Integer,
            Value::Float(_) => TypeTag::Float,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Str(_) => TypeTag::String,
            Value::Vector(_) => TypeTag::Vector,
        }
    }

    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The string handle, if this is a string.
    pub fn as_str_handle(&self) -> Option<&Heap<String>> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The vector handle, if this is a vector.
    pub fn as_vector_handle(&self) -> Option<&Heap<Vec<Value>>> {
        match self {
            Value::Vector(items) => Some(items),
            _ => None,
        }
    }

    /// Whether two values are the same handle.
    ///
    /// Always false for by-value kinds.
    pub fn same_handle(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a.ptr_eq(b),
            (Value::Vector(a), Value::Vector(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Kind-then-payload equality.
    ///
    /// A kind mismatch is "not equal", never an error; `Int(1)` and
    /// `Float(1.0)` are different. Vectors compare element-wise, and a
    /// vector that contains itself compares equal to any other vector of
    /// the same shape.
    pub fn equals(&self, other: &Value) -> bool {
        self.equals_within(other, &mut FxHashSet::default())
    }

    /// `visiting` holds the vector pairs already under comparison. Meeting
    /// one again closes a cycle, which adds no difference of its own.
    fn equals_within(
        &self,
        other: &Value,
        visiting: &mut FxHashSet<(*const (), *const ())>,
    ) -> bool {
        match (self, other) {
            (Value::Void, Value::Void) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            #[expect(clippy::float_cmp, reason = "payload equality is exact by definition")]
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
            (Value::Vector(a), Value::Vector(b)) => {
                if a.ptr_eq(b) || !visiting.insert((a.as_ptr(), b.as_ptr())) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len()
                    && a.iter().zip(b.iter()).all(|(x, y)| x.equals_within(y, visiting))
            }
            _ => false,
        }
    }

    /// Display value for user output (strings unquoted).
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.borrow().clone(),
            _ => self.to_string(),
        }
    }
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// Output form for [`Value::fmt_nested`].
#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Debug,
    Display,
}

impl Value {
    /// Format with `open` holding the vectors currently being printed; a
    /// vector reached again through itself prints as `[...]`.
    fn fmt_nested(
        &self,
        f: &mut fmt::Formatter<'_>,
        style: Style,
        open: &mut Vec<*const ()>,
    ) -> fmt::Result {
        let items = match (self, style) {
            (Value::Vector(items), _) => items,
            (Value::Void, Style::Debug) => return write!(f, "Void"),
            (Value::Void, Style::Display) => return write!(f, "void"),
            (Value::Int(n), Style::Debug) => return write!(f, "Int({n})"),
            (Value::Int(n), Style::Display) => return write!(f, "{n}"),
            (Value::Float(n), Style::Debug) => return write!(f, "Float({n:?})"),
            (Value::Float(n), Style::Display) => return write!(f, "{n:?}"),
            (Value::Bool(b), Style::Debug) => return write!(f, "Bool({b})"),
            (Value::Bool(b), Style::Display) => return write!(f, "{b}"),
            (Value::Str(s), Style::Debug) => return write!(f, "Str({:?})", &*s.borrow()),
            (Value::Str(s), Style::Display) => return write!(f, "\"{}\"", &*s.borrow()),
        };

        let (prefix, suffix) = match style {
            Style::Debug => ("Vector([", "])"),
            Style::Display => ("[", "]"),
        };
        let ptr = items.as_ptr();
        if open.contains(&ptr) {
            return write!(f, "{prefix}...{suffix}");
        }
        open.push(ptr);
        write!(f, "{prefix}")?;
        for (i, item) in items.borrow().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            item.fmt_nested(f, style, open)?;
        }
        open.pop();
        write!(f, "{suffix}")
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_nested(f, Style::Debug, &mut Vec::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_nested(f, Style::Display, &mut Vec::new())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests;

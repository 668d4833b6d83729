//! Type tags for runtime values and declared parameters.

use std::fmt;

/// Kind of a runtime value, plus the `Any` marker used in signatures.
///
/// `Any` only appears in declared parameter types; no value ever has kind
/// `Any`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    Void,
    Integer,
    Float,
    Boolean,
    String,
    Vector,
    /// Matches every value kind.
    Any,
}

impl TypeTag {
    /// Whether a parameter declared with this tag accepts a value of `kind`.
    ///
    /// No coercion: an `Integer` value does not satisfy a `Float` parameter.
    #[inline]
    pub fn accepts(self, kind: TypeTag) -> bool {
        self == TypeTag::Any || self == kind
    }

    /// Source-level name of the tag.
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Void => "Void",
            TypeTag::Integer => "Integer",
            TypeTag::Float => "Float",
            TypeTag::Boolean => "Boolean",
            TypeTag::String => "String",
            TypeTag::Vector => "Vector",
            TypeTag::Any => "Any",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

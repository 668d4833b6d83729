//! Case conversion.
//!
//! The `!` forms rewrite the string's shared buffer and return the same
//! handle; the plain forms return a new string.

use elang_ir::TypeTag;
use elang_value::{no_matching_overload, EvalResult, Value};

use super::Registrar;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Case {
    Upper,
    Lower,
}

impl Case {
    fn convert(self, s: &str) -> String {
        match self {
            Self::Upper => s.to_uppercase(),
            Self::Lower => s.to_lowercase(),
        }
    }

    fn in_place_name(self) -> &'static str {
        match self {
            Self::Upper => "upper!",
            Self::Lower => "lower!",
        }
    }

    fn copy_name(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }

    fn in_place(self, args: &[Value]) -> EvalResult {
        match args {
            [value @ Value::Str(s)] => {
                let converted = self.convert(&s.borrow());
                *s.borrow_mut() = converted;
                Ok(value.clone())
            }
            _ => Err(no_matching_overload(self.in_place_name(), args)),
        }
    }

    fn copy(self, args: &[Value]) -> EvalResult {
        match args {
            [Value::Str(s)] => Ok(Value::string(self.convert(&s.borrow()))),
            _ => Err(no_matching_overload(self.copy_name(), args)),
        }
    }
}

pub(super) fn register(registrar: &mut Registrar<'_>) {
    for case in [Case::Upper, Case::Lower] {
        registrar.native(case.in_place_name(), &[TypeTag::String], move |args| {
            case.in_place(args)
        });
        registrar.native(case.copy_name(), &[TypeTag::String], move |args| {
            case.copy(args)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_place_mutates_shared_buffer() {
        let s = Value::string("Hello");
        let alias = s.clone();
        let returned = Case::Upper.in_place(&[s.clone()]).unwrap();
        assert!(returned.same_handle(&s));
        assert_eq!(alias, Value::string("HELLO"));
    }

    #[test]
    fn copy_leaves_original() {
        let s = Value::string("Hello");
        let lowered = Case::Lower.copy(&[s.clone()]).unwrap();
        assert_eq!(lowered, Value::string("hello"));
        assert_eq!(s, Value::string("Hello"));
        assert!(!lowered.same_handle(&s));
    }
}

//! Overloads: the unit of dispatch.
//!
//! An overload pairs a positional signature with a body. Operators,
//! built-in functions and user functions are all overloads, registered the
//! same way and resolved by the same lookup.

use std::fmt;
use std::rc::Rc;

use elang_ir::{Name, SharedBlock, TypeTag};
use elang_value::{EvalResult, Value};

use crate::environment::ScopeId;

/// A declared parameter: a binding name and the kind it requires.
///
/// The name is used only for binding; matching looks at `ty` alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Argument {
    pub name: Name,
    pub ty: TypeTag,
}

impl Argument {
    pub fn new(name: Name, ty: TypeTag) -> Self {
        Argument { name, ty }
    }
}

/// Native function body. Receives the already-evaluated arguments.
///
/// Reference-counted so natives can capture shared state (the print
/// handler, for `show`) and be registered under several signatures.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> EvalResult>;

/// What runs when an overload is selected.
#[derive(Clone)]
pub enum MethodBody {
    /// Host function.
    Native(NativeFn),
    /// User function: a body block plus the scope it was declared in.
    User {
        body: SharedBlock,
        defining_scope: ScopeId,
    },
}

/// A callable overload.
#[derive(Clone)]
pub struct Method {
    pub name: Name,
    pub params: Vec<Argument>,
    pub body: MethodBody,
}

/// Overloads are shared between the registering scope and in-flight
/// dispatches.
pub type SharedMethod = Rc<Method>;

impl Method {
    pub fn native(name: Name, params: Vec<Argument>, f: NativeFn) -> Self {
        Method {
            name,
            params,
            body: MethodBody::Native(f),
        }
    }

    pub fn user(name: Name, params: Vec<Argument>, body: SharedBlock, scope: ScopeId) -> Self {
        Method {
            name,
            params,
            body: MethodBody::User {
                body,
                defining_scope: scope,
            },
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether this overload accepts the arguments: same arity, and every
    /// position is `Any` or the argument's exact kind. No coercion.
    pub fn accepts(&self, args: &[Value]) -> bool {
        self.params.len() == args.len()
            && self
                .params
                .iter()
                .zip(args)
                .all(|(param, arg)| param.ty.accepts(arg.kind()))
    }

    pub fn is_native(&self) -> bool {
        matches!(self.body, MethodBody::Native(_))
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_native() { "native" } else { "user" };
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("kind", &kind)
            .finish()
    }
}

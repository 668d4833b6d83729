//! Scope tree for variable bindings and overload tables.
//!
//! Scopes live in an arena (`Vec<Scope>`) and link to their parent by
//! index. Lookups walk parent indices toward the root; nothing holds a
//! pointer to a scope, so there are no ownership cycles.
//!
//! The global scope is created with the environment and is never released.
//! Call scopes are pushed per user-function invocation and released in
//! LIFO order when the call returns.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use elang_ir::Name;
use elang_value::{recursion_limit_exceeded, EvalError, Value};

use crate::method::{Method, SharedMethod};

/// Index of a scope in the environment arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The root scope.
    pub const GLOBAL: ScopeId = ScopeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// How `assign_variable` chooses the binding scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignMode {
    /// Bind in the given scope only, shadowing any outer binding.
    /// Used for function parameters.
    Local,
    /// Overwrite the nearest existing binding on the chain; if there is
    /// none, create one in the given scope. Used for `=` and loop variables.
    WriteThrough,
}

/// Overload candidates, nearest scope first.
pub type Candidates = SmallVec<[SharedMethod; 4]>;

/// A single scope.
#[derive(Default)]
pub struct Scope {
    /// Variable bindings in this scope.
    variables: FxHashMap<Name, Value>,
    /// Overloads registered in this scope, per call name, in registration order.
    methods: FxHashMap<Name, Vec<SharedMethod>>,
    /// Enclosing scope; `None` only for the root.
    parent: Option<ScopeId>,
}

impl Scope {
    fn with_parent(parent: ScopeId) -> Self {
        Scope {
            parent: Some(parent),
            ..Scope::default()
        }
    }

    /// Variable bound directly in this scope.
    #[inline]
    pub fn variable(&self, name: Name) -> Option<&Value> {
        self.variables.get(&name)
    }

    /// Overloads registered directly in this scope.
    pub fn overloads(&self, name: Name) -> &[SharedMethod] {
        self.methods.get(&name).map_or(&[], Vec::as_slice)
    }

    #[inline]
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }
}

/// Most live scopes an environment can address.
const MAX_SCOPES: usize = u32::MAX as usize;

/// Arena of scopes.
pub struct Environment {
    scopes: Vec<Scope>,
    max_scopes: usize,
}

impl Environment {
    /// Create an environment holding only the global scope.
    pub fn new() -> Self {
        Self::with_scope_limit(MAX_SCOPES)
    }

    /// Environment holding at most `max_scopes` live scopes, the global
    /// scope included.
    pub(crate) fn with_scope_limit(max_scopes: usize) -> Self {
        Environment {
            scopes: vec![Scope::default()],
            max_scopes: max_scopes.clamp(1, MAX_SCOPES),
        }
    }

    /// Number of live scopes, the global scope included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    #[inline]
    fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.index()]
    }

    /// Push a new scope with the given parent.
    ///
    /// Every live scope past the global one belongs to an active call, so
    /// a full arena is reported as `StackOverflow`.
    pub fn push_scope(&mut self, parent: ScopeId) -> Result<ScopeId, EvalError> {
        debug_assert!(parent.index() < self.scopes.len(), "parent scope not live");
        let len = self.scopes.len();
        let index = u32::try_from(len)
            .ok()
            .filter(|_| len < self.max_scopes)
            .ok_or_else(|| recursion_limit_exceeded(self.max_scopes - 1))?;
        self.scopes.push(Scope::with_parent(parent));
        Ok(ScopeId(index))
    }

    /// Release the most recently pushed scope.
    ///
    /// Scopes are released LIFO; `id` must be the innermost live scope.
    /// The global scope is never released.
    pub fn pop_scope(&mut self, id: ScopeId) {
        debug_assert_eq!(
            id.index() + 1,
            self.scopes.len(),
            "scopes must be released innermost first"
        );
        if id != ScopeId::GLOBAL && id.index() + 1 == self.scopes.len() {
            self.scopes.pop();
        }
    }

    /// Iterate `scope` and its ancestors, innermost first.
    fn chain(&self, scope: ScopeId) -> impl Iterator<Item = (ScopeId, &Scope)> + '_ {
        std::iter::successors(Some(scope), |id| self.scope(*id).parent)
            .map(|id| (id, self.scope(id)))
    }

    /// Look up a variable, walking toward the root.
    pub fn lookup_variable(&self, scope: ScopeId, name: Name) -> Option<Value> {
        self.chain(scope)
            .find_map(|(_, s)| s.variables.get(&name))
            .cloned()
    }

    /// Bind or overwrite a variable.
    ///
    /// See [`AssignMode`] for where the binding lands. Returns the scope
    /// that now holds it.
    pub fn assign_variable(
        &mut self,
        scope: ScopeId,
        name: Name,
        value: Value,
        mode: AssignMode,
    ) -> ScopeId {
        let target = match mode {
            AssignMode::Local => scope,
            AssignMode::WriteThrough => self
                .chain(scope)
                .find(|(_, s)| s.variables.contains_key(&name))
                .map_or(scope, |(id, _)| id),
        };
        self.scope_mut(target).variables.insert(name, value);
        target
    }

    /// Append an overload to `scope`'s list for its name.
    ///
    /// No collision detection: an identical signature registered twice
    /// yields two overloads, and the earlier one wins ties.
    pub fn register_overload(&mut self, scope: ScopeId, method: Method) {
        tracing::debug!(
            name = ?method.name,
            arity = method.arity(),
            native = method.is_native(),
            "register overload"
        );
        self.scope_mut(scope)
            .methods
            .entry(method.name)
            .or_default()
            .push(SharedMethod::new(method));
    }

    /// Gather the overloads for `name` visible from `scope`.
    ///
    /// Nearest scope first; within a scope, registration order.
    pub fn collect_overloads(&self, scope: ScopeId, name: Name) -> Candidates {
        let mut candidates = Candidates::new();
        for (_, s) in self.chain(scope) {
            candidates.extend(s.overloads(name).iter().cloned());
        }
        candidates
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;

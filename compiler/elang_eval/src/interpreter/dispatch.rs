//! Overload resolution and invocation.
//!
//! Candidates come from `Environment::collect_overloads`, nearest scope
//! first and registration order within a scope. The first candidate with
//! the right arity whose every parameter is `Any` or the argument's exact
//! kind wins. There is no coercion and no best-match scoring.
//!
//! Operators with an [`OperatorFallback`] use it only when overloads exist
//! for the name but none accepts the arguments.

use elang_ir::{Name, SharedBlock};
use elang_value::{no_matching_overload, unknown_function, EvalResult};

use super::{Args, Interpreter};
use crate::builtins::OperatorFallback;
use crate::diagnostics::CallFrame;
use crate::environment::{AssignMode, ScopeId};
use crate::eval_mode::CallScoping;
use crate::method::{Method, MethodBody};
use crate::stack::ensure_sufficient_stack;

impl Interpreter {
    /// Resolve `name` against the overloads visible from `scope` and invoke
    /// the winner with `args`.
    pub(crate) fn dispatch(&mut self, scope: ScopeId, name: Name, args: Args) -> EvalResult {
        self.dispatch_or(scope, name, args, None)
    }

    /// [`dispatch`](Self::dispatch), with `fallback` standing in for
    /// `NoMatchingOverload`.
    pub(crate) fn dispatch_or(
        &mut self,
        scope: ScopeId,
        name: Name,
        args: Args,
        fallback: Option<OperatorFallback>,
    ) -> EvalResult {
        let candidates = self.env.collect_overloads(scope, name);
        if candidates.is_empty() {
            let err = unknown_function(self.interner.lookup(name));
            return Err(self.call_stack.attach_backtrace(err, &self.interner));
        }

        let Some(method) = candidates.into_iter().find(|m| m.accepts(&args)) else {
            let result = match fallback {
                Some(fallback) => fallback(args.as_slice()),
                None => Err(no_matching_overload(self.interner.lookup(name), &args)),
            };
            return result.map_err(|err| self.call_stack.attach_backtrace(err, &self.interner));
        };

        tracing::trace!(
            name = self.interner.lookup(name),
            arity = args.len(),
            native = method.is_native(),
            "selected overload"
        );

        match &method.body {
            MethodBody::Native(f) => f(args.as_slice())
                .map_err(|err| self.call_stack.attach_backtrace(err, &self.interner)),
            MethodBody::User {
                body,
                defining_scope,
            } => self.call_user(&method, body, *defining_scope, scope, args),
        }
    }

    /// Invoke a user-defined overload.
    ///
    /// Pushes a call frame and a call scope, binds each parameter locally,
    /// executes the body, and releases both on the way out, error or not.
    #[tracing::instrument(level = "debug", skip_all, fields(name = self.interner.lookup(method.name)))]
    fn call_user(
        &mut self,
        method: &Method,
        body: &SharedBlock,
        defining_scope: ScopeId,
        caller: ScopeId,
        args: Args,
    ) -> EvalResult {
        let frame = CallFrame {
            name: method.name,
            arity: args.len(),
        };
        if let Err(err) = self.call_stack.push(frame) {
            return Err(self.call_stack.attach_backtrace(err, &self.interner));
        }

        let parent = match self.call_scoping {
            CallScoping::Dynamic => caller,
            CallScoping::Lexical => defining_scope,
        };
        let scope = match self.env.push_scope(parent) {
            Ok(scope) => scope,
            Err(err) => {
                let err = self.call_stack.attach_backtrace(err, &self.interner);
                self.call_stack.pop();
                return Err(err);
            }
        };
        for (param, value) in method.params.iter().zip(args) {
            self.env
                .assign_variable(scope, param.name, value, AssignMode::Local);
        }

        let result = ensure_sufficient_stack(|| self.execute(body, scope))
            .map_err(|err| self.call_stack.attach_backtrace(err, &self.interner));

        self.env.pop_scope(scope);
        self.call_stack.pop();
        result
    }
}

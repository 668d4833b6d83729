//! Statement execution and control flow.
//!
//! A block runs its statements in order with a running "last value",
//! initially `Void`. Expression statements set it; assignments and
//! declarations reset it to `Void`; `if`, `while` and `for` adopt the
//! trailing value of each body they run. Bodies run in the enclosing scope.

use elang_ir::{Block, Expr, FunctionDecl, Stmt};
use elang_value::{condition_not_boolean, not_iterable, EvalError, EvalResult, Value};

use super::Interpreter;
use crate::environment::{AssignMode, ScopeId};
use crate::method::{Argument, Method};

impl Interpreter {
    /// Execute a block in `scope` and return its trailing value.
    pub(crate) fn execute(&mut self, block: &Block, scope: ScopeId) -> EvalResult {
        let mut last = Value::Void;
        for stmt in &block.stmts {
            self.exec_stmt(stmt, scope, &mut last)?;
        }
        Ok(last)
    }

    fn exec_stmt(
        &mut self,
        stmt: &Stmt,
        scope: ScopeId,
        last: &mut Value,
    ) -> Result<(), EvalError> {
        match stmt {
            Stmt::Expr(expr) => {
                *last = self.eval_expr(expr, scope)?;
            }
            Stmt::Assign { name, value } => {
                let value = self.eval_expr(value, scope)?;
                self.env
                    .assign_variable(scope, *name, value, AssignMode::WriteThrough);
                *last = Value::Void;
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                *last = if self.eval_condition("if", condition, scope)? {
                    self.execute(then_branch, scope)?
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch, scope)?
                } else {
                    Value::Void
                };
            }
            Stmt::While { condition, body } => {
                while self.eval_condition("while", condition, scope)? {
                    *last = self.execute(body, scope)?;
                }
            }
            Stmt::For {
                binding,
                iterable,
                body,
            } => {
                let iterable = self.eval_expr(iterable, scope)?;
                let Some(items) = iterable.as_vector_handle() else {
                    let err = not_iterable(&iterable);
                    return Err(self.call_stack.attach_backtrace(err, &self.interner));
                };
                // Snapshot at loop entry; the body may push to the same vector.
                let snapshot = items.borrow().clone();
                for item in snapshot {
                    self.env
                        .assign_variable(scope, *binding, item, AssignMode::WriteThrough);
                    *last = self.execute(body, scope)?;
                }
            }
            Stmt::Function(decl) => {
                self.declare_function(decl, scope);
                *last = Value::Void;
            }
        }
        Ok(())
    }

    /// Evaluate an `if`/`while` condition, which must be Boolean.
    fn eval_condition(
        &mut self,
        construct: &str,
        condition: &Expr,
        scope: ScopeId,
    ) -> Result<bool, EvalError> {
        let value = self.eval_expr(condition, scope)?;
        match value {
            Value::Bool(b) => Ok(b),
            other => {
                let err = condition_not_boolean(construct, &other);
                Err(self.call_stack.attach_backtrace(err, &self.interner))
            }
        }
    }

    /// Register a user overload in the declaring scope.
    fn declare_function(&mut self, decl: &FunctionDecl, scope: ScopeId) {
        let params = decl
            .params
            .iter()
            .map(|p| Argument::new(p.name, p.ty))
            .collect();
        let method = Method::user(decl.name, params, decl.body.clone(), scope);
        self.env.register_overload(scope, method);
    }
}

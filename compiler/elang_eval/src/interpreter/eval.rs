//! Expression evaluation.
//!
//! Literals, identifiers and vector literals are reduced here directly.
//! Every operator form is desugared to a call on its reserved name and
//! handed to `dispatch`; the evaluator has no operator semantics of its own
//! beyond the fallbacks for operand kinds no overload accepts.

use smallvec::smallvec;

use elang_ir::{Expr, UnaryOp};
use elang_value::{unbound_variable, EvalError, EvalResult, Value};

use super::{Args, Interpreter};
use crate::builtins::{binary_fallback, index_fallback};
use crate::environment::ScopeId;
use crate::stack::ensure_sufficient_stack;

impl Interpreter {
    /// Reduce an expression to a value.
    #[inline]
    pub(crate) fn eval_expr(&mut self, expr: &Expr, scope: ScopeId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, scope))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, scope: ScopeId) -> EvalResult {
        match expr {
            Expr::Int(n) => Ok(Value::int(*n)),
            Expr::Float(f) => Ok(Value::float(*f)),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Str(s) => Ok(Value::string(s.as_str())),
            Expr::Vector(items) => {
                let values = self.eval_args(items, scope)?;
                Ok(Value::vector(values.into_vec()))
            }
            Expr::Ident(name) => self.env.lookup_variable(scope, *name).ok_or_else(|| {
                let err = unbound_variable(self.interner.lookup(*name));
                self.call_stack.attach_backtrace(err, &self.interner)
            }),

            // Desugared operator forms
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left, scope)?;
                let right = self.eval_expr(right, scope)?;
                self.dispatch_or(
                    scope,
                    self.op_names.binary(*op),
                    smallvec![left, right],
                    binary_fallback(*op),
                )
            }
            Expr::Unary {
                op: UnaryOp::Not,
                operand,
            } => {
                let operand = self.eval_expr(operand, scope)?;
                self.dispatch(scope, self.op_names.not, smallvec![operand])
            }
            Expr::Range { start, end } => {
                let mut args = Args::new();
                if let Some(start) = start {
                    args.push(self.eval_expr(start, scope)?);
                }
                args.push(self.eval_expr(end, scope)?);
                self.dispatch(scope, self.op_names.range, args)
            }
            Expr::In {
                element,
                collection,
            } => {
                let element = self.eval_expr(element, scope)?;
                let collection = self.eval_expr(collection, scope)?;
                self.dispatch(scope, self.op_names.in_, smallvec![collection, element])
            }
            Expr::Index { target, index } => {
                let target = self.eval_expr(target, scope)?;
                let index = self.eval_expr(index, scope)?;
                self.dispatch_or(
                    scope,
                    self.op_names.at,
                    smallvec![target, index],
                    Some(index_fallback),
                )
            }

            Expr::Call { callee, args } => {
                let args = self.eval_args(args, scope)?;
                self.dispatch(scope, *callee, args)
            }
            Expr::Block(block) => self.execute(block, scope),
        }
    }

    /// Evaluate expressions left to right.
    fn eval_args(&mut self, exprs: &[Expr], scope: ScopeId) -> Result<Args, EvalError> {
        exprs
            .iter()
            .map(|expr| self.eval_expr(expr, scope))
            .collect()
    }
}

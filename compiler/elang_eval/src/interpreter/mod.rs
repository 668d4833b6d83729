//! Tree-walking interpreter for E programs.
//!
//! # Architecture
//!
//! - `exec` - the executor: statements, control flow, block values
//! - `eval` - the evaluator: expressions, operator desugaring
//! - `dispatch` - overload resolution and invocation, user calls
//!
//! Every operator, built-in and user function goes through one path:
//! `Evaluator -> dispatch -> (native fn | executor over the body)`.
//! Operator behavior therefore lives entirely in the overload tables; the
//! evaluator knows only the reserved call name each operator maps to.
//!
//! # Scopes
//!
//! Top-level programs run in the global scope. Each user call pushes one
//! scope, parented per [`CallScoping`], and releases it when the call
//! returns. `if`/`while`/`for` bodies run in the enclosing scope.

mod builder;
mod dispatch;
mod eval;
mod exec;

pub use builder::InterpreterBuilder;

use elang_ir::{BinaryOp, Block, Name, SharedInterner, StringInterner, TypeTag, UnaryOp};
use elang_ir::{AT_METHOD, IN_METHOD, RANGE_METHOD};
use elang_value::{EvalResult, Value};

use crate::diagnostics::CallStack;
use crate::environment::{AssignMode, Environment, ScopeId};
use crate::eval_mode::{CallScoping, EvalMode};
use crate::method::{Argument, Method, NativeFn};
use crate::print_handler::SharedPrintHandler;

/// Argument list for a dispatch. Most calls have at most two arguments.
pub type Args = smallvec::SmallVec<[Value; 4]>;

/// Pre-interned reserved call names for operator desugaring.
///
/// Interned once at construction so desugaring is a field read rather
/// than an interner lookup per operator.
#[derive(Clone, Copy)]
pub(crate) struct OpNames {
    add: Name,
    sub: Name,
    mul: Name,
    div: Name,
    and: Name,
    or: Name,
    eq: Name,
    ne: Name,
    gte: Name,
    gt: Name,
    lte: Name,
    lt: Name,
    pub(crate) not: Name,
    pub(crate) range: Name,
    pub(crate) in_: Name,
    pub(crate) at: Name,
}

impl OpNames {
    fn new(interner: &StringInterner) -> Self {
        let intern = |op: BinaryOp| interner.intern(op.method_name());
        Self {
            add: intern(BinaryOp::Add),
            sub: intern(BinaryOp::Sub),
            mul: intern(BinaryOp::Mul),
            div: intern(BinaryOp::Div),
            and: intern(BinaryOp::And),
            or: intern(BinaryOp::Or),
            eq: intern(BinaryOp::Eq),
            ne: intern(BinaryOp::NotEq),
            gte: intern(BinaryOp::GtEq),
            gt: intern(BinaryOp::Gt),
            lte: intern(BinaryOp::LtEq),
            lt: intern(BinaryOp::Lt),
            not: interner.intern(UnaryOp::Not.method_name()),
            range: interner.intern(RANGE_METHOD),
            in_: interner.intern(IN_METHOD),
            at: interner.intern(AT_METHOD),
        }
    }

    pub(crate) fn binary(&self, op: BinaryOp) -> Name {
        match op {
            BinaryOp::Add => self.add,
            BinaryOp::Sub => self.sub,
            BinaryOp::Mul => self.mul,
            BinaryOp::Div => self.div,
            BinaryOp::And => self.and,
            BinaryOp::Or => self.or,
            BinaryOp::Eq => self.eq,
            BinaryOp::NotEq => self.ne,
            BinaryOp::GtEq => self.gte,
            BinaryOp::Gt => self.gt,
            BinaryOp::LtEq => self.lte,
            BinaryOp::Lt => self.lt,
        }
    }
}

/// The evaluation engine.
///
/// Owns the scope arena, the call stack and the output handler. Build one
/// with [`Interpreter::new`] or [`InterpreterBuilder`].
pub struct Interpreter {
    pub(crate) interner: SharedInterner,
    pub(crate) env: Environment,
    pub(crate) mode: EvalMode,
    pub(crate) call_scoping: CallScoping,
    pub(crate) call_stack: CallStack,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) op_names: OpNames,
}

impl Interpreter {
    /// Interpreter with the default mode, dynamic call scoping and the
    /// standard prelude.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// The interner every program run by this interpreter must be built
    /// against.
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    pub fn call_scoping(&self) -> CallScoping {
        self.call_scoping
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Output captured by a buffer print handler, if one is installed.
    pub fn output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Run a program in the global scope and return its trailing value.
    ///
    /// Bindings and functions it creates stay in the global scope, so
    /// successive runs see each other's definitions.
    #[tracing::instrument(level = "debug", skip_all, fields(stmts = program.stmts.len()))]
    pub fn run(&mut self, program: &Block) -> EvalResult {
        self.execute(program, ScopeId::GLOBAL)
    }

    /// Call a function or operator by name from the global scope.
    pub fn call(&mut self, name: &str, args: Vec<Value>) -> EvalResult {
        let name = self.interner.intern(name);
        self.dispatch(ScopeId::GLOBAL, name, Args::from_vec(args))
    }

    /// A global variable's current value.
    pub fn global(&self, name: &str) -> Option<Value> {
        let name = self.interner.get(name)?;
        self.env.lookup_variable(ScopeId::GLOBAL, name)
    }

    /// Bind a global variable.
    pub fn set_global(&mut self, name: &str, value: Value) {
        let name = self.interner.intern(name);
        self.env
            .assign_variable(ScopeId::GLOBAL, name, value, AssignMode::Local);
    }

    /// Register a native overload in the global scope.
    ///
    /// One registration per supported signature; `params` pairs a binding
    /// name with the required kind (`TypeTag::Any` matches everything).
    pub fn register_native<F>(&mut self, name: &str, params: &[(&str, TypeTag)], f: F)
    where
        F: Fn(&[Value]) -> EvalResult + 'static,
    {
        let params = params
            .iter()
            .map(|(param, ty)| Argument::new(self.interner.intern(param), *ty))
            .collect();
        let f: NativeFn = std::rc::Rc::new(f);
        let method = Method::native(self.interner.intern(name), params, f);
        self.env.register_overload(ScopeId::GLOBAL, method);
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

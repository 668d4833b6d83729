//! E language evaluation engine.
//!
//! Runs a syntax tree built against `elang_ir`, producing `elang_value`
//! values.
//!
//! # Architecture
//!
//! - `Environment`: arena of scopes with index-based parent links, each
//!   holding variable bindings and per-name overload lists
//! - `Method`: an overload, native or user-defined, with a positional
//!   type signature
//! - `Interpreter`: the dispatcher, evaluator and executor; operators are
//!   desugared to reserved-name calls and resolved like any function
//! - `builtins`: the native prelude (operators, collections, strings, `show`)
//!
//! # Re-exports
//!
//! Value and error types from `elang_value` are re-exported for
//! convenience: `Value`, `Heap`, `EvalError`, `EvalErrorKind`, `EvalResult`.

mod builtins;
mod diagnostics;
mod environment;
mod eval_mode;
pub mod interpreter;
mod method;
mod print_handler;
mod stack;
mod tracing_setup;

pub use elang_value::{
    EvalBacktrace, EvalError, EvalErrorKind, EvalResult, Heap, TypeTag, Value,
};

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{AssignMode, Environment, Scope, ScopeId};
pub use eval_mode::{CallScoping, EvalMode};
pub use interpreter::{Args, Interpreter, InterpreterBuilder};
pub use method::{Argument, Method, MethodBody, NativeFn, SharedMethod};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use tracing_setup::{init_tracing, LOG_ENV_VAR};

#[cfg(test)]
mod tests;

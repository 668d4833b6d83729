//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::{Interpreter, OpNames};
use crate::builtins;
use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::eval_mode::{CallScoping, EvalMode};
use crate::print_handler::{buffer_handler, stdout_handler, SharedPrintHandler};
use elang_ir::SharedInterner;

/// Builder for creating Interpreter instances.
///
/// The default is `EvalMode::Interpret`, `CallScoping::Dynamic`, a fresh
/// interner and the standard prelude.
pub struct InterpreterBuilder {
    interner: Option<SharedInterner>,
    mode: EvalMode,
    call_scoping: CallScoping,
    print_handler: Option<SharedPrintHandler>,
    prelude: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            interner: None,
            mode: EvalMode::default(),
            call_scoping: CallScoping::default(),
            print_handler: None,
            prelude: true,
        }
    }

    /// Set the evaluation mode.
    ///
    /// Controls the recursion limit and the default print destination.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set how user-function call scopes are parented.
    #[must_use]
    pub fn call_scoping(mut self, call_scoping: CallScoping) -> Self {
        self.call_scoping = call_scoping;
        self
    }

    /// Set the print handler used by `show`.
    ///
    /// Default is stdout for `Interpret` mode, a buffer otherwise.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Share an interner with the program builder.
    #[must_use]
    pub fn interner(mut self, interner: SharedInterner) -> Self {
        self.interner = Some(interner);
        self
    }

    /// Start with an empty global scope: no operators, no built-ins.
    #[must_use]
    pub fn without_prelude(mut self) -> Self {
        self.prelude = false;
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let interner = self.interner.unwrap_or_default();
        let print_handler = self.print_handler.unwrap_or_else(|| {
            if self.mode.allows_io() {
                stdout_handler()
            } else {
                buffer_handler()
            }
        });

        let mut env = Environment::new();
        if self.prelude {
            builtins::register_prelude(&mut env, &interner, &print_handler);
        }

        Interpreter {
            op_names: OpNames::new(&interner),
            call_stack: CallStack::new(self.mode.max_recursion_depth()),
            interner,
            env,
            mode: self.mode,
            call_scoping: self.call_scoping,
            print_handler,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Evaluation policies.
//!
//! `EvalMode` decides recursion limits and the default output destination;
//! `CallScoping` decides where a user function's call scope is parented.
//! Both are plain enums read through policy methods, fixed at build time
//! by `InterpreterBuilder`.

/// Evaluation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Embedded interpreter: output to stdout, recursion bounded only by
    /// native stack growth.
    #[default]
    Interpret,
    /// Test harness: output captured, generous but bounded recursion.
    TestRun,
    /// Explicit call-depth limit, output captured.
    Bounded {
        /// Maximum number of nested user-function calls.
        max_depth: usize,
    },
}

impl EvalMode {
    /// Whether `show` may write to the process's stdout.
    ///
    /// Other modes default to a capturing buffer handler.
    #[inline]
    pub fn allows_io(&self) -> bool {
        matches!(self, Self::Interpret)
    }

    /// Maximum user call depth, or `None` for unlimited (native `stacker`
    /// fallback).
    ///
    /// - `Interpret`: `None` on native, 200 on WASM
    /// - `TestRun`: always 500
    /// - `Bounded`: the configured limit
    #[inline]
    pub fn max_recursion_depth(&self) -> Option<usize> {
        match self {
            Self::Interpret => {
                #[cfg(target_arch = "wasm32")]
                {
                    Some(200)
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    None
                }
            }
            Self::TestRun => Some(500),
            Self::Bounded { max_depth } => Some(*max_depth),
        }
    }
}

/// Which scope a user-function call scope is parented on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CallScoping {
    /// The scope active at the call site. Free variables in a function
    /// body resolve against the caller's bindings.
    #[default]
    Dynamic,
    /// The scope the function was declared in (lexical closures).
    Lexical,
}

//! Error types for evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` is the failure taxonomy surfaced to embedders: lookup
//! failures, dispatch failures, type failures, bounds failures and
//! arithmetic failures. Factory functions (e.g. `division_by_zero()`) are
//! the public construction API; they populate both `kind` and `message`.
//!
//! No failure is recovered inside the engine. Every one aborts the running
//! program and reaches the caller of `Interpreter::run` as an `EvalError`.

use std::fmt;

use crate::value::{TypeTag, Value};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lookup
    /// No scope on the chain binds the variable.
    UnboundVariable { name: String },
    /// No scope on the chain registers an overload for the call name.
    UnknownFunction { name: String },

    // Dispatch
    /// Overloads exist for the name, but none accepts these argument kinds.
    NoMatchingOverload { name: String, kinds: Vec<TypeTag> },

    // Type
    /// A condition, iterable, or indexable had the wrong kind.
    TypeError {
        context: String,
        expected: TypeTag,
        got: TypeTag,
    },

    // Bounds
    /// 1-based index outside `1..=len`, or `pop!` on an empty vector.
    IndexOutOfBounds { index: i64, len: usize },

    // Arithmetic
    DivisionByZero,
    IntegerOverflow { operation: String },

    // Resources
    /// User call depth exceeded the configured limit.
    StackOverflow { depth: usize },
    /// A native asked for a vector longer than the engine will allocate.
    CapacityExceeded { requested: u64, limit: usize },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "unbound variable: {name}"),
            Self::UnknownFunction { name } => write!(f, "unknown function: `{name}`"),
            Self::NoMatchingOverload { name, kinds } => {
                write!(f, "no overload of `{name}` matches (")?;
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{kind}")?;
                }
                write!(f, ")")
            }
            Self::TypeError {
                context,
                expected,
                got,
            } => write!(f, "type error: {context} must be {expected}, got {got}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum recursion depth exceeded (limit: {depth})")
            }
            Self::CapacityExceeded { requested, limit } => {
                write!(f, "vector of {requested} elements exceeds the limit of {limit}")
            }
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// User function name.
    pub name: String,
    /// Number of arguments the function was called with.
    pub arity: usize,
}

/// Snapshot of the user call chain at an error site, most recent first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}/{}", frame.name, frame.arity)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// User call chain at the error site, when raised inside a user function.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    /// Create an error from a structured kind.
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            backtrace: None,
        }
    }

    /// Attach a backtrace. An existing, deeper backtrace is kept.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.backtrace.is_none() {
            self.backtrace = Some(backtrace);
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

impl PartialEq for EvalError {
    /// Errors compare by kind; message and backtrace are derived data.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

// Lookup Errors

/// Variable not bound in any enclosing scope.
#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

/// No overloads registered under a call name.
#[cold]
pub fn unknown_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownFunction {
        name: name.to_string(),
    })
}

// Dispatch Errors

/// No overload accepts the argument kinds.
#[cold]
pub fn no_matching_overload(name: &str, args: &[Value]) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoMatchingOverload {
        name: name.to_string(),
        kinds: args.iter().map(Value::kind).collect(),
    })
}

// Type Errors

/// A value of the wrong kind where a specific kind is required.
#[cold]
pub fn type_mismatch(context: &str, expected: TypeTag, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeError {
        context: context.to_string(),
        expected,
        got: got.kind(),
    })
}

/// Non-boolean `if`/`while` condition.
#[cold]
pub fn condition_not_boolean(construct: &str, got: &Value) -> EvalError {
    type_mismatch(&format!("{construct} condition"), TypeTag::Boolean, got)
}

/// Non-vector `for` iterable.
#[cold]
pub fn not_iterable(got: &Value) -> EvalError {
    type_mismatch("for iterable", TypeTag::Vector, got)
}

// Bounds Errors

/// 1-based index outside `1..=len`.
#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

/// `pop!` on an empty vector: its last position, 0, is out of bounds.
#[cold]
pub fn pop_empty_vector() -> EvalError {
    index_out_of_bounds(0, 0)
}

// Arithmetic Errors

/// Integer division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Integer overflow in checked arithmetic.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Resource Errors

/// Recursion depth limit exceeded.
#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit })
}

/// Vector allocation larger than `limit` elements, or one the allocator
/// refused.
#[cold]
pub fn capacity_exceeded(requested: u64, limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CapacityExceeded { requested, limit })
}

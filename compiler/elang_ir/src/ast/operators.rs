//! Binary and unary operators, and the reserved call names they desugar to.
//!
//! Operators carry no semantics of their own: the evaluator rewrites each
//! one into a call against its reserved name, and the registered overload
//! set decides what it does.

/// Reserved call name for range construction.
pub const RANGE_METHOD: &str = "range";
/// Reserved call name for membership tests.
pub const IN_METHOD: &str = "__in__";
/// Reserved call name for indexing.
pub const AT_METHOD: &str = "__at__";

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Logical
    And,
    Or,

    // Comparison
    Eq,
    NotEq,
    GtEq,
    Gt,
    LtEq,
    Lt,
}

impl BinaryOp {
    /// Every binary operator, in declaration order.
    pub const ALL: [BinaryOp; 12] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::And,
        Self::Or,
        Self::Eq,
        Self::NotEq,
        Self::GtEq,
        Self::Gt,
        Self::LtEq,
        Self::Lt,
    ];

    /// Reserved call name this operator desugars to.
    pub const fn method_name(self) -> &'static str {
        match self {
            Self::Add => "__add__",
            Self::Sub => "__sub__",
            Self::Mul => "__mul__",
            Self::Div => "__div__",
            Self::And => "__and__",
            Self::Or => "__or__",
            Self::Eq => "__eq__",
            Self::NotEq => "__ne__",
            Self::GtEq => "__gte__",
            Self::Gt => "__gt__",
            Self::LtEq => "__lte__",
            Self::Lt => "__lt__",
        }
    }

    /// Source-level symbol, for diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::And => "and",
            Self::Or => "or",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::GtEq => ">=",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::Lt => "<",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical negation.
    Not,
}

impl UnaryOp {
    /// Reserved call name this operator desugars to.
    pub const fn method_name(self) -> &'static str {
        match self {
            Self::Not => "__not__",
        }
    }

    /// Source-level symbol, for diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "not",
        }
    }
}

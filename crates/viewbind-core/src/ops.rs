//! Semantic operators for target expressions.
//!
//! These are the operations a target expression actually denotes, as opposed
//! to the syntactic operator tokens in the parse tree. The builder maps
//! syntax to semantics; both enums are closed, so an unmapped operator is a
//! compile-time impossibility rather than a runtime diagnostic.

use std::fmt;

/// A unary operation in a target expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Unary plus (identity on numerics).
    Plus,
    /// Arithmetic negation.
    Negate,
    /// Logical negation.
    Not,
}

impl UnaryOp {
    /// The operator's source spelling, for diagnostics.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A binary operation in a target expression.
///
/// Assignment is not listed here; it compiles to a dedicated target-expression
/// node because it needs an addressable left side rather than a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Arithmetic addition, or string concatenation.
    Add,
    /// Arithmetic subtraction.
    Subtract,
    /// Arithmetic multiplication.
    Multiply,
    /// Arithmetic division.
    Divide,
    /// Arithmetic remainder.
    Modulo,
    /// Equality comparison.
    Equal,
    /// Inequality comparison.
    NotEqual,
    /// Less-than comparison.
    Less,
    /// Less-or-equal comparison.
    LessEqual,
    /// Greater-than comparison.
    Greater,
    /// Greater-or-equal comparison.
    GreaterEqual,
    /// Null coalescing: left if present, else right.
    Coalesce,
    /// Non-short-circuit logical and / bitwise and.
    And,
    /// Non-short-circuit logical or / bitwise or.
    Or,
    /// Short-circuit logical and.
    AndAlso,
    /// Short-circuit logical or.
    OrElse,
}

impl BinaryOp {
    /// The operator's source spelling, for diagnostics.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Coalesce => "??",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::AndAlso => "&&",
            BinaryOp::OrElse => "||",
        }
    }

    /// Whether this operator is one of the arithmetic group.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOp::Add
                | BinaryOp::Subtract
                | BinaryOp::Multiply
                | BinaryOp::Divide
                | BinaryOp::Modulo
        )
    }

    /// Whether this operator produces a boolean comparison result.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Equal
                | BinaryOp::NotEqual
                | BinaryOp::Less
                | BinaryOp::LessEqual
                | BinaryOp::Greater
                | BinaryOp::GreaterEqual
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

//! Parse-tree nodes for binding expressions.
//!
//! The tree covers the nine node kinds a binding expression can contain:
//! literals, identifiers, unary and binary operations, conditionals, member
//! access, indexing, calls, and parenthesized groups. Nodes are allocated in
//! a [`bumpalo::Bump`] arena and borrowed for the lifetime of one
//! compilation, so the tree is plain `Copy`-friendly data with no ownership
//! bookkeeping.

use viewbind_core::{Span, Value};

use crate::ops::{BinaryOperator, UnaryOperator};

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'ast> {
    /// Literal value
    Literal(LiteralExpr),
    /// Identifier reference
    Ident(IdentExpr<'ast>),
    /// Unary prefix operation
    Unary(&'ast UnaryExpr<'ast>),
    /// Binary operation
    Binary(&'ast BinaryExpr<'ast>),
    /// Ternary conditional (? :)
    Conditional(&'ast ConditionalExpr<'ast>),
    /// Member access (.)
    Member(&'ast MemberExpr<'ast>),
    /// Indexing ([])
    Index(&'ast IndexExpr<'ast>),
    /// Call with argument list
    Call(&'ast CallExpr<'ast>),
    /// Parenthesized expression
    Paren(&'ast ParenExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(e) => e.span,
            Self::Ident(e) => e.span,
            Self::Unary(e) => e.span,
            Self::Binary(e) => e.span,
            Self::Conditional(e) => e.span,
            Self::Member(e) => e.span,
            Self::Index(e) => e.span,
            Self::Call(e) => e.span,
            Self::Paren(e) => e.span,
        }
    }

    /// Visit this node and every descendant once, pre-order, children
    /// left to right.
    pub fn walk(&self, visit: &mut impl FnMut(&Expr<'ast>)) {
        visit(self);
        match self {
            Self::Literal(_) | Self::Ident(_) => {}
            Self::Unary(e) => e.operand.walk(visit),
            Self::Binary(e) => {
                e.left.walk(visit);
                e.right.walk(visit);
            }
            Self::Conditional(e) => {
                e.condition.walk(visit);
                e.then_expr.walk(visit);
                e.else_expr.walk(visit);
            }
            Self::Member(e) => e.target.walk(visit),
            Self::Index(e) => {
                e.target.walk(visit);
                e.index.walk(visit);
            }
            Self::Call(e) => {
                e.callee.walk(visit);
                for arg in e.args {
                    arg.walk(visit);
                }
            }
            Self::Paren(e) => e.inner.walk(visit),
        }
    }
}

/// An identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ident<'ast> {
    /// The identifier text
    pub name: &'ast str,
    /// Source location
    pub span: Span,
}

impl<'ast> Ident<'ast> {
    /// Create an identifier.
    pub fn new(name: &'ast str, span: Span) -> Self {
        Self { name, span }
    }
}

/// A literal value, already typed by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    /// The value
    pub value: Value,
    /// Source location
    pub span: Span,
}

/// An identifier expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentExpr<'ast> {
    /// The identifier
    pub ident: Ident<'ast>,
    /// Source location
    pub span: Span,
}

/// A unary prefix operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    /// Operator
    pub op: UnaryOperator,
    /// Operand
    pub operand: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    /// Left operand
    pub left: &'ast Expr<'ast>,
    /// Operator
    pub op: BinaryOperator,
    /// Right operand
    pub right: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A ternary conditional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionalExpr<'ast> {
    /// Condition
    pub condition: &'ast Expr<'ast>,
    /// Value when true
    pub then_expr: &'ast Expr<'ast>,
    /// Value when false
    pub else_expr: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A member access.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemberExpr<'ast> {
    /// The accessed object
    pub target: &'ast Expr<'ast>,
    /// Member name
    pub member: Ident<'ast>,
    /// Source location
    pub span: Span,
}

/// An index access.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexExpr<'ast> {
    /// The indexed object
    pub target: &'ast Expr<'ast>,
    /// Index expression
    pub index: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A call expression. The callee is an arbitrary expression; whether it
/// names a method group or a delegate-typed value is decided during
/// compilation, not parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    /// The called expression
    pub callee: &'ast Expr<'ast>,
    /// Arguments, in order
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A parenthesized expression. Kept as a node so spans survive, but
/// semantically transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParenExpr<'ast> {
    /// The inner expression
    pub inner: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

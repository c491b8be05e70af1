//! Parse-tree definitions for binding expressions.
//!
//! The host's markup parser produces these nodes; the compiler consumes
//! them. Nodes are arena-allocated, so a whole tree is freed at once when
//! its [`Bump`] is dropped.
//!
//! # Example
//!
//! ```
//! use viewbind_ast::{Bump, ExprBuilder, BinaryOperator};
//! use viewbind_core::{Span, Value};
//!
//! let arena = Bump::new();
//! let b = ExprBuilder::new(&arena);
//! let expr = b.binary(
//!     b.ident("Count", Span::new(1, 1, 5)),
//!     BinaryOperator::Add,
//!     b.literal(Value::Int(1), Span::new(1, 9, 1)),
//!     Span::new(1, 1, 9),
//! );
//! assert_eq!(expr.span().line, 1);
//! ```

pub mod builder;
pub mod expr;
pub mod ops;

pub use builder::ExprBuilder;
pub use bumpalo::Bump;
pub use expr::{
    BinaryExpr, CallExpr, ConditionalExpr, Expr, Ident, IdentExpr, IndexExpr, LiteralExpr,
    MemberExpr, ParenExpr, UnaryExpr,
};
pub use ops::{BinaryOperator, UnaryOperator};

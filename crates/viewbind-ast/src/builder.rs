//! Arena-backed construction of parse trees.
//!
//! The host's own parser produces the tree; this builder is the allocation
//! surface it goes through, so every node lands in the same [`Bump`] arena
//! and spans are attached at one place.

use bumpalo::Bump;
use viewbind_core::{Span, Value};

use crate::expr::{
    BinaryExpr, CallExpr, ConditionalExpr, Expr, Ident, IdentExpr, IndexExpr, LiteralExpr,
    MemberExpr, ParenExpr, UnaryExpr,
};
use crate::ops::{BinaryOperator, UnaryOperator};

/// Allocates parse-tree nodes into an arena.
#[derive(Clone, Copy)]
pub struct ExprBuilder<'ast> {
    arena: &'ast Bump,
}

impl<'ast> ExprBuilder<'ast> {
    /// Create a builder over an arena.
    pub fn new(arena: &'ast Bump) -> Self {
        Self { arena }
    }

    /// A literal node.
    pub fn literal(&self, value: Value, span: Span) -> Expr<'ast> {
        Expr::Literal(LiteralExpr { value, span })
    }

    /// An identifier node.
    pub fn ident(&self, name: &str, span: Span) -> Expr<'ast> {
        let name = self.arena.alloc_str(name);
        Expr::Ident(IdentExpr {
            ident: Ident::new(name, span),
            span,
        })
    }

    /// A unary node.
    pub fn unary(&self, op: UnaryOperator, operand: Expr<'ast>, span: Span) -> Expr<'ast> {
        Expr::Unary(self.arena.alloc(UnaryExpr {
            op,
            operand: self.arena.alloc(operand),
            span,
        }))
    }

    /// A binary node.
    pub fn binary(
        &self,
        left: Expr<'ast>,
        op: BinaryOperator,
        right: Expr<'ast>,
        span: Span,
    ) -> Expr<'ast> {
        Expr::Binary(self.arena.alloc(BinaryExpr {
            left: self.arena.alloc(left),
            op,
            right: self.arena.alloc(right),
            span,
        }))
    }

    /// A conditional node.
    pub fn conditional(
        &self,
        condition: Expr<'ast>,
        then_expr: Expr<'ast>,
        else_expr: Expr<'ast>,
        span: Span,
    ) -> Expr<'ast> {
        Expr::Conditional(self.arena.alloc(ConditionalExpr {
            condition: self.arena.alloc(condition),
            then_expr: self.arena.alloc(then_expr),
            else_expr: self.arena.alloc(else_expr),
            span,
        }))
    }

    /// A member-access node.
    pub fn member(&self, target: Expr<'ast>, member: &str, span: Span) -> Expr<'ast> {
        let name = self.arena.alloc_str(member);
        Expr::Member(self.arena.alloc(MemberExpr {
            target: self.arena.alloc(target),
            member: Ident::new(name, span),
            span,
        }))
    }

    /// An index node.
    pub fn index(&self, target: Expr<'ast>, index: Expr<'ast>, span: Span) -> Expr<'ast> {
        Expr::Index(self.arena.alloc(IndexExpr {
            target: self.arena.alloc(target),
            index: self.arena.alloc(index),
            span,
        }))
    }

    /// A call node.
    pub fn call(&self, callee: Expr<'ast>, args: Vec<Expr<'ast>>, span: Span) -> Expr<'ast> {
        Expr::Call(self.arena.alloc(CallExpr {
            callee: self.arena.alloc(callee),
            args: self.arena.alloc_slice_clone(&args),
            span,
        }))
    }

    /// A parenthesized node.
    pub fn paren(&self, inner: Expr<'ast>, span: Span) -> Expr<'ast> {
        Expr::Paren(self.arena.alloc(ParenExpr {
            inner: self.arena.alloc(inner),
            span,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_tree() {
        let arena = Bump::new();
        let b = ExprBuilder::new(&arena);
        let expr = b.binary(
            b.ident("a", Span::new(1, 1, 1)),
            BinaryOperator::Add,
            b.literal(Value::Int(1), Span::new(1, 5, 1)),
            Span::new(1, 1, 5),
        );
        let Expr::Binary(binary) = expr else {
            panic!("expected binary node");
        };
        assert_eq!(binary.op, BinaryOperator::Add);
        assert!(matches!(binary.left, Expr::Ident(_)));
        assert!(matches!(binary.right, Expr::Literal(_)));
    }

    #[test]
    fn call_arguments_keep_order() {
        let arena = Bump::new();
        let b = ExprBuilder::new(&arena);
        let span = Span::point(1, 1);
        let expr = b.call(
            b.ident("f", span),
            vec![b.literal(Value::Int(1), span), b.literal(Value::Int(2), span)],
            span,
        );
        let Expr::Call(call) = expr else {
            panic!("expected call node");
        };
        assert_eq!(call.args.len(), 2);
    }
}

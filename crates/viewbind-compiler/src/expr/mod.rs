//! Node-kind compilation.
//!
//! One module per parse-tree node kind, dispatched from [`compile_expr`].
//! Every function returns `Result<TargetExpr, BindingErrors>`: nodes with
//! several children compile each child before giving up, so the collection
//! carries diagnostics from every failed child, while single-child nodes
//! propagate immediately.

mod binary;
mod calls;
mod identifiers;
mod literals;
mod member;
mod ternary;
mod unary;

use viewbind_ast::Expr;
use viewbind_core::{BindingError, BindingErrors, DataType, Span, TargetExpr};

use crate::ExprCompiler;

pub(crate) type Result<T> = std::result::Result<T, BindingErrors>;

/// Compile any expression node.
pub(crate) fn compile_expr(c: &ExprCompiler<'_>, expr: &Expr<'_>) -> Result<TargetExpr> {
    match expr {
        Expr::Literal(e) => literals::compile_literal(e),
        Expr::Ident(e) => identifiers::compile_ident(c, e),
        Expr::Unary(e) => unary::compile_unary(c, e),
        Expr::Binary(e) => binary::compile_binary(c, e),
        Expr::Conditional(e) => ternary::compile_conditional(c, e),
        Expr::Member(e) => member::compile_member(c, e),
        Expr::Index(e) => member::compile_index(c, e),
        Expr::Call(e) => calls::compile_call(c, e),
        // Parentheses only group; the compiled tree has no node for them.
        Expr::Paren(e) => compile_expr(c, e.inner),
    }
}

/// Compile an expression that must produce a usable value.
///
/// A method group is not a value until a call or delegate coercion resolves
/// it, and a bare type reference is only valid as a member-access target.
pub(crate) fn compile_value(c: &ExprCompiler<'_>, expr: &Expr<'_>) -> Result<TargetExpr> {
    let compiled = compile_expr(c, expr)?;
    reject_non_value(c, compiled, expr.span()).map_err(BindingErrors::from)
}

pub(crate) fn reject_non_value(
    c: &ExprCompiler<'_>,
    compiled: TargetExpr,
    span: Span,
) -> std::result::Result<TargetExpr, BindingError> {
    match compiled {
        TargetExpr::MethodGroup { name, .. } => {
            Err(BindingError::UnresolvedMethodGroup { name, span })
        }
        TargetExpr::StaticType { type_hash } => Err(BindingError::TypeReferenceAsValue {
            name: c.types.display_type(DataType::simple(type_hash)),
            span,
        }),
        other => Ok(other),
    }
}

/// Fold a child result into an accumulator, keeping the value on success.
pub(crate) fn collect(errors: &mut BindingErrors, result: Result<TargetExpr>) -> Option<TargetExpr> {
    match result {
        Ok(expr) => Some(expr),
        Err(child_errors) => {
            errors.merge(child_errors);
            None
        }
    }
}

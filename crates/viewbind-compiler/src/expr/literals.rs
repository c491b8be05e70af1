//! Literal compilation.

use viewbind_ast::LiteralExpr;
use viewbind_core::TargetExpr;

use super::Result;

/// Wrap a literal's already-typed value in a constant expression.
pub(crate) fn compile_literal(expr: &LiteralExpr) -> Result<TargetExpr> {
    Ok(TargetExpr::constant(expr.value.clone()))
}

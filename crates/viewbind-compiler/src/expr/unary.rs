//! Unary operator compilation.

use viewbind_ast::UnaryExpr;
use viewbind_core::TargetExpr;

use crate::ExprCompiler;
use crate::operators::{apply_unary, map_unary};

use super::{Result, compile_value};

pub(crate) fn compile_unary(c: &ExprCompiler<'_>, expr: &UnaryExpr<'_>) -> Result<TargetExpr> {
    let operand = compile_value(c, expr.operand)?;
    let op = map_unary(expr.op);
    apply_unary(c.types, op, operand, expr.span).map_err(Into::into)
}

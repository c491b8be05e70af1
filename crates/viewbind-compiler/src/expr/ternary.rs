//! Conditional (ternary) compilation.

use viewbind_ast::ConditionalExpr;
use viewbind_core::{BindingError, BindingErrors, DataType, TargetExpr, primitives};

use crate::ExprCompiler;
use crate::conversion::{common_type, convert_or_error, implicit_conversion};

use super::{Result, collect, compile_value};

pub(crate) fn compile_conditional(
    c: &ExprCompiler<'_>,
    expr: &ConditionalExpr<'_>,
) -> Result<TargetExpr> {
    let mut errors = BindingErrors::new();
    // The bool coercion belongs to the condition child, so its failure is
    // collected alongside the branches' failures rather than after them.
    let condition = collect(
        &mut errors,
        compile_value(c, expr.condition).and_then(|condition| {
            convert_or_error(
                c.types,
                condition,
                DataType::simple(primitives::BOOL),
                expr.condition.span(),
            )
            .map_err(Into::into)
        }),
    );
    let then_expr = collect(&mut errors, compile_value(c, expr.then_expr));
    let else_expr = collect(&mut errors, compile_value(c, expr.else_expr));
    let (Some(condition), Some(then_expr), Some(else_expr)) = (condition, then_expr, else_expr)
    else {
        return Err(errors);
    };

    let then_ty = then_expr.value_type();
    let else_ty = else_expr.value_type();
    let ty = common_type(then_ty, else_ty).ok_or_else(|| BindingError::IncompatibleBranches {
        then_type: c.types.display_type(then_ty),
        else_type: c.types.display_type(else_ty),
        span: expr.span,
    })?;

    // common_type only answers when both conversions exist.
    let then_expr = implicit_conversion(then_expr, ty).ok_or_else(|| BindingError::Internal {
        message: "conditional branch lost its common-type conversion".into(),
    })?;
    let else_expr = implicit_conversion(else_expr, ty).ok_or_else(|| BindingError::Internal {
        message: "conditional branch lost its common-type conversion".into(),
    })?;

    Ok(TargetExpr::Conditional {
        condition: Box::new(condition),
        then_expr: Box::new(then_expr),
        else_expr: Box::new(else_expr),
        ty,
    })
}

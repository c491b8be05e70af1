//! Call compilation.
//!
//! A call node covers two shapes: invoking a method group (overload
//! resolution against the argument list) and invoking a delegate-typed
//! value (arity and argument conversion against the registered shape).
//! The callee and every argument compile before resolution, so one bad
//! argument does not mask another.

use viewbind_ast::{CallExpr, Expr};
use viewbind_core::{BindingError, BindingErrors, TargetExpr};

use crate::ExprCompiler;
use crate::conversion::convert_or_error;
use crate::method_group::resolve_call;

use super::{Result, collect, compile_expr, compile_value, reject_non_value};

pub(crate) fn compile_call(c: &ExprCompiler<'_>, expr: &CallExpr<'_>) -> Result<TargetExpr> {
    let mut errors = BindingErrors::new();
    let callee = collect(&mut errors, compile_expr(c, expr.callee));
    let mut args = Vec::with_capacity(expr.args.len());
    for arg in expr.args {
        if let Some(compiled) = collect(&mut errors, compile_value(c, arg)) {
            args.push(compiled);
        }
    }
    let Some(callee) = callee else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    let callee = match callee {
        TargetExpr::MethodGroup { target, name } => {
            return resolve_call(c.types, *target, &name, args, expr.span).map_err(Into::into);
        }
        other => reject_non_value(c, other, expr.callee.span())?,
    };
    let callee_ty = callee.value_type();

    // Not a method group, so the only remaining callable is a value of a
    // registered delegate type.
    let Some(shape) = c.types.delegate(callee_ty.type_hash).cloned() else {
        return Err(BindingError::MethodNotFound {
            type_name: c.types.display_type(callee_ty),
            name: callee_name(expr.callee).to_string(),
            span: expr.span,
        }
        .into());
    };

    if args.len() != shape.params.len() {
        let arg_names: Vec<String> = args
            .iter()
            .map(|a| c.types.display_type(a.value_type()))
            .collect();
        return Err(BindingError::NoMatchingOverload {
            type_name: c.types.display_type(callee_ty),
            name: callee_name(expr.callee).to_string(),
            arg_types: arg_names.join(", "),
            span: expr.span,
        }
        .into());
    }

    let mut converted = Vec::with_capacity(args.len());
    for ((arg, param), node) in args.into_iter().zip(&shape.params).zip(expr.args) {
        match convert_or_error(c.types, arg, *param, node.span()) {
            Ok(arg) => converted.push(arg),
            Err(e) => errors.push(e),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(TargetExpr::Invoke {
        target: Box::new(callee),
        args: converted,
        ty: shape.return_type,
    })
}

fn callee_name<'ast>(expr: &Expr<'ast>) -> &'ast str {
    match expr {
        Expr::Ident(e) => e.ident.name,
        Expr::Member(e) => e.member.name,
        Expr::Paren(e) => callee_name(e.inner),
        _ => "<expression>",
    }
}

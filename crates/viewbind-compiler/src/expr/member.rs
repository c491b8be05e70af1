//! Member and indexer access compilation.

use viewbind_ast::{IndexExpr, MemberExpr};
use viewbind_core::{BindingError, BindingErrors, DataType, Span, TargetExpr, TypeHash};

use crate::ExprCompiler;
use crate::conversion::convert_or_error;

use super::{Result, collect, compile_expr, compile_value};

pub(crate) fn compile_member(c: &ExprCompiler<'_>, expr: &MemberExpr<'_>) -> Result<TargetExpr> {
    // The target may be a type reference (static member access), so it is
    // compiled without the value guard.
    let target = compile_expr(c, expr.target)?;
    member_access(c, target, expr.member.name, expr.member.span, expr.target.span())
        .map_err(Into::into)
}

/// Resolve a named member on a compiled target.
///
/// Static member access comes through a type-reference target; everything
/// else resolves instance members on the target's static type. A name that
/// matches a property becomes a property access, a name with method
/// overloads becomes a deferred method group, and anything else is a
/// diagnostic.
pub(crate) fn member_access(
    c: &ExprCompiler<'_>,
    target: TargetExpr,
    member: &str,
    member_span: Span,
    target_span: Span,
) -> std::result::Result<TargetExpr, BindingError> {
    if let TargetExpr::MethodGroup { name, .. } = &target {
        return Err(BindingError::UnresolvedMethodGroup {
            name: name.clone(),
            span: target_span,
        });
    }

    let (type_hash, want_static) = match &target {
        TargetExpr::StaticType { type_hash } => (*type_hash, true),
        other => (other.value_type().type_hash, false),
    };

    let not_found = |c: &ExprCompiler<'_>, type_hash: TypeHash| BindingError::MemberNotFound {
        type_name: c.types.display_type(DataType::simple(type_hash)),
        member: member.to_string(),
        span: member_span,
    };

    let Some(entry) = c.types.entry(type_hash) else {
        return Err(not_found(c, type_hash));
    };

    if let Some(property) = entry.property(member, want_static) {
        return Ok(TargetExpr::Property {
            target: Box::new(target),
            name: member.to_string(),
            ty: property.data_type,
            writable: property.is_writable(),
        });
    }
    if entry.has_method(member, want_static) {
        return Ok(TargetExpr::MethodGroup {
            target: Box::new(target),
            name: member.to_string(),
        });
    }
    Err(not_found(c, type_hash))
}

pub(crate) fn compile_index(c: &ExprCompiler<'_>, expr: &IndexExpr<'_>) -> Result<TargetExpr> {
    let mut errors = BindingErrors::new();
    let target = collect(&mut errors, compile_value(c, expr.target));
    let index = collect(&mut errors, compile_value(c, expr.index));
    let (Some(target), Some(index)) = (target, index) else {
        return Err(errors);
    };

    let target_ty = target.value_type();
    let indexer = c
        .types
        .entry(target_ty.type_hash)
        .and_then(|e| e.indexer.as_ref());
    let Some(indexer) = indexer else {
        return Err(BindingError::IndexerNotSupported {
            type_name: c.types.display_type(target_ty),
            span: expr.span,
        }
        .into());
    };

    let index = convert_or_error(c.types, index, indexer.index_type, expr.index.span())?;
    Ok(TargetExpr::Index {
        target: Box::new(target),
        index: Box::new(index),
        ty: indexer.element_type,
        writable: indexer.writable,
    })
}

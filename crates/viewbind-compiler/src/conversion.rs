//! Implicit conversions between static types.
//!
//! The conversion set is deliberately small: identity, null into any
//! nullable type, `int` widening to `double`, and nullable lifting. A
//! non-identity conversion wraps the expression in a conversion node so the
//! host evaluator sees the coercion explicitly.

use viewbind_core::{BindingError, DataType, Span, TargetExpr, primitives};
use viewbind_registry::TypeRegistry;

/// Convert `expr` to `to` if an implicit conversion exists.
///
/// Identity returns the expression unwrapped; every other accepted
/// conversion is materialized as a conversion node.
pub fn implicit_conversion(expr: TargetExpr, to: DataType) -> Option<TargetExpr> {
    let from = expr.value_type();
    if from == to {
        return Some(expr);
    }
    if convertible(from, to) {
        return Some(TargetExpr::Convert {
            operand: Box::new(expr),
            ty: to,
        });
    }
    None
}

/// Convert `expr` to `to`, or report why it cannot be done.
pub fn convert_or_error(
    registry: &TypeRegistry,
    expr: TargetExpr,
    to: DataType,
    span: Span,
) -> Result<TargetExpr, BindingError> {
    let from = expr.value_type();
    implicit_conversion(expr, to).ok_or_else(|| BindingError::NotConvertible {
        from: registry.display_type(from),
        to: registry.display_type(to),
        span,
    })
}

/// Whether a non-identity implicit conversion from `from` to `to` exists.
fn convertible(from: DataType, to: DataType) -> bool {
    // The null literal converts to any nullable type.
    if from.is_null() {
        return to.nullable;
    }
    // Same underlying type, lifting into nullable.
    if from.type_hash == to.type_hash {
        return !from.nullable && to.nullable;
    }
    // int widens to double, with or without lifting.
    if from.type_hash == primitives::INT && to.type_hash == primitives::DOUBLE {
        return !from.nullable || to.nullable;
    }
    false
}

/// The least common type both sides of a two-branch expression convert to.
pub fn common_type(a: DataType, b: DataType) -> Option<DataType> {
    if a == b {
        return Some(a);
    }
    if a.is_null() {
        return if b.is_null() { Some(a) } else { Some(b.as_nullable()) };
    }
    if b.is_null() {
        return Some(a.as_nullable());
    }
    let nullable = a.nullable || b.nullable;
    if a.type_hash == b.type_hash {
        return Some(DataType {
            type_hash: a.type_hash,
            nullable,
        });
    }
    // Mixed numerics meet at double.
    if a.is_numeric() && b.is_numeric() {
        return Some(DataType {
            type_hash: primitives::DOUBLE,
            nullable,
        });
    }
    None
}

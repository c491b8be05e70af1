//! Binary operator and assignment compilation.
//!
//! Both operands compile before any typing decision, so a failure on the
//! left does not hide an independent failure on the right.

use viewbind_ast::BinaryExpr;
use viewbind_core::{BindingError, BindingErrors, TargetExpr};

use crate::ExprCompiler;
use crate::conversion::convert_or_error;
use crate::operators::{apply_binary, map_binary};

use super::{Result, collect, compile_value};

pub(crate) fn compile_binary(c: &ExprCompiler<'_>, expr: &BinaryExpr<'_>) -> Result<TargetExpr> {
    let mut errors = BindingErrors::new();
    let left = collect(&mut errors, compile_value(c, expr.left));
    let right = collect(&mut errors, compile_value(c, expr.right));
    let (Some(left), Some(right)) = (left, right) else {
        return Err(errors);
    };

    match map_binary(expr.op) {
        Some(op) => apply_binary(c.types, op, left, right, expr.span).map_err(Into::into),
        // The assignment token is the one operator without a value-level
        // operation; it needs an addressable left side instead.
        None => compile_assignment(c, left, right, expr),
    }
}

fn compile_assignment(
    c: &ExprCompiler<'_>,
    left: TargetExpr,
    right: TargetExpr,
    expr: &BinaryExpr<'_>,
) -> Result<TargetExpr> {
    if !left.is_assignable() {
        return Err(BindingError::NonAddressableAssignmentTarget {
            span: expr.left.span(),
        }
        .into());
    }
    let ty = left.value_type();
    let value = convert_or_error(c.types, right, ty, expr.right.span())?;
    Ok(TargetExpr::Assign {
        target: Box::new(left),
        value: Box::new(value),
        ty,
    })
}

#[cfg(test)]
mod tests {
    use viewbind_ast::{BinaryOperator, Bump, ExprBuilder};
    use viewbind_core::{
        BindingError, DataType, PropertyEntry, Span, TargetExpr, TypeEntry, Value, primitives,
    };
    use viewbind_registry::TypeRegistry;

    use crate::{ExprCompiler, expr::compile_expr};

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::with_primitives();
        registry
            .register(
                TypeEntry::new("Customer")
                    .with_property(PropertyEntry::new(
                        "Name",
                        DataType::simple(primitives::STRING),
                    ))
                    .with_property(PropertyEntry::read_only(
                        "Id",
                        DataType::simple(primitives::INT),
                    )),
            )
            .unwrap();
        registry
    }

    fn compiler(registry: &TypeRegistry) -> ExprCompiler<'_> {
        let scope = DataType::simple(registry.entry_by_name("Customer").unwrap().type_hash);
        ExprCompiler::new(registry, scope)
    }

    #[test]
    fn both_sides_report_their_own_errors() {
        let registry = registry();
        let compiler = compiler(&registry);

        let arena = Bump::new();
        let b = ExprBuilder::new(&arena);
        let expr = b.binary(
            b.ident("missingLeft", Span::new(1, 1, 11)),
            BinaryOperator::Add,
            b.ident("missingRight", Span::new(1, 15, 12)),
            Span::new(1, 1, 26),
        );

        let errors = compile_expr(&compiler, &expr).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.as_single().is_none());
        let spans: Vec<_> = errors.iter().filter_map(|e| e.span()).collect();
        assert_eq!(spans, [Span::new(1, 1, 11), Span::new(1, 15, 12)]);
    }

    #[test]
    fn assignment_to_writable_property() {
        let registry = registry();
        let compiler = compiler(&registry);

        let arena = Bump::new();
        let b = ExprBuilder::new(&arena);
        let span = Span::point(1, 1);
        let expr = b.binary(
            b.ident("Name", span),
            BinaryOperator::Assign,
            b.literal(Value::String("x".into()), span),
            span,
        );

        let compiled = compile_expr(&compiler, &expr).unwrap();
        let TargetExpr::Assign { target, ty, .. } = compiled else {
            panic!("expected assignment node");
        };
        assert!(target.is_assignable());
        assert!(ty.is_string());
    }

    #[test]
    fn assignment_to_read_only_property_is_rejected() {
        let registry = registry();
        let compiler = compiler(&registry);

        let arena = Bump::new();
        let b = ExprBuilder::new(&arena);
        let expr = b.binary(
            b.ident("Id", Span::new(1, 1, 2)),
            BinaryOperator::Assign,
            b.literal(Value::Int(7), Span::new(1, 6, 1)),
            Span::new(1, 1, 6),
        );

        let errors = compile_expr(&compiler, &expr).unwrap_err();
        let Some(BindingError::NonAddressableAssignmentTarget { span }) = errors.as_single()
        else {
            panic!("expected NonAddressableAssignmentTarget");
        };
        assert_eq!(*span, Span::new(1, 1, 2));
    }

    #[test]
    fn assignment_to_literal_is_rejected() {
        let registry = registry();
        let compiler = compiler(&registry);

        let arena = Bump::new();
        let b = ExprBuilder::new(&arena);
        let span = Span::point(1, 1);
        let expr = b.binary(
            b.literal(Value::Int(1), span),
            BinaryOperator::Assign,
            b.literal(Value::Int(2), span),
            span,
        );

        let errors = compile_expr(&compiler, &expr).unwrap_err();
        assert!(matches!(
            errors.as_single(),
            Some(BindingError::NonAddressableAssignmentTarget { .. })
        ));
    }

    #[test]
    fn assignment_converts_the_value() {
        let mut registry = registry();
        registry
            .register(
                TypeEntry::new("Stats").with_property(PropertyEntry::new(
                    "Ratio",
                    DataType::simple(primitives::DOUBLE),
                )),
            )
            .unwrap();
        let scope = DataType::simple(registry.entry_by_name("Stats").unwrap().type_hash);
        let compiler = ExprCompiler::new(&registry, scope);

        let arena = Bump::new();
        let b = ExprBuilder::new(&arena);
        let span = Span::point(1, 1);
        let expr = b.binary(
            b.ident("Ratio", span),
            BinaryOperator::Assign,
            b.literal(Value::Int(2), span),
            span,
        );

        let compiled = compile_expr(&compiler, &expr).unwrap();
        let TargetExpr::Assign { value, .. } = compiled else {
            panic!("expected assignment node");
        };
        assert!(matches!(*value, TargetExpr::Convert { .. }));
    }
}

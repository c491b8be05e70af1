//! End-to-end binding compilation scenarios against a realistic view model.

use viewbind::prelude::*;

fn int() -> DataType {
    DataType::simple(primitives::INT)
}

fn string() -> DataType {
    DataType::simple(primitives::STRING)
}

fn bool_ty() -> DataType {
    DataType::simple(primitives::BOOL)
}

/// A registry shaped like a small e-commerce view model.
fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::with_primitives();

    registry
        .register(
            TypeEntry::new("Address")
                .with_property(PropertyEntry::new("City", string()))
                .with_property(PropertyEntry::new("Zip", string())),
        )
        .unwrap();

    registry
        .register(TypeEntry::new("OrderList").with_indexer(IndexerEntry::read_only(
            int(),
            DataType::simple(TypeHash::from_name("Order")),
        )))
        .unwrap();

    registry
        .register(
            TypeEntry::new("Order")
                .with_property(PropertyEntry::read_only("Total", DataType::simple(primitives::DOUBLE))),
        )
        .unwrap();

    registry
        .register(
            TypeEntry::new("Customer")
                .with_property(PropertyEntry::new("Name", string()))
                .with_property(PropertyEntry::new("Age", int()))
                .with_property(PropertyEntry::read_only("Id", int()))
                .with_property(PropertyEntry::new(
                    "Nickname",
                    DataType::nullable(primitives::STRING),
                ))
                .with_property(PropertyEntry::new(
                    "Home",
                    DataType::simple(TypeHash::from_name("Address")),
                ))
                .with_property(PropertyEntry::read_only(
                    "Orders",
                    DataType::simple(TypeHash::from_name("OrderList")),
                ))
                .with_method(MethodEntry::new("Greet", vec![], string()))
                .with_method(MethodEntry::new("Load", vec![int()], DataType::void()))
                .with_method(MethodEntry::new("Load", vec![string()], DataType::void())),
        )
        .unwrap();

    registry
        .register(
            TypeEntry::new("Math")
                .with_method(MethodEntry::new("Abs", vec![int()], int()).into_static())
                .with_method(
                    MethodEntry::new(
                        "Round",
                        vec![DataType::simple(primitives::DOUBLE)],
                        int(),
                    )
                    .into_static(),
                ),
        )
        .unwrap();

    registry
}

fn customer_scope(registry: &TypeRegistry) -> DataType {
    DataType::simple(registry.entry_by_name("Customer").unwrap().type_hash)
}

fn span() -> Span {
    Span::point(1, 1)
}

#[test]
fn compilation_is_deterministic() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.binary(
        b.member(b.ident("Home", span()), "City", span()),
        BinaryOperator::Add,
        b.literal(Value::String("!".into()), span()),
        span(),
    );

    let first = compiler.compile(&expr).unwrap();
    let second = compiler.compile(&expr).unwrap();
    assert_eq!(first, second);
}

#[test]
fn property_chain_compiles_to_nested_access() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.member(b.ident("Home", span()), "Zip", span());

    let compiled = compiler.compile(&expr).unwrap();
    let TargetExpr::Property { target, name, ty, .. } = compiled else {
        panic!("expected property access");
    };
    assert_eq!(name, "Zip");
    assert!(ty.is_string());
    let TargetExpr::Property { target: root, .. } = *target else {
        panic!("expected nested property access");
    };
    assert!(matches!(*root, TargetExpr::ScopeRoot { .. }));
}

#[test]
fn parentheses_leave_no_trace() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let bare = b.ident("Age", span());
    let wrapped = b.paren(b.paren(b.ident("Age", span()), span()), span());

    assert_eq!(
        compiler.compile(&bare).unwrap(),
        compiler.compile(&wrapped).unwrap()
    );
}

#[test]
fn both_operands_report_independent_errors() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.binary(
        b.ident("nope", Span::new(1, 1, 4)),
        BinaryOperator::Add,
        b.member(b.ident("Home", span()), "Country", Span::new(1, 13, 7)),
        span(),
    );

    let errors = compiler.compile(&expr).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.as_single().is_none());
    let mut iter = errors.iter();
    assert!(matches!(
        iter.next(),
        Some(BindingError::IdentifierNotFound { .. })
    ));
    assert!(matches!(
        iter.next(),
        Some(BindingError::MemberNotFound { .. })
    ));
}

#[test]
fn single_error_propagates_undisturbed() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.unary(
        UnaryOperator::Minus,
        b.ident("missing", Span::new(1, 2, 7)),
        span(),
    );

    let errors = compiler.compile(&expr).unwrap_err();
    let Some(BindingError::IdentifierNotFound { name, span }) = errors.as_single() else {
        panic!("expected a single IdentifierNotFound");
    };
    assert_eq!(name, "missing");
    assert_eq!(*span, Span::new(1, 2, 7));
}

#[test]
fn conditional_branches_must_share_a_type() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.conditional(
        b.binary(
            b.ident("Age", span()),
            BinaryOperator::GreaterEqual,
            b.literal(Value::Int(18), span()),
            span(),
        ),
        b.ident("Name", span()),
        b.ident("Age", span()),
        span(),
    );

    let errors = compiler.compile(&expr).unwrap_err();
    assert!(matches!(
        errors.as_single(),
        Some(BindingError::IncompatibleBranches { .. })
    ));
}

#[test]
fn coalesce_emits_a_binary_node_with_unwrapped_type() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.binary(
        b.ident("Nickname", span()),
        BinaryOperator::Coalesce,
        b.ident("Name", span()),
        span(),
    );

    let compiled = compiler.compile(&expr).unwrap();
    let TargetExpr::Binary { op, ty, .. } = compiled else {
        panic!("expected binary node");
    };
    assert_eq!(op, viewbind::core::BinaryOp::Coalesce);
    assert_eq!(ty, string());
}

#[test]
fn static_method_call_through_type_name() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.call(
        b.member(b.ident("Math", span()), "Abs", span()),
        vec![b.ident("Age", span())],
        span(),
    );

    let compiled = compiler.compile(&expr).unwrap();
    let TargetExpr::Call { target, ty, .. } = compiled else {
        panic!("expected call node");
    };
    assert!(target.is_static_type());
    assert_eq!(ty, int());
}

#[test]
fn overload_is_picked_by_exact_argument_types() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.call(
        b.ident("Load", span()),
        vec![b.ident("Name", span())],
        span(),
    );

    let compiled = compiler.compile(&expr).unwrap();
    let TargetExpr::Call { signature, .. } = compiled else {
        panic!("expected call node");
    };
    assert_eq!(signature.params, vec![string()]);
}

#[test]
fn failed_overload_resolution_names_the_arguments() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.call(
        b.ident("Load", span()),
        vec![b.literal(Value::Bool(true), span())],
        span(),
    );

    let errors = compiler.compile(&expr).unwrap_err();
    let Some(BindingError::NoMatchingOverload { type_name, name, arg_types, .. }) =
        errors.as_single()
    else {
        panic!("expected NoMatchingOverload");
    };
    assert_eq!(type_name, "Customer");
    assert_eq!(name, "Load");
    assert_eq!(arg_types, "bool");
}

#[test]
fn method_reference_binds_to_expected_delegate_shape() {
    let mut registry = registry();
    let loader = registry.register_delegate(DelegateShape::new(vec![int()], DataType::void()));
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.ident("Load", span());

    let compiled = compiler
        .compile_to(&expr, DataType::simple(loader))
        .unwrap();
    let TargetExpr::Delegate { target, shape, .. } = compiled else {
        panic!("expected delegate node");
    };
    // Instance method: the delegate closes over the live scope object.
    assert!(matches!(*target, TargetExpr::ScopeRoot { .. }));
    assert_eq!(shape.params, vec![int()]);
}

#[test]
fn ambiguous_method_reference_without_a_shape() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.ident("Load", span());

    let errors = compiler.compile_to(&expr, bool_ty()).unwrap_err();
    assert!(matches!(
        errors.as_single(),
        Some(BindingError::AmbiguousMethodReference { .. })
    ));
}

#[test]
fn indexer_access_and_its_absence() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let ok = b.member(
        b.index(b.ident("Orders", span()), b.literal(Value::Int(0), span()), span()),
        "Total",
        span(),
    );
    let compiled = compiler.compile(&ok).unwrap();
    assert_eq!(compiled.value_type().type_hash, primitives::DOUBLE);

    let bad = b.index(b.ident("Home", span()), b.literal(Value::Int(0), span()), span());
    let errors = compiler.compile(&bad).unwrap_err();
    let Some(BindingError::IndexerNotSupported { type_name, .. }) = errors.as_single() else {
        panic!("expected IndexerNotSupported");
    };
    assert_eq!(type_name, "Address");
}

#[test]
fn assignment_requires_an_addressable_target() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let ok = b.binary(
        b.ident("Age", span()),
        BinaryOperator::Assign,
        b.literal(Value::Int(30), span()),
        span(),
    );
    assert!(matches!(
        compiler.compile(&ok).unwrap(),
        TargetExpr::Assign { .. }
    ));

    // Id is read-only; Greet() is not a location at all.
    let read_only = b.binary(
        b.ident("Id", span()),
        BinaryOperator::Assign,
        b.literal(Value::Int(1), span()),
        span(),
    );
    let call_target = b.binary(
        b.call(b.ident("Greet", span()), vec![], span()),
        BinaryOperator::Assign,
        b.literal(Value::String("x".into()), span()),
        span(),
    );
    for expr in [read_only, call_target] {
        let errors = compiler.compile(&expr).unwrap_err();
        assert!(matches!(
            errors.as_single(),
            Some(BindingError::NonAddressableAssignmentTarget { .. })
        ));
    }
}

#[test]
fn symbol_frames_shadow_without_mutating_outer_context() {
    let registry = registry();
    let scope = customer_scope(&registry);

    let outer_symbols = SymbolRegistry::new().with_symbol(
        "pageTitle",
        Symbol::External {
            data_type: string(),
        },
    );
    let inner_symbols = outer_symbols.with_symbol(
        "pageTitle",
        Symbol::External {
            data_type: int(),
        },
    );

    let outer = ExprCompiler::new(&registry, scope).with_symbols(outer_symbols);
    let inner = ExprCompiler::new(&registry, scope).with_symbols(inner_symbols);

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.ident("pageTitle", span());

    assert!(outer.compile(&expr).unwrap().value_type().is_string());
    assert_eq!(inner.compile(&expr).unwrap().value_type(), int());
    // Compiling through the inner context did not disturb the outer one.
    assert!(outer.compile(&expr).unwrap().value_type().is_string());
}

#[test]
fn nested_scope_sees_its_own_members() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));
    let address_scope =
        DataType::simple(registry.entry_by_name("Address").unwrap().type_hash);
    let nested = compiler.nested(address_scope);

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let expr = b.ident("City", span());

    assert!(nested.compile(&expr).unwrap().value_type().is_string());
    assert!(compiler.compile(&expr).is_err());
}

#[test]
fn string_concatenation_and_comparison() {
    let registry = registry();
    let compiler = ExprCompiler::new(&registry, customer_scope(&registry));

    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);
    let concat = b.binary(
        b.literal(Value::String("Hello ".into()), span()),
        BinaryOperator::Add,
        b.ident("Name", span()),
        span(),
    );
    assert!(compiler.compile(&concat).unwrap().value_type().is_string());

    let comparison = b.binary(
        b.ident("Age", span()),
        BinaryOperator::Less,
        b.literal(Value::double(21.5), span()),
        span(),
    );
    let compiled = compiler.compile(&comparison).unwrap();
    assert!(compiled.value_type().is_bool());
    let TargetExpr::Binary { left, .. } = compiled else {
        panic!("expected binary node");
    };
    // The int operand was widened to match the double.
    assert!(matches!(*left, TargetExpr::Convert { .. }));
}

//! Method-group resolution.
//!
//! A member access that names overloaded methods compiles to a deferred
//! method-group expression. The group resolves in exactly two ways: an
//! argument list turns it into a direct call, and a requested delegate shape
//! (or a single unambiguous overload) turns it into a delegate. Anything
//! else is a diagnostic at the position that consumed the group.

use viewbind_core::{
    BindingError, DataType, DelegateShape, Span, TargetExpr, TypeHash,
};
use viewbind_registry::TypeRegistry;

/// The receiver of a method group: which type the overloads live on and
/// whether they are looked up as statics.
struct Receiver {
    type_hash: TypeHash,
    is_static: bool,
}

fn receiver_of(target: &TargetExpr) -> Receiver {
    match target {
        TargetExpr::StaticType { type_hash } => Receiver {
            type_hash: *type_hash,
            is_static: true,
        },
        other => Receiver {
            type_hash: other.value_type().type_hash,
            is_static: false,
        },
    }
}

fn display_name(registry: &TypeRegistry, type_hash: TypeHash) -> String {
    registry.display_type(DataType::simple(type_hash))
}

/// Resolve a method group against an explicit argument list.
///
/// Overload selection is exact: an overload matches when every argument's
/// static type equals the parameter type. A host that registers the same
/// exact signature twice gets an ambiguity diagnostic rather than an
/// arbitrary pick.
pub fn resolve_call(
    registry: &TypeRegistry,
    target: TargetExpr,
    name: &str,
    args: Vec<TargetExpr>,
    span: Span,
) -> Result<TargetExpr, BindingError> {
    let receiver = receiver_of(&target);
    let entry = registry
        .entry(receiver.type_hash)
        .ok_or_else(|| BindingError::Internal {
            message: format!("method group over unregistered type {}", receiver.type_hash),
        })?;

    let arg_types: Vec<DataType> = args.iter().map(TargetExpr::value_type).collect();
    let mut matches = entry
        .methods_named(name, receiver.is_static)
        .filter(|m| m.params == arg_types);
    let selected = matches.next();
    if selected.is_some() && matches.next().is_some() {
        return Err(BindingError::AmbiguousMethodReference {
            type_name: display_name(registry, receiver.type_hash),
            name: name.to_string(),
            span,
        });
    }

    let Some(method) = selected else {
        let arg_names: Vec<String> = arg_types
            .iter()
            .map(|t| registry.display_type(*t))
            .collect();
        return Err(BindingError::NoMatchingOverload {
            type_name: display_name(registry, receiver.type_hash),
            name: name.to_string(),
            arg_types: arg_names.join(", "),
            span,
        });
    };

    Ok(TargetExpr::Call {
        target: Box::new(target),
        method: name.to_string(),
        signature: method.shape(),
        args,
        ty: method.return_type,
    })
}

/// Resolve a method group to a delegate.
///
/// With an expected shape, the overload whose signature equals the shape is
/// selected; with no shape, the group must contain exactly one overload.
pub fn resolve_delegate(
    registry: &TypeRegistry,
    target: TargetExpr,
    name: &str,
    expected: Option<&DelegateShape>,
    span: Span,
) -> Result<TargetExpr, BindingError> {
    let receiver = receiver_of(&target);
    let entry = registry
        .entry(receiver.type_hash)
        .ok_or_else(|| BindingError::Internal {
            message: format!("method group over unregistered type {}", receiver.type_hash),
        })?;

    let mut overloads = entry.methods_named(name, receiver.is_static);

    let method = match expected {
        Some(shape) => {
            let found = overloads
                .find(|m| m.params == shape.params && m.return_type == shape.return_type);
            found.ok_or_else(|| {
                let arg_names: Vec<String> = shape
                    .params
                    .iter()
                    .map(|t| registry.display_type(*t))
                    .collect();
                BindingError::NoMatchingOverload {
                    type_name: display_name(registry, receiver.type_hash),
                    name: name.to_string(),
                    arg_types: arg_names.join(", "),
                    span,
                }
            })?
        }
        None => {
            let first = overloads.next().ok_or_else(|| BindingError::Internal {
                message: format!("empty method group '{name}'"),
            })?;
            if overloads.next().is_some() {
                return Err(BindingError::AmbiguousMethodReference {
                    type_name: display_name(registry, receiver.type_hash),
                    name: name.to_string(),
                    span,
                });
            }
            first
        }
    };

    Ok(TargetExpr::Delegate {
        target: Box::new(target),
        method: name.to_string(),
        shape: method.shape(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewbind_core::{MethodEntry, TypeEntry, Value, primitives};

    fn int() -> DataType {
        DataType::simple(primitives::INT)
    }

    fn string() -> DataType {
        DataType::simple(primitives::STRING)
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::with_primitives();
        registry
            .register(
                TypeEntry::new("Customer")
                    .with_method(MethodEntry::new("Load", vec![int()], DataType::void()))
                    .with_method(MethodEntry::new("Load", vec![string()], DataType::void()))
                    .with_method(MethodEntry::new("Save", vec![], int())),
            )
            .unwrap();
        registry
    }

    fn customer() -> TargetExpr {
        TargetExpr::ScopeRoot {
            ty: DataType::simple(TypeHash::from_name("Customer")),
        }
    }

    #[test]
    fn exact_overload_is_selected() {
        let registry = registry();
        let call = resolve_call(
            &registry,
            customer(),
            "Load",
            vec![TargetExpr::constant(Value::String("x".into()))],
            Span::point(1, 1),
        )
        .unwrap();
        let TargetExpr::Call { signature, .. } = call else {
            panic!("expected call node");
        };
        assert_eq!(signature.params, vec![string()]);
    }

    #[test]
    fn no_overload_names_arguments() {
        let registry = registry();
        let err = resolve_call(
            &registry,
            customer(),
            "Load",
            vec![TargetExpr::constant(Value::Bool(true))],
            Span::point(1, 10),
        )
        .unwrap_err();
        let BindingError::NoMatchingOverload { type_name, name, arg_types, .. } = err else {
            panic!("expected NoMatchingOverload");
        };
        assert_eq!(type_name, "Customer");
        assert_eq!(name, "Load");
        assert_eq!(arg_types, "bool");
    }

    #[test]
    fn shaped_delegate_selects_among_overloads() {
        let registry = registry();
        let shape = DelegateShape::new(vec![int()], DataType::void());
        let delegate = resolve_delegate(
            &registry,
            customer(),
            "Load",
            Some(&shape),
            Span::point(1, 1),
        )
        .unwrap();
        let TargetExpr::Delegate { shape: resolved, .. } = delegate else {
            panic!("expected delegate node");
        };
        assert_eq!(resolved.params, vec![int()]);
    }

    #[test]
    fn shapeless_reference_to_overloaded_group_is_ambiguous() {
        let registry = registry();
        let err = resolve_delegate(&registry, customer(), "Load", None, Span::point(1, 1))
            .unwrap_err();
        assert!(matches!(err, BindingError::AmbiguousMethodReference { .. }));
    }

    #[test]
    fn shapeless_reference_to_single_overload_resolves() {
        let registry = registry();
        let delegate =
            resolve_delegate(&registry, customer(), "Save", None, Span::point(1, 1)).unwrap();
        let TargetExpr::Delegate { shape, .. } = delegate else {
            panic!("expected delegate node");
        };
        assert!(shape.params.is_empty());
        assert_eq!(shape.return_type, int());
    }
}

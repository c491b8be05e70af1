//! viewbind compiles data-binding expressions into typed, host-evaluable
//! target expressions.
//!
//! A host registers its bindable types once in a
//! [`TypeRegistry`](viewbind_registry::TypeRegistry), parses each binding
//! into a [`viewbind_ast`] tree, and hands the tree to an
//! [`ExprCompiler`](viewbind_compiler::ExprCompiler). The result is a
//! [`TargetExpr`](viewbind_core::TargetExpr) the host evaluates against
//! live scope objects; compilation itself never touches one.
//!
//! # Example
//!
//! ```
//! use viewbind::prelude::*;
//!
//! let mut registry = TypeRegistry::with_primitives();
//! registry
//!     .register(
//!         TypeEntry::new("Customer")
//!             .with_property(PropertyEntry::new("Name", DataType::simple(primitives::STRING)))
//!             .with_property(PropertyEntry::new("Age", DataType::simple(primitives::INT))),
//!     )
//!     .unwrap();
//!
//! let scope = DataType::simple(registry.entry_by_name("Customer").unwrap().type_hash);
//! let compiler = ExprCompiler::new(&registry, scope);
//!
//! // Age >= 18
//! let arena = Bump::new();
//! let b = ExprBuilder::new(&arena);
//! let expr = b.binary(
//!     b.ident("Age", Span::new(1, 1, 3)),
//!     BinaryOperator::GreaterEqual,
//!     b.literal(Value::Int(18), Span::new(1, 8, 2)),
//!     Span::new(1, 1, 9),
//! );
//!
//! let compiled = compiler.compile(&expr).unwrap();
//! assert!(compiled.value_type().is_bool());
//! ```

pub use viewbind_ast as ast;
pub use viewbind_compiler as compiler;
pub use viewbind_core as core;
pub use viewbind_registry as registry;

pub mod prelude {
    pub use viewbind_ast::{BinaryOperator, Bump, Expr, ExprBuilder, UnaryOperator};
    pub use viewbind_compiler::{ExprCompiler, Symbol, SymbolRegistry};
    pub use viewbind_core::{
        BindingError, BindingErrors, DataType, DelegateShape, IndexerEntry, MethodEntry,
        PropertyEntry, Span, TargetExpr, TypeEntry, TypeHash, Value, primitives,
    };
    pub use viewbind_registry::{RegistryError, TypeRegistry};
}

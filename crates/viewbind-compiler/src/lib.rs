//! Compilation of binding parse trees into typed target expressions.
//!
//! An [`ExprCompiler`] holds everything one compilation reads: the host's
//! type registry, the symbol registry, and the static type of the scope
//! object. It borrows the registry and owns nothing mutable, so one
//! compiler (or many, sharing a registry) can run on any thread.
//!
//! # Example
//!
//! ```
//! use viewbind_ast::{Bump, ExprBuilder};
//! use viewbind_compiler::ExprCompiler;
//! use viewbind_core::{DataType, PropertyEntry, Span, TypeEntry, primitives};
//! use viewbind_registry::TypeRegistry;
//!
//! let mut registry = TypeRegistry::with_primitives();
//! registry
//!     .register(
//!         TypeEntry::new("Customer")
//!             .with_property(PropertyEntry::new("Name", DataType::simple(primitives::STRING))),
//!     )
//!     .unwrap();
//!
//! let scope = DataType::simple(registry.entry_by_name("Customer").unwrap().type_hash);
//! let compiler = ExprCompiler::new(&registry, scope);
//!
//! let arena = Bump::new();
//! let b = ExprBuilder::new(&arena);
//! let expr = b.ident("Name", Span::new(1, 1, 4));
//! let compiled = compiler.compile(&expr).unwrap();
//! assert!(compiled.value_type().is_string());
//! ```

pub mod conversion;
pub mod expr;
pub mod method_group;
pub mod operators;
pub mod symbols;

use viewbind_ast::Expr;
use viewbind_core::{BindingErrors, DataType, TargetExpr};
use viewbind_registry::TypeRegistry;

pub use symbols::{Symbol, SymbolRegistry};

use crate::conversion::convert_or_error;
use crate::expr::{compile_expr, reject_non_value};
use crate::method_group::resolve_delegate;

/// Compiles parse trees against one scope type and symbol registry.
#[derive(Debug, Clone)]
pub struct ExprCompiler<'c> {
    pub(crate) types: &'c TypeRegistry,
    pub(crate) symbols: SymbolRegistry,
    pub(crate) scope: DataType,
}

impl<'c> ExprCompiler<'c> {
    /// A compiler for bindings evaluated against a scope object of type
    /// `scope`, with no ambient symbols.
    pub fn new(types: &'c TypeRegistry, scope: DataType) -> Self {
        Self {
            types,
            symbols: SymbolRegistry::new(),
            scope,
        }
    }

    /// Replace the symbol registry.
    pub fn with_symbols(mut self, symbols: SymbolRegistry) -> Self {
        self.symbols = symbols;
        self
    }

    /// A compiler for a nested binding context: a new scope type, with this
    /// compiler's symbols still visible.
    pub fn nested(&self, scope: DataType) -> Self {
        Self {
            types: self.types,
            symbols: self.symbols.clone(),
            scope,
        }
    }

    /// The static type of the scope object.
    pub fn scope_type(&self) -> DataType {
        self.scope
    }

    /// Compile a parse tree into a target expression.
    ///
    /// The root must produce a value; a binding that ends in an unresolved
    /// method reference needs [`ExprCompiler::compile_to`] with a delegate
    /// type instead.
    pub fn compile(&self, expr: &Expr<'_>) -> Result<TargetExpr, BindingErrors> {
        let compiled = compile_expr(self, expr)?;
        reject_non_value(self, compiled, expr.span()).map_err(Into::into)
    }

    /// Compile a parse tree into a target expression of a required type.
    ///
    /// When the root is a method reference and `expected` is a registered
    /// delegate type, the reference resolves against the delegate's shape;
    /// otherwise the compiled value is implicitly converted to `expected`.
    pub fn compile_to(
        &self,
        expr: &Expr<'_>,
        expected: DataType,
    ) -> Result<TargetExpr, BindingErrors> {
        let compiled = compile_expr(self, expr)?;

        let compiled = match compiled {
            TargetExpr::MethodGroup { target, name } => {
                let shape = self.types.delegate(expected.type_hash);
                resolve_delegate(self.types, *target, &name, shape, expr.span())?
            }
            other => reject_non_value(self, other, expr.span())?,
        };
        convert_or_error(self.types, compiled, expected, expr.span()).map_err(Into::into)
    }
}

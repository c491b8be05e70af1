//! Identifier resolution.
//!
//! A bare identifier resolves in a fixed order: members of the scope object
//! first, then the symbol registry (innermost frame first), then registered
//! type names. Scope members winning over symbols keeps a binding's meaning
//! stable when the host later layers new ambient names underneath it.

use viewbind_ast::IdentExpr;
use viewbind_core::{BindingError, TargetExpr};

use crate::ExprCompiler;
use crate::symbols::Symbol;

use super::Result;

pub(crate) fn compile_ident(c: &ExprCompiler<'_>, expr: &IdentExpr<'_>) -> Result<TargetExpr> {
    let name = expr.ident.name;

    // Scope members shadow everything else.
    if let Some(entry) = c.types.entry(c.scope.type_hash) {
        if let Some(property) = entry.property(name, false) {
            return Ok(TargetExpr::Property {
                target: Box::new(TargetExpr::ScopeRoot { ty: c.scope }),
                name: name.to_string(),
                ty: property.data_type,
                writable: property.is_writable(),
            });
        }
        if entry.has_method(name, false) {
            return Ok(TargetExpr::MethodGroup {
                target: Box::new(TargetExpr::ScopeRoot { ty: c.scope }),
                name: name.to_string(),
            });
        }
    }

    if let Some(symbol) = c.symbols.resolve(name) {
        return Ok(match symbol {
            Symbol::External { data_type } => TargetExpr::External {
                name: name.to_string(),
                ty: *data_type,
            },
            Symbol::StaticType { type_hash } => TargetExpr::StaticType {
                type_hash: *type_hash,
            },
        });
    }

    if let Some(entry) = c.types.entry_by_name(name) {
        return Ok(TargetExpr::StaticType {
            type_hash: entry.type_hash,
        });
    }

    Err(BindingError::IdentifierNotFound {
        name: name.to_string(),
        span: expr.span,
    }
    .into())
}

//! Shared foundation for the binding-expression compiler.
//!
//! This crate defines the vocabulary the other crates speak: type identities
//! and static types, literal values, the type-model entries a host registers,
//! the typed target-expression output tree, and the diagnostic types.

pub mod data_type;
pub mod entries;
pub mod error;
pub mod ops;
pub mod span;
pub mod target;
pub mod type_hash;
pub mod value;

pub use data_type::DataType;
pub use entries::{
    DelegateShape, IndexerEntry, MethodEntry, MethodTraits, PropertyEntry, PropertyTraits,
    TypeEntry,
};
pub use error::{BindingError, BindingErrors};
pub use ops::{BinaryOp, UnaryOp};
pub use span::Span;
pub use target::TargetExpr;
pub use type_hash::{TypeHash, primitives};
pub use value::Value;

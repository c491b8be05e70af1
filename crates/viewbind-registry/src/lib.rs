//! Host-registered type model for the binding compiler.
//!
//! The compiler never reflects over live objects. Instead the host describes
//! each bindable type once, up front, in a [`TypeRegistry`]; compilation
//! reads the registry and nothing else.
//!
//! # Example
//!
//! ```
//! use viewbind_core::{DataType, PropertyEntry, TypeEntry, primitives};
//! use viewbind_registry::TypeRegistry;
//!
//! let mut registry = TypeRegistry::with_primitives();
//! registry
//!     .register(
//!         TypeEntry::new("Customer")
//!             .with_property(PropertyEntry::new("Name", DataType::simple(primitives::STRING))),
//!     )
//!     .unwrap();
//! assert!(registry.entry_by_name("Customer").is_some());
//! ```

pub mod registry;

pub use registry::{RegistryError, TypeRegistry};

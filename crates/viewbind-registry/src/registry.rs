//! The host-facing type registry.

use rustc_hash::FxHashMap;
use thiserror::Error;
use viewbind_core::{
    DataType, DelegateShape, MethodEntry, PropertyEntry, TypeEntry, TypeHash, primitives,
};

/// Errors raised while populating a registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// Two registrations hashed to the same type identity.
    #[error("type '{name}' is already registered")]
    DuplicateType {
        /// The colliding type name.
        name: String,
    },
}

type Result<T> = std::result::Result<T, RegistryError>;

/// All types the compiler may bind against.
///
/// The host populates the registry up front, before any compilation, and
/// then treats it as read-only. Compilation never mutates it, so one
/// registry can serve concurrent compilations without synchronization.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: FxHashMap<TypeHash, TypeEntry>,
    delegates: FxHashMap<TypeHash, DelegateShape>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the primitive types.
    ///
    /// `int`, `double`, `bool`, and `void` register as bare names; `string`
    /// additionally carries the members bindings commonly reach for.
    pub fn with_primitives() -> Self {
        let mut registry = Self::new();
        for name in ["int", "double", "bool", "void"] {
            registry
                .register(TypeEntry::new(name))
                .unwrap_or_else(|_| unreachable!("primitive '{name}' registered twice"));
        }

        let int = DataType::simple(primitives::INT);
        let bool_ty = DataType::simple(primitives::BOOL);
        let string = DataType::simple(primitives::STRING);
        let string_entry = TypeEntry::new("string")
            .with_property(PropertyEntry::read_only("Length", int))
            .with_method(MethodEntry::new("ToUpper", vec![], string))
            .with_method(MethodEntry::new("ToLower", vec![], string))
            .with_method(MethodEntry::new("Contains", vec![string], bool_ty))
            .with_method(MethodEntry::new("Substring", vec![int], string))
            .with_method(MethodEntry::new("Substring", vec![int, int], string));
        registry
            .register(string_entry)
            .unwrap_or_else(|_| unreachable!("primitive 'string' registered twice"));
        registry
    }

    /// Register a type. Fails if a type with the same identity already
    /// exists.
    pub fn register(&mut self, entry: TypeEntry) -> Result<()> {
        if self.types.contains_key(&entry.type_hash) {
            return Err(RegistryError::DuplicateType {
                name: entry.name.clone(),
            });
        }
        self.types.insert(entry.type_hash, entry);
        Ok(())
    }

    /// Register a delegate shape so delegate-typed values of that shape can
    /// be invoked. Re-registering the same shape is a no-op.
    pub fn register_delegate(&mut self, shape: DelegateShape) -> TypeHash {
        let hash = shape.type_hash();
        self.delegates.entry(hash).or_insert(shape);
        hash
    }

    /// The entry for a type identity, if registered.
    pub fn entry(&self, type_hash: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&type_hash)
    }

    /// The entry for a type name, if registered.
    pub fn entry_by_name(&self, name: &str) -> Option<&TypeEntry> {
        self.entry(TypeHash::from_name(name))
    }

    /// The delegate shape behind a type identity, if registered.
    pub fn delegate(&self, type_hash: TypeHash) -> Option<&DelegateShape> {
        self.delegates.get(&type_hash)
    }

    /// The registered name of a type identity.
    pub fn name_of(&self, type_hash: TypeHash) -> Option<&str> {
        self.types.get(&type_hash).map(|e| e.name.as_str())
    }

    /// Display name for a static type, for diagnostics. Unregistered
    /// identities render as their hash; nullability renders as a `?` suffix.
    pub fn display_type(&self, data_type: DataType) -> String {
        let base = if data_type.type_hash == primitives::NULL {
            "<null>".to_string()
        } else if data_type.type_hash == primitives::METHOD_GROUP {
            "<method group>".to_string()
        } else if let Some(shape) = self.delegates.get(&data_type.type_hash) {
            let params: Vec<String> = shape.params.iter().map(|p| self.display_type(*p)).collect();
            format!(
                "delegate({}) -> {}",
                params.join(", "),
                self.display_type(shape.return_type)
            )
        } else {
            match self.name_of(data_type.type_hash) {
                Some(name) => name.to_string(),
                None => data_type.type_hash.to_string(),
            }
        };
        if data_type.nullable && data_type.type_hash != primitives::NULL {
            format!("{base}?")
        } else {
            base
        }
    }
}

//! Type-model entries describing view-model types.
//!
//! The compiler never reflects over live objects; the host registers a
//! [`TypeEntry`] per bindable type up front, listing its properties, method
//! overloads, and indexer. Entries are immutable once registered.

use bitflags::bitflags;

use crate::data_type::DataType;
use crate::type_hash::TypeHash;

bitflags! {
    /// Traits of a registered property.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PropertyTraits: u8 {
        /// The property can be read.
        const READABLE = 1 << 0;
        /// The property can be assigned.
        const WRITABLE = 1 << 1;
        /// The property belongs to the type, not to instances.
        const STATIC = 1 << 2;
    }
}

bitflags! {
    /// Traits of a registered method.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MethodTraits: u8 {
        /// The method belongs to the type, not to instances.
        const STATIC = 1 << 0;
    }
}

/// A readable (and possibly writable) member of a type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry {
    /// Member name.
    pub name: String,
    /// Static type of the member's value.
    pub data_type: DataType,
    /// Read/write/static traits.
    pub traits: PropertyTraits,
}

impl PropertyEntry {
    /// A readable and writable instance property.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            traits: PropertyTraits::READABLE | PropertyTraits::WRITABLE,
        }
    }

    /// A read-only instance property.
    pub fn read_only(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            traits: PropertyTraits::READABLE,
        }
    }

    /// Mark this property as static.
    pub fn into_static(mut self) -> Self {
        self.traits |= PropertyTraits::STATIC;
        self
    }

    /// Whether the property can be assigned.
    pub fn is_writable(&self) -> bool {
        self.traits.contains(PropertyTraits::WRITABLE)
    }

    /// Whether the property is type-level.
    pub fn is_static(&self) -> bool {
        self.traits.contains(PropertyTraits::STATIC)
    }
}

/// One overload of a named method on a type.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodEntry {
    /// Method name (shared by all overloads).
    pub name: String,
    /// Parameter types, in order.
    pub params: Vec<DataType>,
    /// Return type; `void` for methods with no result.
    pub return_type: DataType,
    /// Static/instance traits.
    pub traits: MethodTraits,
}

impl MethodEntry {
    /// An instance method.
    pub fn new(name: impl Into<String>, params: Vec<DataType>, return_type: DataType) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
            traits: MethodTraits::empty(),
        }
    }

    /// Mark this method as static.
    pub fn into_static(mut self) -> Self {
        self.traits |= MethodTraits::STATIC;
        self
    }

    /// Whether the method is type-level.
    pub fn is_static(&self) -> bool {
        self.traits.contains(MethodTraits::STATIC)
    }

    /// The delegate shape this method's signature describes.
    pub fn shape(&self) -> DelegateShape {
        DelegateShape::new(self.params.clone(), self.return_type)
    }
}

/// Subscript semantics of an indexable type.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexerEntry {
    /// Required index type.
    pub index_type: DataType,
    /// Type of the indexed element.
    pub element_type: DataType,
    /// Whether elements can be assigned through the indexer.
    pub writable: bool,
}

impl IndexerEntry {
    /// A readable and writable indexer.
    pub fn new(index_type: DataType, element_type: DataType) -> Self {
        Self {
            index_type,
            element_type,
            writable: true,
        }
    }

    /// A read-only indexer.
    pub fn read_only(index_type: DataType, element_type: DataType) -> Self {
        Self {
            index_type,
            element_type,
            writable: false,
        }
    }
}

/// A function-pointer shape: explicit parameter and return types.
///
/// Requested by the host when a method reference must be coerced to a
/// delegate (for instance an event handler slot).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DelegateShape {
    /// Parameter types, in order.
    pub params: Vec<DataType>,
    /// Return type.
    pub return_type: DataType,
}

impl DelegateShape {
    /// Create a shape from parameter and return types.
    pub fn new(params: Vec<DataType>, return_type: DataType) -> Self {
        Self {
            params,
            return_type,
        }
    }

    /// The deterministic identity of this shape.
    pub fn type_hash(&self) -> TypeHash {
        let params: Vec<TypeHash> = self.params.iter().map(|p| p.type_hash).collect();
        TypeHash::from_delegate(&params, self.return_type.type_hash)
    }
}

/// Everything the compiler knows about one bindable type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeEntry {
    /// Identity, computed from the name.
    pub type_hash: TypeHash,
    /// Type name as written in diagnostics.
    pub name: String,
    /// Properties, in declaration order.
    pub properties: Vec<PropertyEntry>,
    /// All method overloads, in declaration order.
    pub methods: Vec<MethodEntry>,
    /// Indexer, if the type supports subscripting.
    pub indexer: Option<IndexerEntry>,
}

impl TypeEntry {
    /// Create an empty entry for a named type.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            type_hash: TypeHash::from_name(&name),
            name,
            properties: Vec::new(),
            methods: Vec::new(),
            indexer: None,
        }
    }

    /// Add a property.
    pub fn with_property(mut self, property: PropertyEntry) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a method overload.
    pub fn with_method(mut self, method: MethodEntry) -> Self {
        self.methods.push(method);
        self
    }

    /// Set the indexer.
    pub fn with_indexer(mut self, indexer: IndexerEntry) -> Self {
        self.indexer = Some(indexer);
        self
    }

    /// Find a property by name, filtered by staticness.
    pub fn property(&self, name: &str, want_static: bool) -> Option<&PropertyEntry> {
        self.properties
            .iter()
            .find(|p| p.name == name && p.is_static() == want_static)
    }

    /// All overloads of a method name, filtered by staticness, in
    /// declaration order.
    pub fn methods_named<'a>(
        &'a self,
        name: &'a str,
        want_static: bool,
    ) -> impl Iterator<Item = &'a MethodEntry> {
        self.methods
            .iter()
            .filter(move |m| m.name == name && m.is_static() == want_static)
    }

    /// Whether any overload of the name exists, filtered by staticness.
    pub fn has_method(&self, name: &str, want_static: bool) -> bool {
        self.methods_named(name, want_static).next().is_some()
    }
}

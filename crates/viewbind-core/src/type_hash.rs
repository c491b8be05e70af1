//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash identifying view-model types, methods, and
//! delegate shapes. Hashes are computed from names and signatures, so the same
//! declaration always produces the same identity regardless of registration
//! order, and lookups are single map probes with no secondary name→id tables.
//!
//! Domain-specific mixing constants keep types, methods, and delegate shapes
//! from colliding even when they share a name.

use std::fmt;
use xxhash_rust::const_xxh64::xxh64 as const_xxh64;
use xxhash_rust::xxh64::xxh64;

/// Domain markers mixed into hash computation.
pub mod hash_constants {
    /// Domain marker for type hashes.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for method hashes.
    pub const METHOD: u64 = 0x7d3c8b4a92e15f6d;

    /// Domain marker for delegate-shape hashes.
    pub const DELEGATE: u64 = 0x5ea77ffbcdf5f302;

    /// Separator constant mixed between signature components.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;
}

/// A unique hash identifying a type, method, or delegate shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Compute the hash for a type name.
    ///
    /// Deterministic: the same name always yields the same hash.
    pub const fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ const_xxh64(name.as_bytes(), 0))
    }

    /// Compute the hash for a method signature on an owning type.
    ///
    /// The parameter types participate in the hash, so overloads of the same
    /// name have distinct identities.
    pub fn from_method(owner: TypeHash, name: &str, params: &[TypeHash]) -> Self {
        let mut hash = hash_constants::METHOD ^ owner.0 ^ xxh64(name.as_bytes(), 0);
        for param in params {
            hash = hash
                .rotate_left(7)
                .wrapping_mul(hash_constants::SEP)
                .wrapping_add(param.0);
        }
        TypeHash(hash)
    }

    /// Compute the hash for a delegate shape (parameter types plus return type).
    pub fn from_delegate(params: &[TypeHash], return_type: TypeHash) -> Self {
        let mut hash = hash_constants::DELEGATE ^ return_type.0;
        for param in params {
            hash = hash
                .rotate_left(7)
                .wrapping_mul(hash_constants::SEP)
                .wrapping_add(param.0);
        }
        TypeHash(hash)
    }
}

/// Hashes of the built-in primitive types.
///
/// Computed at compile time from the type names, so they agree with
/// [`TypeHash::from_name`] for the same spelling.
pub mod primitives {
    use super::TypeHash;

    /// Hash for the `void` type (method with no result).
    pub const VOID: TypeHash = TypeHash::from_name("void");

    /// Hash for the `bool` type.
    pub const BOOL: TypeHash = TypeHash::from_name("bool");

    /// Hash for the `int` type (64-bit signed integer).
    pub const INT: TypeHash = TypeHash::from_name("int");

    /// Hash for the `double` type (64-bit float).
    pub const DOUBLE: TypeHash = TypeHash::from_name("double");

    /// Hash for the `string` type.
    pub const STRING: TypeHash = TypeHash::from_name("string");

    /// Hash for the distinguished type of the `null` literal. Converts to any
    /// nullable type and nothing else.
    pub const NULL: TypeHash = TypeHash::from_name("<null>");

    /// Placeholder hash for an unresolved method group. A target expression
    /// with this type must be resolved before it can be embedded anywhere.
    pub const METHOD_GROUP: TypeHash = TypeHash::from_name("<method-group>");
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

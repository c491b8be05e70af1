//! Static value-type tags for target expressions.

use crate::type_hash::{TypeHash, primitives};

/// The static type of a target expression: a type identity plus nullability.
///
/// Nullability is tracked outside the type itself so that the conversion
/// service can lift and unwrap it (`int` vs `int?`) without a second type
/// entry per registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataType {
    /// The underlying type identity.
    pub type_hash: TypeHash,
    /// Whether the value may be absent at runtime.
    pub nullable: bool,
}

impl DataType {
    /// A non-nullable type.
    #[inline]
    pub const fn simple(type_hash: TypeHash) -> Self {
        Self {
            type_hash,
            nullable: false,
        }
    }

    /// A nullable type.
    #[inline]
    pub const fn nullable(type_hash: TypeHash) -> Self {
        Self {
            type_hash,
            nullable: true,
        }
    }

    /// The `void` type (no value).
    #[inline]
    pub const fn void() -> Self {
        Self::simple(primitives::VOID)
    }

    /// The type of the `null` literal.
    #[inline]
    pub const fn null() -> Self {
        Self::nullable(primitives::NULL)
    }

    /// This type with nullability added.
    #[inline]
    pub const fn as_nullable(self) -> Self {
        Self {
            type_hash: self.type_hash,
            nullable: true,
        }
    }

    /// This type with nullability removed.
    #[inline]
    pub const fn unwrap_nullable(self) -> Self {
        Self {
            type_hash: self.type_hash,
            nullable: false,
        }
    }

    /// Whether this is one of the numeric primitives (`int`, `double`).
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.type_hash == primitives::INT || self.type_hash == primitives::DOUBLE
    }

    /// Whether this is the `bool` primitive.
    #[inline]
    pub fn is_bool(&self) -> bool {
        self.type_hash == primitives::BOOL
    }

    /// Whether this is the `string` primitive.
    #[inline]
    pub fn is_string(&self) -> bool {
        self.type_hash == primitives::STRING
    }

    /// Whether this is the type of the `null` literal.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.type_hash == primitives::NULL
    }

    /// Whether this is the deferred method-group placeholder.
    #[inline]
    pub fn is_method_group(&self) -> bool {
        self.type_hash == primitives::METHOD_GROUP
    }
}

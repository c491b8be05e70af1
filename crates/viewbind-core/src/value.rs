//! Already-typed literal values.
//!
//! The external tokenizer produces literal values in their final type, so the
//! compiler wraps them in constant target expressions without re-parsing.

use std::fmt;

use ordered_float::OrderedFloat;

use crate::data_type::DataType;
use crate::type_hash::primitives;

/// A literal value carried by a parse-tree node or a constant target
/// expression.
///
/// Doubles are stored through [`OrderedFloat`] so values (and the expression
/// trees containing them) support exact structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// The absent value.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Floating-point literal.
    Double(OrderedFloat<f64>),
    /// String literal.
    String(String),
}

impl Value {
    /// Convenience constructor for a double value.
    pub fn double(value: f64) -> Self {
        Value::Double(OrderedFloat(value))
    }

    /// The static type of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Null => DataType::null(),
            Value::Bool(_) => DataType::simple(primitives::BOOL),
            Value::Int(_) => DataType::simple(primitives::INT),
            Value::Double(_) => DataType::simple(primitives::DOUBLE),
            Value::String(_) => DataType::simple(primitives::STRING),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Double(d) => write!(f, "{}", d.0),
            Value::String(s) => write!(f, "{s:?}"),
        }
    }
}

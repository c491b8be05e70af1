//! Binding diagnostics.
//!
//! Every diagnostic is a [`BindingError`] variant with the span of the parse
//! tree node that produced it. Compilation reports [`BindingErrors`], a
//! non-empty ordered collection: multi-child nodes compile each child before
//! failing, so one pass over an expression can surface a problem on both
//! sides of an operator at once.

use thiserror::Error;

use crate::span::Span;

/// A single binding diagnostic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindingError {
    /// An identifier matched neither a scope member, a symbol, nor a
    /// registered type name.
    #[error("identifier '{name}' could not be resolved at {span}")]
    IdentifierNotFound {
        /// The unresolved identifier.
        name: String,
        /// Location in the source expression.
        span: Span,
    },

    /// A member access named no property, method, or nested symbol on the
    /// target type.
    #[error("type '{type_name}' has no member '{member}' at {span}")]
    MemberNotFound {
        /// Display name of the target type.
        type_name: String,
        /// The missing member name.
        member: String,
        /// Location in the source expression.
        span: Span,
    },

    /// A call target resolved to something that is neither a method group
    /// nor a delegate-typed value.
    #[error("'{name}' of type '{type_name}' is not callable at {span}")]
    MethodNotFound {
        /// Display name of the call target's type.
        type_name: String,
        /// The called name, or `<expression>` when the target has none.
        name: String,
        /// Location in the source expression.
        span: Span,
    },

    /// A method group was referenced as a value where no delegate shape
    /// disambiguates between multiple overloads.
    #[error("reference to method '{name}' on type '{type_name}' is ambiguous at {span}")]
    AmbiguousMethodReference {
        /// Display name of the receiver type.
        type_name: String,
        /// The overloaded method name.
        name: String,
        /// Location in the source expression.
        span: Span,
    },

    /// No overload of a method group matched the argument types exactly.
    #[error("no overload of '{name}' on type '{type_name}' accepts ({arg_types}) at {span}")]
    NoMatchingOverload {
        /// Display name of the receiver type.
        type_name: String,
        /// The called method name.
        name: String,
        /// Comma-separated display names of the argument types.
        arg_types: String,
        /// Location in the source expression.
        span: Span,
    },

    /// An operator was applied to operand types it is not defined for.
    #[error("operator '{operator}' cannot be applied to '{left}' and '{right}' at {span}")]
    InvalidOperandTypes {
        /// Source spelling of the operator.
        operator: String,
        /// Display name of the left operand type.
        left: String,
        /// Display name of the right operand type.
        right: String,
        /// Location in the source expression.
        span: Span,
    },

    /// A unary operator was applied to an operand type it is not defined for.
    #[error("operator '{operator}' cannot be applied to '{operand}' at {span}")]
    InvalidUnaryOperand {
        /// Source spelling of the operator.
        operator: String,
        /// Display name of the operand type.
        operand: String,
        /// Location in the source expression.
        span: Span,
    },

    /// The branches of a conditional have no common type.
    #[error("conditional branches have incompatible types '{then_type}' and '{else_type}' at {span}")]
    IncompatibleBranches {
        /// Display name of the then-branch type.
        then_type: String,
        /// Display name of the else-branch type.
        else_type: String,
        /// Location in the source expression.
        span: Span,
    },

    /// The left side of an assignment is not an addressable, writable
    /// location.
    #[error("expression is not an assignable target at {span}")]
    NonAddressableAssignmentTarget {
        /// Location in the source expression.
        span: Span,
    },

    /// An index expression was applied to a type without an indexer.
    #[error("type '{type_name}' does not support indexing at {span}")]
    IndexerNotSupported {
        /// Display name of the indexed type.
        type_name: String,
        /// Location in the source expression.
        span: Span,
    },

    /// A value of one type appeared where another type was required and no
    /// implicit conversion exists.
    #[error("cannot convert from '{from}' to '{to}' at {span}")]
    NotConvertible {
        /// Display name of the source type.
        from: String,
        /// Display name of the required type.
        to: String,
        /// Location in the source expression.
        span: Span,
    },

    /// A type reference appeared where a value was required.
    #[error("type '{name}' cannot be used as a value at {span}")]
    TypeReferenceAsValue {
        /// The referenced type's display name.
        name: String,
        /// Location in the source expression.
        span: Span,
    },

    /// A method group reached a position that requires a concrete value and
    /// no call or delegate coercion resolved it.
    #[error("method group '{name}' must be invoked or converted to a delegate at {span}")]
    UnresolvedMethodGroup {
        /// The method name the group refers to.
        name: String,
        /// Location in the source expression.
        span: Span,
    },

    /// A compiler invariant was violated. This indicates a defect in the
    /// compiler or the registered type model, not in the user's expression.
    #[error("internal compiler fault: {message}")]
    Internal {
        /// Description of the violated invariant.
        message: String,
    },
}

impl BindingError {
    /// The source location the diagnostic points at, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            BindingError::IdentifierNotFound { span, .. }
            | BindingError::MemberNotFound { span, .. }
            | BindingError::MethodNotFound { span, .. }
            | BindingError::AmbiguousMethodReference { span, .. }
            | BindingError::NoMatchingOverload { span, .. }
            | BindingError::InvalidOperandTypes { span, .. }
            | BindingError::InvalidUnaryOperand { span, .. }
            | BindingError::IncompatibleBranches { span, .. }
            | BindingError::NonAddressableAssignmentTarget { span }
            | BindingError::IndexerNotSupported { span, .. }
            | BindingError::NotConvertible { span, .. }
            | BindingError::TypeReferenceAsValue { span, .. }
            | BindingError::UnresolvedMethodGroup { span, .. } => Some(*span),
            BindingError::Internal { .. } => None,
        }
    }

    /// Whether this diagnostic reports a compiler defect rather than a
    /// problem in the user's expression.
    pub fn is_internal(&self) -> bool {
        matches!(self, BindingError::Internal { .. })
    }
}

/// An ordered collection of binding diagnostics.
///
/// Compilation never returns an empty collection. Callers can distinguish a
/// single diagnostic from an aggregate through [`BindingErrors::as_single`]
/// without inspecting messages.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BindingErrors {
    errors: Vec<BindingError>,
}

impl BindingErrors {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn push(&mut self, error: BindingError) {
        self.errors.push(error);
    }

    /// Append every diagnostic from another collection.
    pub fn merge(&mut self, other: BindingErrors) {
        self.errors.extend(other.errors);
    }

    /// Whether no diagnostic has been collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The sole diagnostic, when exactly one was collected.
    pub fn as_single(&self) -> Option<&BindingError> {
        match self.errors.as_slice() {
            [single] => Some(single),
            _ => None,
        }
    }

    /// Iterate the diagnostics in the order they were collected.
    pub fn iter(&self) -> impl Iterator<Item = &BindingError> {
        self.errors.iter()
    }

    /// Whether any collected diagnostic reports a compiler defect.
    pub fn has_internal(&self) -> bool {
        self.errors.iter().any(BindingError::is_internal)
    }
}

impl std::fmt::Display for BindingErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(single) = self.as_single() {
            return write!(f, "{single}");
        }
        writeln!(f, "{} binding errors:", self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for BindingErrors {}

impl From<BindingError> for BindingErrors {
    fn from(error: BindingError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for BindingErrors {
    type Item = BindingError;
    type IntoIter = std::vec::IntoIter<BindingError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a BindingErrors {
    type Item = &'a BindingError;
    type IntoIter = std::slice::Iter<'a, BindingError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

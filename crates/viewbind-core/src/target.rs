//! The compiler's output: typed, host-evaluable target expressions.
//!
//! A [`TargetExpr`] is both the intermediate unit (each compiled
//! sub-expression) and the final result handed to the host evaluator. Every
//! node carries a static value type; the host compiles the tree into an
//! invocable form and evaluates it repeatedly against live scope instances.
//!
//! [`TargetExpr::MethodGroup`] is the one deferred variant: it denotes the
//! set of overloads named `name` on `target` and must be resolved to a call
//! or a delegate before it can be embedded anywhere else in a final tree.

use crate::data_type::DataType;
use crate::entries::DelegateShape;
use crate::ops::{BinaryOp, UnaryOp};
use crate::type_hash::{TypeHash, primitives};
use crate::value::Value;

/// A typed target expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetExpr {
    /// A constant value.
    Constant {
        /// The value.
        value: Value,
        /// Its static type.
        ty: DataType,
    },

    /// The implicit scope object the binding is evaluated against.
    ScopeRoot {
        /// Static type of the scope object.
        ty: DataType,
    },

    /// A host-supplied ambient value, bound through the symbol registry.
    External {
        /// Host-side name of the value.
        name: String,
        /// Its static type.
        ty: DataType,
    },

    /// A type-level reference, used as the target of static member access.
    StaticType {
        /// The referenced type.
        type_hash: TypeHash,
    },

    /// A property read (or, when `writable`, an assignable location).
    Property {
        /// The object owning the property; a [`TargetExpr::StaticType`] for
        /// static properties.
        target: Box<TargetExpr>,
        /// Property name.
        name: String,
        /// Static type of the property value.
        ty: DataType,
        /// Whether the property may appear on the left of an assignment.
        writable: bool,
    },

    /// A unary operation.
    Unary {
        /// The semantic operation.
        op: UnaryOp,
        /// Operand.
        operand: Box<TargetExpr>,
        /// Result type.
        ty: DataType,
    },

    /// A binary operation. Short-circuit and coalescing semantics are the
    /// host evaluator's obligation; the compiler only emits the node.
    Binary {
        /// The semantic operation.
        op: BinaryOp,
        /// Left operand.
        left: Box<TargetExpr>,
        /// Right operand.
        right: Box<TargetExpr>,
        /// Result type.
        ty: DataType,
    },

    /// A conditional (ternary) expression.
    Conditional {
        /// Boolean condition.
        condition: Box<TargetExpr>,
        /// Value when the condition holds.
        then_expr: Box<TargetExpr>,
        /// Value otherwise.
        else_expr: Box<TargetExpr>,
        /// Common type of the two branches.
        ty: DataType,
    },

    /// An indexer access.
    Index {
        /// The indexable object.
        target: Box<TargetExpr>,
        /// Index value, already converted to the indexer's index type.
        index: Box<TargetExpr>,
        /// Element type.
        ty: DataType,
        /// Whether elements may be assigned through the indexer.
        writable: bool,
    },

    /// A resolved method call.
    Call {
        /// Receiver; a [`TargetExpr::StaticType`] for static methods.
        target: Box<TargetExpr>,
        /// Method name.
        method: String,
        /// The exact signature selected by overload resolution.
        signature: DelegateShape,
        /// Argument expressions, in order.
        args: Vec<TargetExpr>,
        /// The method's return type.
        ty: DataType,
    },

    /// Invocation of a delegate-typed value.
    Invoke {
        /// The delegate value.
        target: Box<TargetExpr>,
        /// Argument expressions, in order.
        args: Vec<TargetExpr>,
        /// The delegate's return type.
        ty: DataType,
    },

    /// A method reference resolved to a delegate. With a
    /// [`TargetExpr::StaticType`] target this is compile-time bound; with an
    /// instance target it closes over the live instance at evaluation time.
    Delegate {
        /// Receiver the callable is bound to.
        target: Box<TargetExpr>,
        /// Method name.
        method: String,
        /// The callable's shape.
        shape: DelegateShape,
    },

    /// An implicit type conversion.
    Convert {
        /// The converted expression.
        operand: Box<TargetExpr>,
        /// Conversion target type.
        ty: DataType,
    },

    /// An assignment to an addressable location.
    Assign {
        /// The location; must satisfy [`TargetExpr::is_assignable`].
        target: Box<TargetExpr>,
        /// The assigned value, already converted to the location's type.
        value: Box<TargetExpr>,
        /// The location's type (also the expression's value).
        ty: DataType,
    },

    /// An unresolved method group: the overload set named `name` on `target`.
    MethodGroup {
        /// Receiver the group was looked up on.
        target: Box<TargetExpr>,
        /// Method name.
        name: String,
    },
}

impl TargetExpr {
    /// Wrap a value in a constant expression.
    pub fn constant(value: Value) -> Self {
        let ty = value.data_type();
        TargetExpr::Constant { value, ty }
    }

    /// The static value type of this expression.
    ///
    /// A method group reports the [`primitives::METHOD_GROUP`] placeholder; a
    /// delegate reports its shape's deterministic identity; a static type
    /// reference reports the referenced type.
    pub fn value_type(&self) -> DataType {
        match self {
            TargetExpr::Constant { ty, .. }
            | TargetExpr::ScopeRoot { ty }
            | TargetExpr::External { ty, .. }
            | TargetExpr::Property { ty, .. }
            | TargetExpr::Unary { ty, .. }
            | TargetExpr::Binary { ty, .. }
            | TargetExpr::Conditional { ty, .. }
            | TargetExpr::Index { ty, .. }
            | TargetExpr::Call { ty, .. }
            | TargetExpr::Invoke { ty, .. }
            | TargetExpr::Convert { ty, .. }
            | TargetExpr::Assign { ty, .. } => *ty,
            TargetExpr::StaticType { type_hash } => DataType::simple(*type_hash),
            TargetExpr::Delegate { shape, .. } => DataType::simple(shape.type_hash()),
            TargetExpr::MethodGroup { .. } => DataType::simple(primitives::METHOD_GROUP),
        }
    }

    /// Whether this expression denotes an addressable, mutable location.
    pub fn is_assignable(&self) -> bool {
        match self {
            TargetExpr::Property { writable, .. } | TargetExpr::Index { writable, .. } => *writable,
            _ => false,
        }
    }

    /// Whether this is the deferred method-group variant.
    pub fn is_method_group(&self) -> bool {
        matches!(self, TargetExpr::MethodGroup { .. })
    }

    /// Whether this is a type-level reference.
    pub fn is_static_type(&self) -> bool {
        matches!(self, TargetExpr::StaticType { .. })
    }
}

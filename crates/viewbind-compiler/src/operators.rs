//! Operator typing rules.
//!
//! Maps syntactic operator tokens onto semantic operations and decides, per
//! operand-type combination, what the result type is and which conversions
//! the operands need. The tables are total over both enums, so adding an
//! operator to either side is a compile error until every rule is written.

use viewbind_ast::{BinaryOperator, UnaryOperator};
use viewbind_core::{BinaryOp, BindingError, DataType, Span, TargetExpr, UnaryOp, primitives};
use viewbind_registry::TypeRegistry;

use crate::conversion::{common_type, implicit_conversion};

/// The semantic operation behind a unary token.
pub fn map_unary(op: UnaryOperator) -> UnaryOp {
    match op {
        UnaryOperator::Plus => UnaryOp::Plus,
        UnaryOperator::Minus => UnaryOp::Negate,
        UnaryOperator::Not => UnaryOp::Not,
    }
}

/// The semantic operation behind a binary token.
///
/// Assignment has no semantic binary operation; it compiles to a dedicated
/// assignment node, so it maps to `None` here.
pub fn map_binary(op: BinaryOperator) -> Option<BinaryOp> {
    match op {
        BinaryOperator::Add => Some(BinaryOp::Add),
        BinaryOperator::Subtract => Some(BinaryOp::Subtract),
        BinaryOperator::Multiply => Some(BinaryOp::Multiply),
        BinaryOperator::Divide => Some(BinaryOp::Divide),
        BinaryOperator::Modulo => Some(BinaryOp::Modulo),
        BinaryOperator::Equal => Some(BinaryOp::Equal),
        BinaryOperator::NotEqual => Some(BinaryOp::NotEqual),
        BinaryOperator::Less => Some(BinaryOp::Less),
        BinaryOperator::LessEqual => Some(BinaryOp::LessEqual),
        BinaryOperator::Greater => Some(BinaryOp::Greater),
        BinaryOperator::GreaterEqual => Some(BinaryOp::GreaterEqual),
        BinaryOperator::Coalesce => Some(BinaryOp::Coalesce),
        BinaryOperator::And => Some(BinaryOp::And),
        BinaryOperator::Or => Some(BinaryOp::Or),
        BinaryOperator::AndAlso => Some(BinaryOp::AndAlso),
        BinaryOperator::OrElse => Some(BinaryOp::OrElse),
        BinaryOperator::Assign => None,
    }
}

/// Type and build a unary operation.
pub fn apply_unary(
    registry: &TypeRegistry,
    op: UnaryOp,
    operand: TargetExpr,
    span: Span,
) -> Result<TargetExpr, BindingError> {
    let ty = operand.value_type();
    let valid = match op {
        UnaryOp::Plus | UnaryOp::Negate => ty.is_numeric(),
        UnaryOp::Not => ty.is_bool(),
    };
    if !valid {
        return Err(BindingError::InvalidUnaryOperand {
            operator: op.symbol().to_string(),
            operand: registry.display_type(ty),
            span,
        });
    }
    Ok(TargetExpr::Unary {
        op,
        operand: Box::new(operand),
        ty,
    })
}

/// Type and build a binary operation, converting operands as needed.
pub fn apply_binary(
    registry: &TypeRegistry,
    op: BinaryOp,
    left: TargetExpr,
    right: TargetExpr,
    span: Span,
) -> Result<TargetExpr, BindingError> {
    let left_ty = left.value_type();
    let right_ty = right.value_type();

    let invalid = || BindingError::InvalidOperandTypes {
        operator: op.symbol().to_string(),
        left: registry.display_type(left_ty),
        right: registry.display_type(right_ty),
        span,
    };

    match op {
        BinaryOp::Add if left_ty.is_string() && right_ty.is_string() => {
            Ok(binary(op, left, right, left_ty))
        }
        BinaryOp::Add
        | BinaryOp::Subtract
        | BinaryOp::Multiply
        | BinaryOp::Divide
        | BinaryOp::Modulo => {
            if !left_ty.is_numeric() || !right_ty.is_numeric() {
                return Err(invalid());
            }
            let ty = common_type(left_ty, right_ty).ok_or_else(invalid)?;
            let left = implicit_conversion(left, ty).ok_or_else(invalid)?;
            let right = implicit_conversion(right, ty).ok_or_else(invalid)?;
            Ok(binary(op, left, right, ty))
        }
        BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual => {
            if !left_ty.is_numeric() || !right_ty.is_numeric() {
                return Err(invalid());
            }
            let operand_ty = common_type(left_ty, right_ty).ok_or_else(invalid)?;
            let left = implicit_conversion(left, operand_ty).ok_or_else(invalid)?;
            let right = implicit_conversion(right, operand_ty).ok_or_else(invalid)?;
            Ok(binary(op, left, right, DataType::simple(primitives::BOOL)))
        }
        BinaryOp::Equal | BinaryOp::NotEqual => {
            let operand_ty = common_type(left_ty, right_ty).ok_or_else(invalid)?;
            let left = implicit_conversion(left, operand_ty).ok_or_else(invalid)?;
            let right = implicit_conversion(right, operand_ty).ok_or_else(invalid)?;
            Ok(binary(op, left, right, DataType::simple(primitives::BOOL)))
        }
        BinaryOp::And | BinaryOp::Or | BinaryOp::AndAlso | BinaryOp::OrElse => {
            if !left_ty.is_bool() || !right_ty.is_bool() || left_ty.nullable || right_ty.nullable {
                return Err(invalid());
            }
            Ok(binary(op, left, right, DataType::simple(primitives::BOOL)))
        }
        BinaryOp::Coalesce => {
            if !left_ty.nullable {
                return Err(invalid());
            }
            let ty = common_type(left_ty.unwrap_nullable(), right_ty).ok_or_else(invalid)?;
            let right = implicit_conversion(right, ty).ok_or_else(invalid)?;
            Ok(binary(op, left, right, ty))
        }
    }
}

fn binary(op: BinaryOp, left: TargetExpr, right: TargetExpr, ty: DataType) -> TargetExpr {
    TargetExpr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
        ty,
    }
}

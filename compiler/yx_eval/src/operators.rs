//! Numeric operator implementations.
//!
//! Every operator maps straight onto IEEE-754 arithmetic. Nothing is
//! range-checked: division by zero yields `inf`/`nan`, `sqrt` and `log`
//! of negative numbers yield `nan`, and those values flow on through the
//! rest of the expression.

use yx_ir::{ArithOp, BinaryBuiltin, CompareOp, UnaryBuiltin};

/// Apply an arithmetic operator.
#[inline]
pub fn evaluate_arith(op: ArithOp, left: f64, right: f64) -> f64 {
    match op {
        ArithOp::Add => left + right,
        ArithOp::Sub => left - right,
        ArithOp::Mul => left * right,
        ArithOp::Div => left / right,
        // `%` on f64 is fmod: truncated quotient, sign of the dividend
        ArithOp::Mod => left % right,
        ArithOp::Pow => left.powf(right),
    }
}

/// Apply a comparison, yielding `1.0` for true and `0.0` for false.
///
/// Any comparison involving `nan` is false except `!=`.
#[inline]
pub fn evaluate_compare(op: CompareOp, left: f64, right: f64) -> f64 {
    let holds = match op {
        CompareOp::Gt => left > right,
        CompareOp::Lt => left < right,
        CompareOp::NotEq => left != right,
        CompareOp::Eq => left == right,
        CompareOp::GtEq => left >= right,
        CompareOp::LtEq => left <= right,
    };
    if holds {
        1.0
    } else {
        0.0
    }
}

/// Apply the numeric part of a unary builtin.
///
/// `Display` is the identity here; writing the value out is the
/// evaluator's job, since it needs the environment's print handler.
#[inline]
pub fn evaluate_unary_builtin(func: UnaryBuiltin, operand: f64) -> f64 {
    match func {
        UnaryBuiltin::Sqrt => operand.sqrt(),
        UnaryBuiltin::Exp => operand.exp(),
        UnaryBuiltin::Log => operand.ln(),
        UnaryBuiltin::Display => operand,
    }
}

/// Apply a binary builtin.
#[inline]
pub fn evaluate_binary_builtin(func: BinaryBuiltin, left: f64, right: f64) -> f64 {
    match func {
        BinaryBuiltin::Pow => left.powf(right),
    }
}

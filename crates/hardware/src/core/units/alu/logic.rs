//! ALU logical and comparison operations.
//!
//! Implements bitwise OR, AND, XOR, NOR and signed set-less-than. Bitwise
//! operations act on the full two's-complement bit pattern of the operands,
//! so a sign-extended immediate contributes ones above bit 10. The result of
//! `Slt` is always 0 or 1.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// # Returns
///
/// Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => (a < b) as i64,
        _ => 0,
    }
}

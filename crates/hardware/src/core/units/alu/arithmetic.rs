//! ALU arithmetic operations.
//!
//! Implements integer addition, subtraction and multiplication. Results wrap
//! on overflow at the host integer width.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Returns
///
/// The wrapped result. Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        _ => 0,
    }
}

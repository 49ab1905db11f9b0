//! ALU shift operations.
//!
//! Implements shift-left logical (SLL) and shift-right logical (SRL). Shifts
//! are logical on the 64-bit pattern: SRL fills with zeros even for negative
//! values. Shift amounts are masked to 6 bits.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount (6 bits: 0-63).
const SHAMT_MASK: i64 = 0x3f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (lower 6 bits used).
///
/// # Returns
///
/// Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    let sh = (b & SHAMT_MASK) as u32;
    match op {
        AluOp::Sll => (a as u64).wrapping_shl(sh) as i64,
        AluOp::Srl => (a as u64).wrapping_shr(sh) as i64,
        _ => 0,
    }
}

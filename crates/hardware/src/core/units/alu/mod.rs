//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! It handles arithmetic, logical operations, comparisons and shifts on
//! host-width signed integers. All arithmetic wraps.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul
//! - [`logic`]:      Or, And, Xor, Nor, Slt
//! - [`shifts`]:     Sll, Srl

/// Integer arithmetic operations (add, subtract, multiply).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, nor, slt).
pub mod logic;

/// Shift operations (sll, srl).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (the shift amount for shifts)
    ///
    /// # Examples
    ///
    /// ```
    /// use pipesim_core::core::pipeline::signals::AluOp;
    /// use pipesim_core::core::units::alu::Alu;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Nor, 0, 0), -1);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 1), 0x2);
    /// ```
    pub fn execute(op: AluOp, a: i64, b: i64) -> i64 {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Nor | AluOp::Slt => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl => shifts::execute(op, a, b),
        }
    }
}

//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Word Constants:** Instruction width and the mask used for fixed-width output.
//! 2. **Addressing Constants:** The PC step between consecutive instructions.
//! 3. **Register Constants:** Size of the architectural register file.

/// Width of one instruction word in bits.
pub const WORD_BITS: u32 = 24;

/// Mask selecting the low 24 bits of a host integer.
pub const WORD_MASK: u64 = (1 << WORD_BITS) - 1;

/// Number of addressable memory units occupied by one instruction.
///
/// The PC advances by this amount on every sequential fetch and every
/// instruction address is a multiple of it.
pub const INSTRUCTION_SIZE: u64 = 3;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 16;

/// Index of the hardwired zero register.
pub const REG_ZERO: usize = 0;

/// Address the PC holds when the simulator is reset.
pub const RESET_PC: u64 = 0;

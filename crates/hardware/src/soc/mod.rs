//! System-on-Chip (SoC) Components.
//!
//! This module organizes the storage that surrounds the core: the instruction
//! memory the Fetch stage reads and the data memory the Memory stage accesses.

/// Instruction and data memories.
pub mod memory;

pub use memory::{DataMemory, InstructionMemory};

//! Simulated memories.
//!
//! This module implements the two memories the pipeline talks to. It provides:
//! 1. **Instruction memory:** PC-indexed storage of 24-bit words, populated once
//!    before simulation starts.
//! 2. **Data memory:** Sparse word-addressable storage read by `lw` and written
//!    by `sw`; unwritten addresses read as zero.

/// Word-addressable data memory.
pub mod data;

/// PC-indexed instruction memory.
pub mod instruction;

pub use data::DataMemory;
pub use instruction::InstructionMemory;

//! Core processor implementation.
//!
//! This module contains the CPU state, the five-stage instruction pipeline,
//! the execution units and the architectural register file.

/// Architectural state (general-purpose register file).
pub mod arch;

/// CPU state container shared by the pipeline stages.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, signals).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;

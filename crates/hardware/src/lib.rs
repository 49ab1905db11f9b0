//! Five-stage pipelined processor simulator library.
//!
//! This crate implements a cycle-level simulator for a small 24-bit RISC
//! instruction set with the following:
//! 1. **ISA:** Opcode and function tables, encoding, decoding and disassembly.
//! 2. **Core:** Register file, ALU, pipeline latches and the five stages
//!    (fetch, decode, execute, memory, writeback).
//! 3. **SoC:** Instruction memory and sparse data memory.
//! 4. **Simulation:** Cycle driver, program loader, built-in programs,
//!    configuration, statistics and run reports.
//!
//! ```
//! use pipesim_core::isa::{Opcode, encode_i_type};
//! use pipesim_core::sim::{RunOutcome, Simulator};
//!
//! let program = [
//!     encode_i_type(Opcode::Addi, 0, 1, 1),
//!     encode_i_type(Opcode::Addi, 0, 2, 1),
//!     encode_i_type(Opcode::Ori, 0, 3, 255),
//! ];
//! let mut sim = Simulator::new(&program);
//! assert_eq!(sim.run(100), RunOutcome::Halted { cycles: 7 });
//! assert_eq!(sim.cpu.regs.read(3), 255);
//! ```

/// Common constants and error types.
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (state, pipeline, ALU, register file).
pub mod core;
/// Instruction set (opcodes, encode, decode, disassembly).
pub mod isa;
/// Run reports (register and memory dumps, loop snapshots).
pub mod report;
/// Simulation driver, loader and built-in programs.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memories, latches and stats.
pub use crate::core::Cpu;
/// Error type for configuration and setup.
pub use crate::common::SimError;
/// Cycle driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;

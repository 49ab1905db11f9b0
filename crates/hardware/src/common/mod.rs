//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Constants:** Word width, instruction size and register file size.
//! 2. **Error Handling:** The `SimError` type returned by configuration and setup paths.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for configuration and setup.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, NUM_REGS, REG_ZERO, WORD_MASK};
pub use error::SimError;

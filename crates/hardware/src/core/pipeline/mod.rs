//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 2. **Signals:** ALU operations and resolved control-flow outcomes.
//! 3. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 4. **Traits:** Common interface for pipeline latches.
//!
//! There is no hazard detection, forwarding or stalling. An instruction that
//! reads a register written by one of the two instructions before it observes
//! the stale value; producers and consumers need two independent instructions
//! between them.

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// ALU operations and control-flow signals.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;

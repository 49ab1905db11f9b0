//! Architectural state components.
//!
//! This module holds the programmer-visible state that is not memory:
//! the general-purpose register file.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;

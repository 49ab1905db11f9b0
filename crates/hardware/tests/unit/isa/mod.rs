//! Tests for the ISA codec.

pub mod opcodes;

//! General-Purpose Register File.
//!
//! This module implements the integer register file. It performs the following:
//! 1. **Storage:** Maintains 16 integer registers (`$0`-`$15`).
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to zero.
//! 3. **Debugging:** Provides a snapshot of the complete register state for reports.

use crate::common::constants::{NUM_REGS, REG_ZERO};

/// General-Purpose Register file.
///
/// Contains 16 registers holding host-width signed integers. Register `$0`
/// is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i64; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    ///
    /// # Returns
    ///
    /// The value stored in the specified register. Register `$0` always returns 0.
    pub fn read(&self, idx: usize) -> i64 {
        if idx == REG_ZERO { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a register.
    ///
    /// Writes to `$0` are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    /// * `val` - The value to write.
    pub fn write(&mut self, idx: usize, val: i64) {
        if idx != REG_ZERO {
            self.regs[idx] = val;
        }
    }

    /// Copies out the whole register file, `$0` first.
    pub fn snapshot(&self) -> [i64; NUM_REGS] {
        let mut out = self.regs;
        out[REG_ZERO] = 0;
        out
    }
}

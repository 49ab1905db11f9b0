//! Run reports.
//!
//! This module turns simulator state into human-readable and JSON output. It provides:
//! 1. **Dumps:** Fixed-width register file and data memory listings.
//! 2. **Loop tracking:** Snapshots taken whenever a watched register changes.
//! 3. **Report:** Final state, snapshots and statistics of one run.
//!
//! Values are printed as their low 24 bits in six hex digits, the width of
//! one machine word.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{NUM_REGS, WORD_MASK};
use crate::common::error::SimError;
use crate::core::Cpu;
use crate::sim::{RunOutcome, StepAction};
use crate::stats::SimStats;

/// Formats `value` as a six-digit hex word (`0x0000FF`).
pub fn word_hex(value: i64) -> String {
    format!("0x{:06X}", value as u64 & WORD_MASK)
}

/// Snapshot of the register file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterDump(pub [i64; NUM_REGS]);

impl RegisterDump {
    /// Captures the current register file of `cpu`.
    pub fn capture(cpu: &Cpu) -> Self {
        Self(cpu.regs.snapshot())
    }
}

impl fmt::Display for RegisterDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &value) in self.0.iter().enumerate() {
            writeln!(f, "${:02}: {}", i, word_hex(value))?;
        }
        Ok(())
    }
}

/// Snapshot of every written data memory cell.
///
/// Cells are ordered by their printed 24-bit address, so a negative effective
/// address such as `-3` (`0xFFFFFD`) sorts after every non-negative one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryDump(pub Vec<(i64, i64)>);

impl MemoryDump {
    /// Captures the current data memory of `cpu`.
    pub fn capture(cpu: &Cpu) -> Self {
        let mut cells: Vec<_> = cpu.dmem.iter().collect();
        cells.sort_by_key(|&(addr, _)| addr as u64 & WORD_MASK);
        Self(cells)
    }
}

impl fmt::Display for MemoryDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "(no memory writes)");
        }
        for &(addr, value) in &self.0 {
            writeln!(f, "{}: {}", word_hex(addr), word_hex(value))?;
        }
        Ok(())
    }
}

/// Machine state captured when the watched register changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Loop label: `A`, `B`, … `Z`, `AA`, …
    pub label: String,
    /// Cycle at whose end the snapshot was taken.
    pub cycle: u64,
    /// Register file at that point.
    pub registers: RegisterDump,
    /// Data memory at that point.
    pub memory: MemoryDump,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Loop {} (After Cycle {}) ---", self.label, self.cycle)?;
        writeln!(f, "Register File:")?;
        write!(f, "{}", self.registers)?;
        writeln!(f, "Data Memory:")?;
        write!(f, "{}", self.memory)
    }
}

/// Spreadsheet-style label for the `n`th snapshot (0 → `A`, 26 → `AA`).
fn loop_label(mut n: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label.iter().rev().map(|&b| char::from(b)).collect()
}

/// Watches one register and records a snapshot each time it takes a new
/// non-zero value.
///
/// Once the register has been seen non-zero, a return to zero marks the end
/// of the loop; the tracker then asks the simulator to stop if configured to.
#[derive(Clone, Debug)]
pub struct LoopTracker {
    register: usize,
    stop_on_exit: bool,
    last: Option<i64>,
    snapshots: Vec<Snapshot>,
}

impl LoopTracker {
    /// Creates a tracker for `register`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidRegister`] if `register` is not one of
    /// `$0..$15`.
    pub const fn new(register: usize, stop_on_exit: bool) -> Result<Self, SimError> {
        if register >= NUM_REGS {
            return Err(SimError::InvalidRegister {
                index: register,
                limit: NUM_REGS,
            });
        }
        Ok(Self {
            register,
            stop_on_exit,
            last: None,
            snapshots: Vec::new(),
        })
    }

    /// Inspects the state at the end of a cycle.
    pub fn observe(&mut self, cpu: &Cpu) -> StepAction {
        let current = cpu.regs.read(self.register);
        if current != 0 && self.last != Some(current) {
            self.snapshots.push(Snapshot {
                label: loop_label(self.snapshots.len()),
                cycle: cpu.stats.cycles,
                registers: RegisterDump::capture(cpu),
                memory: MemoryDump::capture(cpu),
            });
            self.last = Some(current);
        }

        if self.stop_on_exit && self.last.is_some() && current == 0 {
            StepAction::Stop
        } else {
            StepAction::Continue
        }
    }

    /// Snapshots recorded so far.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Consumes the tracker, returning its snapshots.
    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

/// Final report of one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    /// How the run ended.
    pub outcome: RunOutcome,
    /// Total cycles executed.
    pub cycles: u64,
    /// Final register file.
    pub registers: RegisterDump,
    /// Final data memory.
    pub memory: MemoryDump,
    /// Loop snapshots, in the order they were taken.
    pub snapshots: Vec<Snapshot>,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Report {
    /// Builds the report for a finished run.
    pub fn new(cpu: &Cpu, outcome: RunOutcome, snapshots: Vec<Snapshot>) -> Self {
        Self {
            outcome,
            cycles: outcome.cycles(),
            registers: RegisterDump::capture(cpu),
            memory: MemoryDump::capture(cpu),
            snapshots,
            stats: cpu.stats.clone(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Register Dump:")?;
        write!(f, "{}", self.registers)?;
        writeln!(f)?;
        writeln!(f, "Total Clock Cycles Used: {}", self.cycles)?;
        for snap in &self.snapshots {
            writeln!(f)?;
            write!(f, "{snap}")?;
        }
        writeln!(f)?;
        writeln!(f, "Final Data Memory Contents:")?;
        write!(f, "{}", self.memory)
    }
}

//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Control flow:** Taken redirects and the wrong-path instructions they discarded.
//! 4. **Bubbles:** Cycles in which writeback had nothing to commit.

use std::fmt;

use serde::Serialize;

use crate::isa::Opcode;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that reached writeback.
    pub instructions_retired: u64,

    /// Count of R-type and immediate ALU instructions retired.
    pub inst_alu: u64,
    /// Count of `lw` instructions retired.
    pub inst_load: u64,
    /// Count of `sw` instructions retired.
    pub inst_store: u64,
    /// Count of `beq`/`bgtz` instructions retired.
    pub inst_branch: u64,
    /// Count of `j` instructions retired.
    pub inst_jump: u64,
    /// Count of words with an unassigned opcode retired (executed as no-ops).
    pub inst_unknown: u64,

    /// Taken branches and jumps that redirected fetch.
    pub control_redirects: u64,
    /// Wrong-path instructions discarded by redirects.
    pub flushed: u64,
    /// Cycles in which writeback found an empty MEM/WB latch.
    pub wb_bubbles: u64,
}

impl SimStats {
    /// Records a retired instruction in the instruction mix.
    pub fn record_retire(&mut self, opcode: Opcode) {
        self.instructions_retired += 1;
        match opcode {
            Opcode::RType | Opcode::Addi | Opcode::Ori | Opcode::Slti => self.inst_alu += 1,
            Opcode::Lw => self.inst_load += 1,
            Opcode::Sw => self.inst_store += 1,
            Opcode::Beq | Opcode::Bgtz => self.inst_branch += 1,
            Opcode::J => self.inst_jump += 1,
            Opcode::Unknown(_) => self.inst_unknown += 1,
        }
    }

    /// Cycles per retired instruction, or `0.0` before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "PIPELINE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        writeln!(f, "  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu))?;
        writeln!(f, "  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load))?;
        writeln!(f, "  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store))?;
        writeln!(
            f,
            "  op.branch              {} ({:.2}%)",
            self.inst_branch,
            pct(self.inst_branch)
        )?;
        writeln!(f, "  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump))?;
        if self.inst_unknown > 0 {
            writeln!(f, "  op.unknown             {}", self.inst_unknown)?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CONTROL FLOW")?;
        writeln!(f, "  redirects              {}", self.control_redirects)?;
        writeln!(f, "  flushed                {}", self.flushed)?;
        writeln!(f, "  wb.bubbles             {}", self.wb_bubbles)?;
        write!(f, "==========================================================")
    }
}

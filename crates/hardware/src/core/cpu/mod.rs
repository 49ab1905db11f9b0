//! Central Processing Unit (CPU) Definition.
//!
//! This module defines the `Cpu` struct, which holds the architectural and
//! microarchitectural state of the simulated processor:
//! 1. **Architectural state:** Program counter and the general-purpose register file.
//! 2. **Memories:** Word-addressed instruction memory and sparse data memory.
//! 3. **Pipeline latches:** IF/ID, ID/EX, EX/MEM and MEM/WB.
//! 4. **Statistics:** Counters updated by the stages as instructions flow.
//!
//! The stage functions in [`crate::core::pipeline::stages`] operate directly
//! on this struct; [`crate::sim::Simulator`] sequences them.

use crate::common::constants::RESET_PC;
use crate::core::arch::Gpr;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::traits::PipelineLatch;
use crate::soc::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    /// Program Counter.
    pub pc: u64,
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Instruction memory, keyed by byte address.
    pub imem: InstructionMemory,
    /// Data memory, keyed by effective address.
    pub dmem: DataMemory,

    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// EX/MEM Latch.
    pub ex_mem: ExMem,
    /// MEM/WB Latch.
    pub mem_wb: MemWb,

    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in its reset state: PC at 0, all registers zero,
    /// empty memories and empty latches.
    pub fn new() -> Self {
        Self {
            pc: RESET_PC,
            ..Self::default()
        }
    }

    /// Returns `true` when no latch holds an instruction.
    pub fn pipeline_empty(&self) -> bool {
        self.if_id.is_empty()
            && self.id_ex.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty()
    }

    /// Returns `true` once the program has finished.
    ///
    /// The program is finished when the PC points outside instruction
    /// memory and every instruction already fetched has left the pipeline.
    pub fn is_drained(&self) -> bool {
        !self.imem.contains(self.pc) && self.pipeline_empty()
    }

    /// Discards the instructions in the front end (IF/ID and ID/EX).
    ///
    /// Returns the number of instructions that were discarded.
    pub fn flush_frontend(&mut self) -> u64 {
        let discarded = u64::from(!self.if_id.is_empty()) + u64::from(!self.id_ex.is_empty());
        self.if_id.flush();
        self.id_ex.flush();
        discarded
    }
}

//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! Each latch holds at most one in-flight instruction. `None` is the empty
//! (bubble) marker: a flushed slot, a halted fetch, or a hole propagating
//! downstream. A latch is overwritten every cycle by its producing stage and
//! read once by its consuming stage.

use crate::core::pipeline::signals::ControlFlow;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::opcodes::Opcode;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// 24-bit instruction word.
    pub inst: u32,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Contains every decoded field together with the register values read
/// during decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// 24-bit instruction word.
    pub inst: u32,
    /// Decoded opcode.
    pub opcode: Opcode,
    /// Source register index.
    pub rs: usize,
    /// Target / second operand register index.
    pub rt: usize,
    /// R-type destination register index.
    pub rd: usize,
    /// Sign-extended immediate.
    pub imm: i64,
    /// Value read from `rs`.
    pub rs_val: i64,
    /// Value read from `rt`.
    pub rt_val: i64,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// 24-bit instruction word.
    pub inst: u32,
    /// Decoded opcode.
    pub opcode: Opcode,
    /// Destination register index (`rd` for R-type, `rt` otherwise).
    pub dest: usize,
    /// ALU result, or effective address for loads and stores.
    pub alu: i64,
    /// Value of `rt`, the data written by `sw`.
    pub store_data: i64,
    /// Resolved branch or jump outcome.
    pub control: ControlFlow,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// 24-bit instruction word.
    pub inst: u32,
    /// Decoded opcode.
    pub opcode: Opcode,
    /// Destination register index.
    pub dest: usize,
    /// ALU result (or the address for memory operations).
    pub alu: i64,
    /// Data loaded from memory by `lw`; 0 for every other opcode.
    pub load_data: i64,
}

/// IF/ID latch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IfId {
    /// In-flight instruction, or `None` for a bubble.
    pub entry: Option<IfIdEntry>,
}

/// ID/EX latch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdEx {
    /// In-flight instruction, or `None` for a bubble.
    pub entry: Option<IdExEntry>,
}

/// EX/MEM latch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExMem {
    /// In-flight instruction, or `None` for a bubble.
    pub entry: Option<ExMemEntry>,
}

/// MEM/WB latch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemWb {
    /// In-flight instruction, or `None` for a bubble.
    pub entry: Option<MemWbEntry>,
}

macro_rules! impl_latch {
    ($($latch:ty),+ $(,)?) => {
        $(
            impl PipelineLatch for $latch {
                #[inline]
                fn flush(&mut self) {
                    self.entry = None;
                }

                #[inline]
                fn is_empty(&self) -> bool {
                    self.entry.is_none()
                }
            }
        )+
    };
}

impl_latch!(IfId, IdEx, ExMem, MemWb);

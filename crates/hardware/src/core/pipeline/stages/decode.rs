//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline.
//! It splits the instruction word into its fields, sign-extends the
//! immediate and reads both source registers from the register file.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::isa::{Opcode, decode};

/// Executes the instruction decode stage of the pipeline.
///
/// Consumes the IF/ID latch and fills ID/EX. Every field is extracted
/// regardless of format; unused fields are simply ignored downstream.
/// Writeback runs earlier in the same cycle, so a value committed this
/// cycle is already visible to the register reads here.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn decode_stage(cpu: &mut Cpu) {
    let Some(IfIdEntry { pc, inst }) = cpu.if_id.entry.take() else {
        cpu.id_ex.entry = None;
        return;
    };

    let d = decode(inst);
    let opcode = Opcode::from_bits(d.opcode);
    let rs_val = cpu.regs.read(d.rs);
    let rt_val = cpu.regs.read(d.rt);

    trace!(
        "ID  pc={:#08x} {} rs=${}({}) rt=${}({}) rd=${} imm={}",
        pc, opcode, d.rs, rs_val, d.rt, rt_val, d.rd, d.imm
    );

    cpu.id_ex.entry = Some(IdExEntry {
        pc,
        inst,
        opcode,
        rs: d.rs,
        rt: d.rt,
        rd: d.rd,
        imm: d.imm,
        rs_val,
        rt_val,
    });
}

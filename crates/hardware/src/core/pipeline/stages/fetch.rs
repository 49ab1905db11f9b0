//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It fetches the instruction word at the current Program Counter (PC) into
//! the IF/ID latch and advances the PC by one instruction.
//!
//! Fetch runs last in the cycle, after Execute has written the EX/MEM latch,
//! so a branch or jump resolved this cycle redirects fetch immediately. A
//! redirect discards the two younger instructions still in the front end.

use tracing::{debug, trace};

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;
use crate::isa::disasm::disassemble;

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - If the instruction now in EX/MEM is a taken branch or a jump, the PC is
///   set to its target, IF/ID and ID/EX are flushed and nothing is fetched.
/// - Otherwise, if the PC maps to an instruction, that word is latched and
///   the PC advances by 3.
/// - Otherwise fetch has halted: IF/ID is left empty and the PC is unchanged.
pub fn fetch_stage(cpu: &mut Cpu) {
    let redirect = cpu
        .ex_mem
        .entry
        .and_then(|ex| ex.control.redirect().map(|target| (ex.pc, target)));

    if let Some((from, target)) = redirect {
        let discarded = cpu.flush_frontend();
        cpu.stats.control_redirects += 1;
        cpu.stats.flushed += discarded;
        debug!(
            "IF  redirect pc={:#08x} -> {:#08x} (discarded {})",
            from, target, discarded
        );
        cpu.pc = target;
        return;
    }

    let pc = cpu.pc;
    let Some(inst) = cpu.imem.fetch(pc) else {
        trace!("IF  halted pc={:#08x}", pc);
        cpu.if_id.entry = None;
        return;
    };

    trace!("IF  pc={:#08x} inst={:#08x} {}", pc, inst, disassemble(inst));
    cpu.if_id.entry = Some(IfIdEntry { pc, inst });
    cpu.pc = pc + INSTRUCTION_SIZE;
}

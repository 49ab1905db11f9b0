//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits results to the register file and updates retirement
//! statistics.

use tracing::trace;

use crate::core::Cpu;

/// Executes the writeback stage of the pipeline.
///
/// Consumes the MEM/WB latch. R-type, `addi`, `ori` and `slti` commit their
/// ALU result; `lw` commits the loaded value. Writes to `$0` are discarded
/// by the register file. Stores, branches, jumps and unknown opcodes retire
/// without a register write.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn wb_stage(cpu: &mut Cpu) {
    let Some(wb) = cpu.mem_wb.entry.take() else {
        cpu.stats.wb_bubbles += 1;
        return;
    };

    if wb.opcode.writes_register() {
        let value = if wb.opcode.is_load() {
            wb.load_data
        } else {
            wb.alu
        };
        cpu.regs.write(wb.dest, value);
        trace!("WB  pc={:#08x} {} ${} <- {}", wb.pc, wb.opcode, wb.dest, value);
    } else {
        trace!("WB  pc={:#08x} {} (no write)", wb.pc, wb.opcode);
    }

    cpu.stats.record_retire(wb.opcode);
}

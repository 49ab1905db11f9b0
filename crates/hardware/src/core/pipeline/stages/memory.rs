//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! `lw` reads data memory at the address computed by Execute and `sw`
//! writes the value of `rt` there. Every other instruction passes through.

use tracing::{debug, trace};

use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;
use crate::isa::Opcode;

/// Executes the memory access stage of the pipeline.
///
/// Consumes the EX/MEM latch and fills MEM/WB. Loads from an address that
/// was never written return 0.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn mem_stage(cpu: &mut Cpu) {
    let Some(ex) = cpu.ex_mem.entry.take() else {
        cpu.mem_wb.entry = None;
        return;
    };

    let load_data = match ex.opcode {
        Opcode::Lw => {
            let data = cpu.dmem.load(ex.alu);
            trace!("MEM pc={:#08x} lw [{:#x}] -> {}", ex.pc, ex.alu, data);
            data
        }
        Opcode::Sw => {
            cpu.dmem.store(ex.alu, ex.store_data);
            debug!("MEM pc={:#08x} sw [{:#x}] <- {}", ex.pc, ex.alu, ex.store_data);
            0
        }
        _ => 0,
    };

    cpu.mem_wb.entry = Some(MemWbEntry {
        pc: ex.pc,
        inst: ex.inst,
        opcode: ex.opcode,
        dest: ex.dest,
        alu: ex.alu,
        load_data,
    });
}

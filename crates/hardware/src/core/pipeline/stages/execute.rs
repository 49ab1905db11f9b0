//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline.
//! It performs ALU operations, computes effective addresses for loads and
//! stores, and resolves branch conditions and jump targets. The resolved
//! control-flow outcome travels in the EX/MEM latch, where Fetch picks it
//! up later in the same cycle.

use tracing::trace;

use crate::common::constants::{INSTRUCTION_SIZE, REG_ZERO};
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry};
use crate::core::pipeline::signals::{AluOp, ControlFlow};
use crate::core::units::alu::Alu;
use crate::isa::instruction::{FUNCT_MASK, IMM_MASK};
use crate::isa::{Funct, Opcode};

/// Shift amount used by `sll` and `srl`; the encoding has no shamt field.
const SHIFT_AMOUNT: i64 = 1;

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - `addi`, `ori`, `slti` combine `rs` with the immediate.
/// - `lw`/`sw` compute the effective address `rs + imm`.
/// - `beq`/`bgtz` evaluate their condition; the target is
///   `pc + imm * 3` relative to the branch itself.
/// - `j` targets `pc + addr` with the 11-bit address taken unsigned.
/// - R-type dispatches on the low 7 bits of the immediate field. Shifts use
///   a fixed amount of 1. An unrecognized function code yields 0.
/// - Unknown opcodes pass through with a result of 0.
pub fn execute_stage(cpu: &mut Cpu) {
    let Some(id) = cpu.id_ex.entry.take() else {
        cpu.ex_mem.entry = None;
        return;
    };

    let (alu, control) = execute(&id);
    let dest = match id.opcode {
        Opcode::RType => id.rd,
        Opcode::J => REG_ZERO,
        _ => id.rt,
    };

    trace!(
        "EX  pc={:#08x} {} alu={} dest=${} {:?}",
        id.pc, id.opcode, alu, dest, control
    );

    cpu.ex_mem.entry = Some(ExMemEntry {
        pc: id.pc,
        inst: id.inst,
        opcode: id.opcode,
        dest,
        alu,
        store_data: id.rt_val,
        control,
    });
}

/// Computes the ALU result and control-flow outcome of one instruction.
fn execute(id: &IdExEntry) -> (i64, ControlFlow) {
    match id.opcode {
        Opcode::Addi | Opcode::Lw | Opcode::Sw => {
            (Alu::execute(AluOp::Add, id.rs_val, id.imm), ControlFlow::None)
        }
        Opcode::Ori => (Alu::execute(AluOp::Or, id.rs_val, id.imm), ControlFlow::None),
        Opcode::Slti => (Alu::execute(AluOp::Slt, id.rs_val, id.imm), ControlFlow::None),
        Opcode::Beq => (
            0,
            ControlFlow::Branch {
                taken: id.rs_val == id.rt_val,
                target: branch_target(id.pc, id.imm),
            },
        ),
        Opcode::Bgtz => (
            0,
            ControlFlow::Branch {
                taken: id.rs_val > 0,
                target: branch_target(id.pc, id.imm),
            },
        ),
        Opcode::J => {
            let addr = (id.imm as u64) & u64::from(IMM_MASK);
            (
                0,
                ControlFlow::Jump {
                    target: id.pc.wrapping_add(addr),
                },
            )
        }
        Opcode::RType => {
            let funct = (id.imm as u32 & FUNCT_MASK) as u8;
            let alu = match Funct::from_bits(funct) {
                Some(f) if f.is_shift() => Alu::execute(f.into(), id.rs_val, SHIFT_AMOUNT),
                Some(f) => Alu::execute(f.into(), id.rs_val, id.rt_val),
                None => 0,
            };
            (alu, ControlFlow::None)
        }
        Opcode::Unknown(_) => (0, ControlFlow::None),
    }
}

/// Branch target: the branch's own address plus `imm` instructions.
///
/// A target below zero wraps to an address far outside instruction memory,
/// which halts fetch.
fn branch_target(pc: u64, imm: i64) -> u64 {
    pc.wrapping_add_signed(imm.wrapping_mul(INSTRUCTION_SIZE as i64))
}

//! Program Loader.
//!
//! Places a pre-encoded program into instruction memory and resets the
//! front of the machine so the first fetch reads address 0. Programs are
//! fixed at build time; there is no assembler or binary format.

use tracing::{debug, trace};

use crate::common::constants::RESET_PC;
use crate::core::Cpu;
use crate::isa::disasm::disassemble;

/// Loads `program` into the CPU's instruction memory.
///
/// Instruction `i` is mapped at address `3 * i`. The PC is reset to 0;
/// registers, data memory and statistics are left untouched.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `program` - Encoded 24-bit instruction words, in program order.
pub fn load_program(cpu: &mut Cpu, program: &[u32]) {
    cpu.imem.load_program(program);
    cpu.pc = RESET_PC;
    debug!(
        "loaded {} instructions ({:#08x}..{:#08x})",
        cpu.imem.len(),
        RESET_PC,
        cpu.imem.end_address()
    );
    for (addr, word) in cpu.imem.iter() {
        trace!("  {:#08x}: {:#08x}  {}", addr, word, disassemble(word));
    }
}

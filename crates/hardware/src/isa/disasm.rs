//! Instruction Disassembler.
//!
//! Converts a 24-bit instruction word into a human-readable mnemonic string
//! for stage trace logging, the CLI program listing and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use pipesim_core::isa::disasm::disassemble;
//! use pipesim_core::isa::encode::encode_i_type;
//! use pipesim_core::isa::opcodes::Opcode;
//!
//! let word = encode_i_type(Opcode::Addi, 0, 1, 1);
//! assert_eq!(disassemble(word), "addi $1, $0, 1");
//! ```

use crate::isa::decode::decode;
use crate::isa::funct::Funct;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::Opcode;

/// Disassembles an instruction word into a human-readable string.
///
/// Unassigned opcodes render as a raw `.word` directive; unassigned R-type
/// function codes keep their numeric code.
///
/// # Arguments
///
/// * `inst` - The raw 24-bit instruction word.
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);
    let (rs, rt, rd, imm) = (d.rs, d.rt, d.rd, d.imm);

    match Opcode::from_bits(d.opcode) {
        Opcode::RType => match Funct::from_bits(inst.funct()) {
            Some(f) if f.is_shift() => format!("{f} ${rd}, ${rs}"),
            Some(f) => format!("{f} ${rd}, ${rs}, ${rt}"),
            None => format!("r_type ${rd}, ${rs}, ${rt}, funct={:#04x}", inst.funct()),
        },
        op @ (Opcode::Addi | Opcode::Ori | Opcode::Slti) => {
            format!("{op} ${rt}, ${rs}, {imm}")
        }
        op @ (Opcode::Lw | Opcode::Sw) => format!("{op} ${rt}, {imm}(${rs})"),
        Opcode::Beq => format!("beq ${rs}, ${rt}, {imm}"),
        Opcode::Bgtz => format!("bgtz ${rs}, {imm}"),
        Opcode::J => format!("j +{}", inst.imm_bits()),
        Opcode::Unknown(_) => format!(".word {inst:#08x}"),
    }
}

//! Instruction Encoder.
//!
//! Packs typed fields into 24-bit instruction words. Each field is masked to
//! its width before it is shifted into place, so an out-of-range argument can
//! never corrupt a neighbouring field.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::isa::funct::Funct;
use crate::isa::instruction::{
    FUNCT_MASK, IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT,
};
use crate::isa::opcodes::Opcode;

#[inline]
fn opcode_field(opcode: Opcode) -> u32 {
    (u32::from(opcode.bits()) & OPCODE_MASK) << OPCODE_SHIFT
}

#[inline]
fn reg_field(reg: usize, shift: u32) -> u32 {
    ((reg as u32) & REG_MASK) << shift
}

/// Encodes an I-type instruction.
///
/// The immediate is stored as its low 11 bits, so negative values land in
/// two's-complement form.
///
/// # Arguments
///
/// * `opcode` - Instruction opcode.
/// * `rs` - Source register.
/// * `rt` - Target register.
/// * `imm` - Signed immediate, meaningful in `-1024..=1023`.
pub fn encode_i_type(opcode: Opcode, rs: usize, rt: usize, imm: i32) -> u32 {
    opcode_field(opcode)
        | reg_field(rs, RS_SHIFT)
        | reg_field(rt, RT_SHIFT)
        | (imm as u32 & IMM_MASK)
}

/// Encodes an R-type instruction from a raw 7-bit function code.
///
/// # Arguments
///
/// * `opcode` - Instruction opcode (normally [`Opcode::RType`]).
/// * `rs` - First operand register.
/// * `rt` - Second operand register.
/// * `rd` - Destination register.
/// * `funct` - Function code, masked to 7 bits.
pub fn encode_r_type(opcode: Opcode, rs: usize, rt: usize, rd: usize, funct: u8) -> u32 {
    opcode_field(opcode)
        | reg_field(rs, RS_SHIFT)
        | reg_field(rt, RT_SHIFT)
        | reg_field(rd, RD_SHIFT)
        | (u32::from(funct) & FUNCT_MASK)
}

/// Encodes an R-type instruction with a typed function.
pub fn encode_alu(funct: Funct, rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r_type(Opcode::RType, rs, rt, rd, funct.bits())
}

/// Encodes a J-type instruction.
///
/// The target is given as a word offset and stored as `word_offset * 3`
/// truncated to 11 bits. At execute time the field is added, unsigned, to the
/// jump's own PC.
///
/// # Arguments
///
/// * `opcode` - Instruction opcode (normally [`Opcode::J`]).
/// * `word_offset` - Distance to the target in instructions.
pub fn encode_j_type(opcode: Opcode, word_offset: i32) -> u32 {
    let addr = word_offset.wrapping_mul(INSTRUCTION_SIZE as i32) as u32 & IMM_MASK;
    opcode_field(opcode) | addr
}

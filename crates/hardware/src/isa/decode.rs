//! Instruction Decoder.
//!
//! This module handles the decoding of 24-bit instruction words into the
//! structured `Decoded` format. Decoding is uniform: every field is extracted
//! from every word without looking at the opcode, and the 11-bit immediate is
//! always sign-extended. The pipeline stages decide which fields matter.

use crate::isa::instruction::{Decoded, IMM_BITS, InstructionBits};

/// Width of the host integer the immediate is extended into, in bits.
const HOST_WIDTH: u32 = i64::BITS;

/// Decodes an instruction word into its component fields.
///
/// # Arguments
///
/// * `inst` - The 24-bit instruction word to decode.
///
/// # Returns
///
/// A `Decoded` structure containing all extracted instruction fields. The
/// immediate carries bit 10 of the word as its sign bit.
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.opcode(),
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
        imm: sign_extend(inst.imm_bits(), IMM_BITS),
    }
}

/// Sign extends a value of `bits` width to a 64-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend. Bits above `bits` are ignored.
/// * `bits` - The number of valid bits in `val` (1 to 32).
pub fn sign_extend(val: u32, bits: u32) -> i64 {
    let shift = HOST_WIDTH - bits;
    ((val as i64) << shift) >> shift
}

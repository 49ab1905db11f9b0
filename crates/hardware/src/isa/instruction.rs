//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and structures for decoding instruction
//! fields from 24-bit instruction words. All three shapes share one layout:
//!
//! ```text
//!  23     19 18   15 14   11 10    7 6          0
//! +---------+-------+-------+-------+------------+
//! | opcode  |  rs   |  rt   |  rd   |   funct    |  R-type
//! | opcode  |  rs   |  rt   |     imm[10:0]      |  I-type
//! | opcode  |   (unused)    |    addr[10:0]      |  J-type
//! +---------+-------+-------+--------------------+
//! ```

/// Bit shift of the opcode field (bits 19-23).
pub const OPCODE_SHIFT: u32 = 19;
/// Bit mask for the 5-bit opcode field.
pub const OPCODE_MASK: u32 = 0x1F;
/// Bit shift of the first source register field (bits 15-18).
pub const RS_SHIFT: u32 = 15;
/// Bit shift of the target/operand register field (bits 11-14).
pub const RT_SHIFT: u32 = 11;
/// Bit shift of the R-type destination register field (bits 7-10).
pub const RD_SHIFT: u32 = 7;
/// Bit mask for any 4-bit register field.
pub const REG_MASK: u32 = 0xF;
/// Bit mask for the 7-bit R-type function field (bits 0-6).
pub const FUNCT_MASK: u32 = 0x7F;
/// Bit mask for the 11-bit immediate / jump address field (bits 0-10).
pub const IMM_MASK: u32 = 0x7FF;
/// Width of the immediate field in bits.
pub const IMM_BITS: u32 = 11;

/// Decoded instruction fields.
///
/// Every field is extracted for every word; the pipeline decides which ones
/// are meaningful for a given opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 24-bit instruction word.
    pub raw: u32,
    /// 5-bit opcode.
    pub opcode: u8,
    /// Source register index.
    pub rs: usize,
    /// Target (I-type) or second operand (R-type) register index.
    pub rt: usize,
    /// R-type destination register index.
    pub rd: usize,
    /// Sign-extended 11-bit immediate.
    pub imm: i64,
}

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 19-23).
    fn opcode(&self) -> u8;

    /// Extracts the source register field (bits 15-18).
    fn rs(&self) -> usize;

    /// Extracts the target register field (bits 11-14).
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register field (bits 7-10).
    fn rd(&self) -> usize;

    /// Extracts the R-type function field (bits 0-6).
    fn funct(&self) -> u8;

    /// Extracts the raw, unextended 11-bit immediate (bits 0-10).
    fn imm_bits(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct(&self) -> u8 {
        (self & FUNCT_MASK) as u8
    }

    #[inline(always)]
    fn imm_bits(&self) -> u32 {
        self & IMM_MASK
    }
}

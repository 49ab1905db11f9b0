//! Opcode table.
//!
//! The 5-bit opcode space is modelled as a tagged enumeration. Bit patterns
//! with no assigned instruction decode to [`Opcode::Unknown`] and flow through
//! the pipeline as no-ops.

use std::fmt;

/// Register-register arithmetic (function selected by the `funct` field).
pub const OP_R_TYPE: u8 = 0b00000;
/// Add immediate.
pub const OP_ADDI: u8 = 0b00001;
/// Bitwise OR with immediate.
pub const OP_ORI: u8 = 0b00010;
/// Set if less than immediate (signed).
pub const OP_SLTI: u8 = 0b00011;
/// Load word.
pub const OP_LW: u8 = 0b00100;
/// Store word.
pub const OP_SW: u8 = 0b00101;
/// Branch if equal.
pub const OP_BEQ: u8 = 0b00110;
/// Branch if greater than zero.
pub const OP_BGTZ: u8 = 0b00111;
/// Unconditional PC-relative jump.
pub const OP_J: u8 = 0b01000;

/// Decoded opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// R-type arithmetic; the operation lives in the `funct` field.
    RType,
    /// `addi rt, rs, imm`
    Addi,
    /// `ori rt, rs, imm`
    Ori,
    /// `slti rt, rs, imm`
    Slti,
    /// `lw rt, imm(rs)`
    Lw,
    /// `sw rt, imm(rs)`
    Sw,
    /// `beq rs, rt, imm`
    Beq,
    /// `bgtz rs, imm`
    Bgtz,
    /// `j addr`
    J,
    /// Unassigned opcode bits.
    Unknown(u8),
}

impl Opcode {
    /// Maps a 5-bit opcode field onto the opcode table.
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            OP_R_TYPE => Self::RType,
            OP_ADDI => Self::Addi,
            OP_ORI => Self::Ori,
            OP_SLTI => Self::Slti,
            OP_LW => Self::Lw,
            OP_SW => Self::Sw,
            OP_BEQ => Self::Beq,
            OP_BGTZ => Self::Bgtz,
            OP_J => Self::J,
            other => Self::Unknown(other),
        }
    }

    /// Returns the 5-bit encoding of this opcode.
    pub const fn bits(self) -> u8 {
        match self {
            Self::RType => OP_R_TYPE,
            Self::Addi => OP_ADDI,
            Self::Ori => OP_ORI,
            Self::Slti => OP_SLTI,
            Self::Lw => OP_LW,
            Self::Sw => OP_SW,
            Self::Beq => OP_BEQ,
            Self::Bgtz => OP_BGTZ,
            Self::J => OP_J,
            Self::Unknown(bits) => bits,
        }
    }

    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::RType => "r_type",
            Self::Addi => "addi",
            Self::Ori => "ori",
            Self::Slti => "slti",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Bgtz => "bgtz",
            Self::J => "j",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Whether the write-back stage commits a value to the register file.
    pub const fn writes_register(self) -> bool {
        matches!(
            self,
            Self::RType | Self::Addi | Self::Ori | Self::Slti | Self::Lw
        )
    }

    /// Whether the instruction reads data memory.
    pub const fn is_load(self) -> bool {
        matches!(self, Self::Lw)
    }

    /// Whether the instruction writes data memory.
    pub const fn is_store(self) -> bool {
        matches!(self, Self::Sw)
    }

    /// Whether the instruction is a conditional branch.
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::Beq | Self::Bgtz)
    }

    /// Whether the instruction is an unconditional jump.
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::J)
    }

    /// Whether the R-type register layout (`rd` destination) applies.
    pub const fn is_r_type(self) -> bool {
        matches!(self, Self::RType)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(bits) => write!(f, "unknown({bits:#07b})"),
            other => f.write_str(other.mnemonic()),
        }
    }
}

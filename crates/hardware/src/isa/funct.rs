//! R-type function codes (7-bit `funct` field).

use std::fmt;

/// `rd = rs + rt`
pub const ADD: u8 = 0b000_0000;
/// `rd = rs - rt`
pub const SUB: u8 = 0b000_0001;
/// `rd = rs * rt`
pub const MUL: u8 = 0b000_0010;
/// `rd = rs ^ rt`
pub const XOR: u8 = 0b000_0011;
/// `rd = rs >> 1` (logical)
pub const SRL: u8 = 0b000_0100;
/// `rd = rs << 1`
pub const SLL: u8 = 0b000_0101;
/// `rd = rs & rt`
pub const AND: u8 = 0b000_0110;
/// `rd = rs | rt`
pub const OR: u8 = 0b000_0111;
/// `rd = !(rs | rt)`
pub const NOR: u8 = 0b000_1000;

/// R-type ALU function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Funct {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Bitwise exclusive or.
    Xor,
    /// Logical shift right by one.
    Srl,
    /// Logical shift left by one.
    Sll,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Or,
    /// Bitwise complement of or.
    Nor,
}

impl Funct {
    /// Maps a 7-bit function field onto the function table.
    ///
    /// Returns `None` for unassigned codes.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            ADD => Self::Add,
            SUB => Self::Sub,
            MUL => Self::Mul,
            XOR => Self::Xor,
            SRL => Self::Srl,
            SLL => Self::Sll,
            AND => Self::And,
            OR => Self::Or,
            NOR => Self::Nor,
            _ => return None,
        })
    }

    /// Returns the 7-bit encoding of this function.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Add => ADD,
            Self::Sub => SUB,
            Self::Mul => MUL,
            Self::Xor => XOR,
            Self::Srl => SRL,
            Self::Sll => SLL,
            Self::And => AND,
            Self::Or => OR,
            Self::Nor => NOR,
        }
    }

    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sll => "sll",
            Self::And => "and",
            Self::Or => "or",
            Self::Nor => "nor",
        }
    }

    /// Shifts use only `rs`; the `rt` operand is ignored.
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Srl | Self::Sll)
    }
}

impl fmt::Display for Funct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

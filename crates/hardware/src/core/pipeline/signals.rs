//! Pipeline control signals and operation types.
//!
//! This module defines the signals the Execute stage derives from an opcode:
//! 1. **Operation Classification:** The ALU operation an instruction performs.
//! 2. **Control Flow:** The resolved outcome of branches and jumps, carried in
//!    the EX/MEM latch so Fetch can redirect the PC in the same cycle.

use crate::isa::funct::Funct;

/// ALU operation types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition.
    Add,

    /// Integer subtraction.
    Sub,

    /// Integer multiply (low bits).
    Mul,

    /// Bitwise XOR.
    Xor,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,

    /// Bitwise NOR.
    Nor,

    /// Set less than (signed).
    Slt,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,
}

impl From<Funct> for AluOp {
    fn from(funct: Funct) -> Self {
        match funct {
            Funct::Add => Self::Add,
            Funct::Sub => Self::Sub,
            Funct::Mul => Self::Mul,
            Funct::Xor => Self::Xor,
            Funct::Srl => Self::Srl,
            Funct::Sll => Self::Sll,
            Funct::And => Self::And,
            Funct::Or => Self::Or,
            Funct::Nor => Self::Nor,
        }
    }
}

/// Control-flow outcome resolved in the Execute stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Sequential instruction; PC is not affected.
    #[default]
    None,

    /// Conditional branch with its evaluated condition and target.
    Branch {
        /// Whether the branch condition held.
        taken: bool,
        /// Branch target address.
        target: u64,
    },

    /// Unconditional jump to `target`.
    Jump {
        /// Jump target address.
        target: u64,
    },
}

impl ControlFlow {
    /// Returns the address Fetch must redirect to, if any.
    pub const fn redirect(self) -> Option<u64> {
        match self {
            Self::Branch { taken: true, target } | Self::Jump { target } => Some(target),
            Self::Branch { taken: false, .. } | Self::None => None,
        }
    }
}

//! Built-in programs.
//!
//! The demo program counts `$7` down from 5, loading from a table indexed by
//! `$6` and storing results back below it. Because the pipeline has no
//! interlocks, it relies on the write-back timing of every instruction; a
//! consumer that sits too close to its producer reads the stale value.

use crate::isa::funct::Funct;
use crate::isa::opcodes::Opcode;
use crate::isa::{encode_alu, encode_i_type, encode_j_type};

/// Returns the 23-instruction demo program.
pub fn demo() -> Vec<u32> {
    vec![
        encode_i_type(Opcode::Addi, 0, 1, 1),
        encode_i_type(Opcode::Addi, 0, 2, 1),
        encode_i_type(Opcode::Ori, 0, 3, 255),
        encode_i_type(Opcode::Addi, 0, 4, 15),
        encode_i_type(Opcode::Addi, 0, 5, 0),
        encode_i_type(Opcode::Addi, 0, 6, 16),
        encode_i_type(Opcode::Addi, 0, 7, 5),
        encode_i_type(Opcode::Lw, 0, 8, 256),
        // loop:
        encode_i_type(Opcode::Bgtz, 7, 0, 2),
        encode_j_type(Opcode::J, 4),
        encode_i_type(Opcode::Addi, 7, 7, -1),
        encode_i_type(Opcode::Lw, 6, 5, 0),
        encode_i_type(Opcode::Addi, 6, 6, 3),
        encode_i_type(Opcode::Bgtz, 5, 0, 2),
        encode_j_type(Opcode::J, 6),
        encode_alu(Funct::Mul, 1, 1, 9),
        encode_alu(Funct::Xor, 2, 2, 5),
        encode_i_type(Opcode::Sw, 6, 8, -3),
        encode_j_type(Opcode::J, -31),
        // else:
        encode_alu(Funct::Srl, 3, 3, 1),
        encode_alu(Funct::Sub, 4, 4, 5),
        encode_i_type(Opcode::Sw, 6, 8, -3),
        encode_j_type(Opcode::J, -33),
    ]
}

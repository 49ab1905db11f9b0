//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code tables, the instruction word layout,
//! and the encode/decode/disassemble logic for the 24-bit instruction set.
//!
//! # Instruction shapes
//!
//! * `I-type`: `addi`, `ori`, `slti`, `lw`, `sw`, `beq`, `bgtz`.
//! * `R-type`: opcode 0 with a 7-bit function code.
//! * `J-type`: `j` with an 11-bit PC-relative target.

/// Instruction decoding into typed fields.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding from typed fields.
pub mod encode;

/// R-type function codes.
pub mod funct;

/// Instruction word layout and bit extraction utilities.
pub mod instruction;

/// Opcode table.
pub mod opcodes;

pub use decode::decode;
pub use encode::{encode_alu, encode_i_type, encode_j_type, encode_r_type};
pub use funct::Funct;
pub use instruction::Decoded;
pub use opcodes::Opcode;

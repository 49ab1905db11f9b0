//! # Decode Stage Tests

use pipesim_core::core::Cpu;
use pipesim_core::core::pipeline::latches::IfIdEntry;
use pipesim_core::core::pipeline::stages::decode_stage;
use pipesim_core::isa::Opcode;

use crate::common::builder::instruction::InstructionBuilder;

#[test]
fn decode_reads_operands_and_sign_extends_immediate() {
    let mut cpu = Cpu::new();
    cpu.regs.write(6, 16);
    cpu.regs.write(8, 99);
    let inst = InstructionBuilder::new().sw(8, 6, -3).build();
    cpu.if_id.entry = Some(IfIdEntry { pc: 51, inst });

    decode_stage(&mut cpu);

    let id = cpu.id_ex.entry.unwrap();
    assert_eq!(id.pc, 51);
    assert_eq!(id.opcode, Opcode::Sw);
    assert_eq!((id.rs, id.rt), (6, 8));
    assert_eq!((id.rs_val, id.rt_val), (16, 99));
    assert_eq!(id.imm, -3);
    assert!(cpu.if_id.entry.is_none(), "decode consumes IF/ID");
}

#[test]
fn decode_reads_r0_as_zero() {
    let mut cpu = Cpu::new();
    let inst = InstructionBuilder::new().add(1, 0, 0).build();
    cpu.if_id.entry = Some(IfIdEntry { pc: 0, inst });

    decode_stage(&mut cpu);

    let id = cpu.id_ex.entry.unwrap();
    assert_eq!(id.rd, 1);
    assert_eq!((id.rs_val, id.rt_val), (0, 0));
}

#[test]
fn empty_if_id_propagates_a_bubble() {
    let mut cpu = Cpu::new();
    cpu.if_id.entry = Some(IfIdEntry { pc: 0, inst: 0 });
    decode_stage(&mut cpu);
    assert!(cpu.id_ex.entry.is_some());

    decode_stage(&mut cpu);
    assert!(cpu.id_ex.entry.is_none());
}

#[test]
fn unknown_opcode_decodes_without_error() {
    let mut cpu = Cpu::new();
    let inst = InstructionBuilder::new().opcode(Opcode::Unknown(31)).build();
    cpu.if_id.entry = Some(IfIdEntry { pc: 0, inst });

    decode_stage(&mut cpu);

    assert_eq!(cpu.id_ex.entry.unwrap().opcode, Opcode::Unknown(31));
}

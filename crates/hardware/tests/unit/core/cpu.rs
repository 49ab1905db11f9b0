//! # CPU State Tests

use pipesim_core::core::Cpu;
use pipesim_core::core::pipeline::latches::IfIdEntry;
use pipesim_core::isa::Opcode;
use pipesim_core::sim::loader::load_program;

use crate::common::builder::pipeline_state::{IdExBuilder, MemWbBuilder};

#[test]
fn reset_state_is_empty() {
    let cpu = Cpu::new();
    assert_eq!(cpu.pc, 0);
    assert!(cpu.pipeline_empty());
    assert!(cpu.imem.is_empty());
    assert!(cpu.dmem.is_empty());
}

#[test]
fn cpu_without_program_is_drained() {
    assert!(Cpu::new().is_drained());
}

#[test]
fn mapped_pc_is_not_drained() {
    let mut cpu = Cpu::new();
    load_program(&mut cpu, &[0x080801]);
    assert!(!cpu.is_drained());
}

#[test]
fn any_occupied_latch_prevents_draining() {
    let mut cpu = Cpu::new();
    cpu.mem_wb.entry = Some(MemWbBuilder::new(Opcode::Addi).build());
    assert!(!cpu.is_drained());

    cpu.mem_wb.entry = None;
    assert!(cpu.is_drained());
}

#[test]
fn flush_frontend_reports_discarded_count() {
    let mut cpu = Cpu::new();
    cpu.if_id.entry = Some(IfIdEntry { pc: 6, inst: 0 });
    cpu.id_ex.entry = Some(IdExBuilder::new(Opcode::Addi).pc(3).build());

    assert_eq!(cpu.flush_frontend(), 2);
    assert!(cpu.if_id.entry.is_none() && cpu.id_ex.entry.is_none());
    assert_eq!(cpu.flush_frontend(), 0);
}

//! # Statistics Tests

use pipesim_core::isa::Opcode;
use pipesim_core::stats::SimStats;

#[test]
fn retire_classifies_instruction_mix() {
    let mut stats = SimStats::default();
    for op in [
        Opcode::RType,
        Opcode::Addi,
        Opcode::Ori,
        Opcode::Slti,
        Opcode::Lw,
        Opcode::Sw,
        Opcode::Beq,
        Opcode::Bgtz,
        Opcode::J,
        Opcode::Unknown(30),
    ] {
        stats.record_retire(op);
    }

    assert_eq!(stats.instructions_retired, 10);
    assert_eq!(stats.inst_alu, 4);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 2);
    assert_eq!(stats.inst_jump, 1);
    assert_eq!(stats.inst_unknown, 1);
}

#[test]
fn cpi_is_zero_before_anything_retires() {
    let stats = SimStats {
        cycles: 4,
        ..SimStats::default()
    };
    assert!(stats.cpi().abs() < f64::EPSILON);
}

#[test]
fn cpi_divides_cycles_by_retired() {
    let stats = SimStats {
        cycles: 7,
        instructions_retired: 2,
        ..SimStats::default()
    };
    assert!((stats.cpi() - 3.5).abs() < 1e-9);
}

#[test]
fn display_summarises_counters() {
    let stats = SimStats {
        cycles: 23,
        instructions_retired: 15,
        control_redirects: 3,
        flushed: 2,
        ..SimStats::default()
    };
    let text = stats.to_string();

    assert!(text.contains("sim_cycles               23"));
    assert!(text.contains("sim_insts                15"));
    assert!(text.contains("sim_cpi                  1.5333"));
    assert!(text.contains("redirects              3"));
    assert!(!text.contains("op.unknown"), "unknown row only appears when non-zero");
}

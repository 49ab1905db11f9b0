//! Control Hazard Tests — Pipeline Flushing on Taken Transfers.
//!
//! Branches and jumps resolve in Execute. Fetch, running later in the same
//! cycle, redirects the PC and flushes the two younger instructions in the
//! front end. These tests run short programs through the full pipeline and
//! check PC redirection, latch clearing and stat counters.

use pipesim_core::sim::RunOutcome;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

// ══════════════════════════════════════════════════════════
// Helper programs
// ══════════════════════════════════════════════════════════

/// Program:
/// ```text
///   0: $1 = 11
///   3: $2 = 22
///   6: $3 = 33
///   9: beq $0, $0, +3   (always taken → 18)
///  12: $4 = 44          (flushed)
///  15: $5 = 55          (never fetched)
///  18: $6 = 66          (branch target)
/// ```
fn taken_beq_program() -> Vec<u32> {
    vec![
        InstructionBuilder::new().addi(1, 0, 11).build(),
        InstructionBuilder::new().addi(2, 0, 22).build(),
        InstructionBuilder::new().addi(3, 0, 33).build(),
        InstructionBuilder::new().beq(0, 0, 3).build(),
        InstructionBuilder::new().addi(4, 0, 44).build(),
        InstructionBuilder::new().addi(5, 0, 55).build(),
        InstructionBuilder::new().addi(6, 0, 66).build(),
    ]
}

// ══════════════════════════════════════════════════════════
// 1. Taken branch flushes wrong-path instructions
// ══════════════════════════════════════════════════════════

#[test]
fn taken_branch_redirects_pc_in_its_execute_cycle() {
    let mut tc = TestContext::new().load_program(&taken_beq_program());

    // The branch at 9 is fetched in cycle 4 and executes in cycle 6.
    tc.tick(5);
    assert_eq!(tc.cpu().pc, 15);

    tc.tick(1);
    assert_eq!(tc.cpu().pc, 18, "PC must be redirected to the target");
    assert!(tc.cpu().if_id.entry.is_none(), "IF/ID flushed");
    assert!(tc.cpu().id_ex.entry.is_none(), "ID/EX flushed");

    tc.tick(1);
    assert_eq!(tc.cpu().if_id.entry.map(|e| e.pc), Some(18));
}

#[test]
fn flushed_instructions_never_write_back() {
    let mut tc = TestContext::new().load_program(&taken_beq_program());

    let outcome = tc.run(100);

    assert_eq!(outcome, RunOutcome::Halted { cycles: 11 });
    assert_eq!(tc.get_reg(1), 11);
    assert_eq!(tc.get_reg(2), 22);
    assert_eq!(tc.get_reg(3), 33);
    assert_eq!(tc.get_reg(4), 0, "$4 must NOT be written (flushed by branch)");
    assert_eq!(tc.get_reg(5), 0, "$5 must NOT be written (skipped by branch)");
    assert_eq!(tc.get_reg(6), 66, "branch target must execute");

    let stats = &tc.cpu().stats;
    assert_eq!(stats.control_redirects, 1);
    assert_eq!(stats.flushed, 1);
    assert_eq!(stats.instructions_retired, 5);
    assert_eq!(stats.inst_branch, 1);
}

#[test]
fn taken_bgtz_fetches_the_target_next() {
    //  0: $7 = 1
    //  3: nop
    //  6: nop
    //  9: bgtz $7, +3   (taken → 18)
    // 12: $4 = 44       (flushed)
    // 15: $5 = 55       (never fetched)
    // 18: $6 = 66
    let program = [
        InstructionBuilder::new().addi(7, 0, 1).build(),
        InstructionBuilder::new().nop().build(),
        InstructionBuilder::new().nop().build(),
        InstructionBuilder::new().bgtz(7, 3).build(),
        InstructionBuilder::new().addi(4, 0, 44).build(),
        InstructionBuilder::new().addi(5, 0, 55).build(),
        InstructionBuilder::new().addi(6, 0, 66).build(),
    ];
    let mut tc = TestContext::new().load_program(&program);

    tc.tick(6);
    assert_eq!(tc.cpu().pc, 18);
    assert!(tc.cpu().if_id.entry.is_none(), "IF/ID flushed");

    tc.tick(1);
    assert_eq!(tc.cpu().if_id.entry.map(|e| e.pc), Some(18));

    let outcome = tc.run(100);
    assert!(matches!(outcome, RunOutcome::Halted { .. }));
    assert_eq!(tc.get_reg(4), 0);
    assert_eq!(tc.get_reg(5), 0);
    assert_eq!(tc.get_reg(6), 66);
    assert_eq!(tc.cpu().stats.control_redirects, 1);
}

#[test]
fn untaken_branch_does_not_flush() {
    let program = [
        InstructionBuilder::new().addi(1, 0, 1).build(),
        InstructionBuilder::new().nop().build(),
        InstructionBuilder::new().nop().build(),
        InstructionBuilder::new().beq(1, 0, 3).build(),
        InstructionBuilder::new().addi(4, 0, 44).build(),
        InstructionBuilder::new().addi(5, 0, 55).build(),
    ];
    let mut tc = TestContext::new().load_program(&program);

    let _ = tc.run(100);

    assert_eq!(tc.get_reg(4), 44);
    assert_eq!(tc.get_reg(5), 55);
    assert_eq!(tc.cpu().stats.control_redirects, 0);
    assert_eq!(tc.cpu().stats.flushed, 0);
}

// ══════════════════════════════════════════════════════════
// 2. Jumps
// ══════════════════════════════════════════════════════════

#[test]
fn jump_skips_following_instructions() {
    // 0: j +3 → 9
    // 3: $1 = 1   (flushed)
    // 6: $2 = 2   (never fetched)
    // 9: $3 = 3
    let program = [
        InstructionBuilder::new().j(3).build(),
        InstructionBuilder::new().addi(1, 0, 1).build(),
        InstructionBuilder::new().addi(2, 0, 2).build(),
        InstructionBuilder::new().addi(3, 0, 3).build(),
    ];
    let mut tc = TestContext::new().load_program(&program);

    let outcome = tc.run(100);

    assert!(matches!(outcome, RunOutcome::Halted { .. }));
    assert_eq!(tc.get_reg(1), 0);
    assert_eq!(tc.get_reg(2), 0);
    assert_eq!(tc.get_reg(3), 3);
    assert_eq!(tc.cpu().stats.inst_jump, 1);
}

#[test]
fn jump_to_itself_never_terminates() {
    let mut tc = TestContext::new().load_program(&[InstructionBuilder::new().j(0).build()]);

    let outcome = tc.run(50);

    assert_eq!(outcome, RunOutcome::CycleLimit { cycles: 50 });
    assert!(!tc.cpu().is_drained());
}

#[test]
fn branch_below_address_zero_halts_fetch() {
    // 0: beq $0, $0, -1 → target wraps below 0 and is unmapped
    let program = [InstructionBuilder::new().beq(0, 0, -1).build()];
    let mut tc = TestContext::new().load_program(&program);

    let outcome = tc.run(20);

    assert!(matches!(outcome, RunOutcome::Halted { .. }));
    assert!(!tc.cpu().imem.contains(tc.cpu().pc));
}

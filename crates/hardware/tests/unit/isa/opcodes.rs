//! # Opcode Table Tests

use pipesim_core::isa::Funct;
use pipesim_core::isa::Opcode;
use rstest::rstest;

#[rstest]
#[case(0, Opcode::RType)]
#[case(1, Opcode::Addi)]
#[case(2, Opcode::Ori)]
#[case(3, Opcode::Slti)]
#[case(4, Opcode::Lw)]
#[case(5, Opcode::Sw)]
#[case(6, Opcode::Beq)]
#[case(7, Opcode::Bgtz)]
#[case(8, Opcode::J)]
fn opcode_table(#[case] bits: u8, #[case] opcode: Opcode) {
    assert_eq!(Opcode::from_bits(bits), opcode);
    assert_eq!(opcode.bits(), bits);
}

#[test]
fn unassigned_bits_are_unknown() {
    for bits in 9..32 {
        assert_eq!(Opcode::from_bits(bits), Opcode::Unknown(bits));
        assert_eq!(Opcode::Unknown(bits).bits(), bits);
    }
}

#[test]
fn only_alu_ops_and_loads_write_registers() {
    let writers: Vec<Opcode> = (0..32)
        .map(Opcode::from_bits)
        .filter(|op| op.writes_register())
        .collect();
    assert_eq!(
        writers,
        [
            Opcode::RType,
            Opcode::Addi,
            Opcode::Ori,
            Opcode::Slti,
            Opcode::Lw
        ]
    );
}

#[test]
fn capability_queries() {
    assert!(Opcode::Lw.is_load() && !Opcode::Sw.is_load());
    assert!(Opcode::Sw.is_store());
    assert!(Opcode::Beq.is_branch() && Opcode::Bgtz.is_branch());
    assert!(!Opcode::J.is_branch() && Opcode::J.is_jump());
    assert!(Opcode::RType.is_r_type());
}

#[test]
fn display_uses_mnemonic() {
    assert_eq!(Opcode::Bgtz.to_string(), "bgtz");
    assert_eq!(Opcode::Unknown(9).to_string(), "unknown(0b01001)");
}

#[test]
fn funct_table_round_trips_and_rejects_unassigned() {
    for bits in 0..=8 {
        let f = Funct::from_bits(bits).unwrap();
        assert_eq!(f.bits(), bits);
    }
    assert_eq!(Funct::from_bits(9), None);
    assert_eq!(Funct::from_bits(0x7F), None);
    assert!(Funct::Srl.is_shift() && Funct::Sll.is_shift() && !Funct::Add.is_shift());
}

use pipesim_core::isa::{Funct, Opcode, encode_j_type, encode_r_type};
use pipesim_core::isa::encode_i_type;

pub struct InstructionBuilder {
    opcode: Opcode,
    rs: usize,
    rt: usize,
    rd: usize,
    funct: u8,
    imm: i32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: Opcode::Addi,
            rs: 0,
            rt: 0,
            rd: 0,
            funct: 0,
            imm: 0,
        }
    }

    pub fn opcode(mut self, op: Opcode) -> Self {
        self.opcode = op;
        self
    }

    pub fn rs(mut self, rs: usize) -> Self {
        self.rs = rs;
        self
    }

    pub fn rt(mut self, rt: usize) -> Self {
        self.rt = rt;
        self
    }

    pub fn rd(mut self, rd: usize) -> Self {
        self.rd = rd;
        self
    }

    pub fn funct(mut self, funct: u8) -> Self {
        self.funct = funct;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    // --- Helpers for Common Instructions ---

    fn i_type(mut self, op: Opcode, rt: usize, rs: usize, imm: i32) -> Self {
        self.opcode = op;
        self.rt = rt;
        self.rs = rs;
        self.imm = imm;
        self
    }

    fn r_type(mut self, funct: Funct, rd: usize, rs: usize, rt: usize) -> Self {
        self.opcode = Opcode::RType;
        self.rd = rd;
        self.rs = rs;
        self.rt = rt;
        self.funct = funct.bits();
        self
    }

    /// `$rt = $rs + imm`
    pub fn addi(self, rt: usize, rs: usize, imm: i32) -> Self {
        self.i_type(Opcode::Addi, rt, rs, imm)
    }

    /// `$rt = $rs | imm`
    pub fn ori(self, rt: usize, rs: usize, imm: i32) -> Self {
        self.i_type(Opcode::Ori, rt, rs, imm)
    }

    /// `$rt = ($rs < imm) as 1/0`
    pub fn slti(self, rt: usize, rs: usize, imm: i32) -> Self {
        self.i_type(Opcode::Slti, rt, rs, imm)
    }

    /// `$rt = MEM[$rs + imm]`
    pub fn lw(self, rt: usize, rs: usize, imm: i32) -> Self {
        self.i_type(Opcode::Lw, rt, rs, imm)
    }

    /// `MEM[$rs + imm] = $rt`
    pub fn sw(self, rt: usize, rs: usize, imm: i32) -> Self {
        self.i_type(Opcode::Sw, rt, rs, imm)
    }

    /// Branch `imm` instructions from this one if `$rs == $rt`.
    pub fn beq(self, rs: usize, rt: usize, imm: i32) -> Self {
        self.i_type(Opcode::Beq, rt, rs, imm)
    }

    /// Branch `imm` instructions from this one if `$rs > 0`.
    pub fn bgtz(self, rs: usize, imm: i32) -> Self {
        self.i_type(Opcode::Bgtz, 0, rs, imm)
    }

    /// Jump `offset` instructions forward.
    pub fn j(mut self, offset: i32) -> Self {
        self.opcode = Opcode::J;
        self.imm = offset;
        self
    }

    pub fn add(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.r_type(Funct::Add, rd, rs, rt)
    }

    pub fn sub(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.r_type(Funct::Sub, rd, rs, rt)
    }

    pub fn mul(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.r_type(Funct::Mul, rd, rs, rt)
    }

    pub fn xor(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.r_type(Funct::Xor, rd, rs, rt)
    }

    pub fn and(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.r_type(Funct::And, rd, rs, rt)
    }

    pub fn or(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.r_type(Funct::Or, rd, rs, rt)
    }

    pub fn nor(self, rd: usize, rs: usize, rt: usize) -> Self {
        self.r_type(Funct::Nor, rd, rs, rt)
    }

    pub fn srl(self, rd: usize, rs: usize) -> Self {
        self.r_type(Funct::Srl, rd, rs, 0)
    }

    pub fn sll(self, rd: usize, rs: usize) -> Self {
        self.r_type(Funct::Sll, rd, rs, 0)
    }

    /// `addi $0, $0, 0`
    pub fn nop(self) -> Self {
        self.addi(0, 0, 0)
    }

    pub fn build(self) -> u32 {
        match self.opcode {
            Opcode::RType => encode_r_type(self.opcode, self.rs, self.rt, self.rd, self.funct),
            Opcode::J => encode_j_type(self.opcode, self.imm),
            _ => encode_i_type(self.opcode, self.rs, self.rt, self.imm),
        }
    }
}

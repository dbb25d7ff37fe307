//! Compressed (16-bit) RISC-V instruction decoder
//!
//! Compressed instructions are organized by quadrants based on bits [1:0]:
//! - Quadrant 0 (00): Stack-pointer based loads/stores, wide immediates
//! - Quadrant 1 (01): Control transfers, integer constants and computations
//! - Quadrant 2 (10): Stack-pointer based operations, register moves
//! - Quadrant 3 (11): Reserved for 32-bit instructions
//!
//! Within a quadrant, `funct3` (bits [15:13]) picks the class and the
//! remaining function bits pick the instruction.

pub mod error;
pub mod instruction;

pub use error::DecodeError;
pub use instruction::Instruction;

use crate::target::{Extension, Target};

/// Compressed instructions can be identified by checking that the
/// last two bits in the instruction are not `0b11`
#[inline(always)]
pub fn is_compressed(bits: u16) -> bool {
    (bits & 0b11) != 0b11
}

/// Decode a 16-bit compressed RISC-V instruction
///
/// The all-zero halfword is the defined illegal instruction and fails with
/// [`DecodeError::Illegal`].
pub fn decode_compressed_instruction(
    bits: u16,
    target: &Target,
) -> Result<Instruction, DecodeError> {
    if bits == 0 {
        return Err(DecodeError::Illegal);
    }

    let h = Halfword(bits);
    let rv64 = target.supports_extension(Extension::RV64I);

    match (h.quadrant(), h.funct3()) {
        // Quadrant 0
        (0, 0b000) => match h.ciw_imm() {
            0 => Err(DecodeError::Reserved),
            imm => Ok(Instruction::C_ADDI4SPN { rd: h.rd_prime(), imm }),
        },
        (0, 0b010) => Ok(Instruction::C_LW { rd: h.rd_prime(), rs1: h.rs1_prime(), offset: h.cl_word_offset() }),
        (0, 0b011) if rv64 => Ok(Instruction::C_LD { rd: h.rd_prime(), rs1: h.rs1_prime(), offset: h.cl_double_offset() }),
        (0, 0b110) => Ok(Instruction::C_SW { rs1: h.rs1_prime(), rs2: h.rd_prime(), offset: h.cl_word_offset() }),
        (0, 0b111) if rv64 => Ok(Instruction::C_SD { rs1: h.rs1_prime(), rs2: h.rd_prime(), offset: h.cl_double_offset() }),
        (0, 0b011 | 0b111) => Err(DecodeError::UnsupportedOnTarget),

        // Quadrant 1
        (1, 0b000) if h.rd() == 0 => Ok(Instruction::C_NOP),
        (1, 0b000) => Ok(Instruction::C_ADDI { rd: h.rd(), imm: h.ci_imm() }),
        (1, 0b001) if rv64 => match h.rd() {
            0 => Err(DecodeError::Reserved),
            rd => Ok(Instruction::C_ADDIW { rd, imm: h.ci_imm() }),
        },
        (1, 0b001) => Ok(Instruction::C_JAL { offset: h.cj_offset() }),
        (1, 0b010) => Ok(Instruction::C_LI { rd: h.rd(), imm: h.ci_imm() }),
        (1, 0b011) => decode_lui_addi16sp(h),
        (1, 0b100) => decode_misc_alu(h, rv64),
        (1, 0b101) => Ok(Instruction::C_J { offset: h.cj_offset() }),
        (1, 0b110) => Ok(Instruction::C_BEQZ { rs1: h.rs1_prime(), offset: h.cb_offset() }),
        (1, 0b111) => Ok(Instruction::C_BNEZ { rs1: h.rs1_prime(), offset: h.cb_offset() }),

        // Quadrant 2
        (2, 0b000) => Ok(Instruction::C_SLLI { rd: h.rd(), shamt: h.shamt(rv64)? }),
        (2, 0b010) => match h.rd() {
            0 => Err(DecodeError::Reserved),
            rd => Ok(Instruction::C_LWSP { rd, offset: h.lwsp_offset() }),
        },
        (2, 0b011) if rv64 => match h.rd() {
            0 => Err(DecodeError::Reserved),
            rd => Ok(Instruction::C_LDSP { rd, offset: h.ldsp_offset() }),
        },
        (2, 0b100) => decode_register_ops(h),
        (2, 0b110) => Ok(Instruction::C_SWSP { rs2: h.rs2(), offset: h.swsp_offset() }),
        (2, 0b111) if rv64 => Ok(Instruction::C_SDSP { rs2: h.rs2(), offset: h.sdsp_offset() }),
        (2, 0b011 | 0b111) => Err(DecodeError::UnsupportedOnTarget),

        (3, _) => Err(DecodeError::NotCompressed),
        // Floating point loads/stores and the reserved quadrant 0 slot
        _ => Err(DecodeError::InvalidInstruction),
    }
}

/// `funct3 = 011` in quadrant 1: `c.addi16sp` when rd is sp, otherwise `c.lui`
fn decode_lui_addi16sp(h: Halfword) -> Result<Instruction, DecodeError> {
    match h.rd() {
        0 => Err(DecodeError::Reserved),
        2 => match h.addi16sp_imm() {
            0 => Err(DecodeError::Reserved),
            imm => Ok(Instruction::C_ADDI16SP { imm }),
        },
        rd => match h.lui_imm() {
            0 => Err(DecodeError::Reserved),
            imm => Ok(Instruction::C_LUI { rd, imm }),
        },
    }
}

/// `funct3 = 100` in quadrant 1: shifts, `c.andi` and the CA arithmetic group
fn decode_misc_alu(h: Halfword, rv64: bool) -> Result<Instruction, DecodeError> {
    let rd = h.rs1_prime();
    let rs2 = h.rd_prime();
    match (h.bits(10, 2), h.bits(12, 1), h.bits(5, 2)) {
        (0b00, _, _) => Ok(Instruction::C_SRLI { rd, shamt: h.shamt(rv64)? }),
        (0b01, _, _) => Ok(Instruction::C_SRAI { rd, shamt: h.shamt(rv64)? }),
        (0b10, _, _) => Ok(Instruction::C_ANDI { rd, imm: h.ci_imm() }),
        (0b11, 0, 0b00) => Ok(Instruction::C_SUB { rd, rs2 }),
        (0b11, 0, 0b01) => Ok(Instruction::C_XOR { rd, rs2 }),
        (0b11, 0, 0b10) => Ok(Instruction::C_OR { rd, rs2 }),
        (0b11, 0, 0b11) => Ok(Instruction::C_AND { rd, rs2 }),
        (0b11, 1, 0b00) if rv64 => Ok(Instruction::C_SUBW { rd, rs2 }),
        (0b11, 1, 0b01) if rv64 => Ok(Instruction::C_ADDW { rd, rs2 }),
        (0b11, 1, 0b00 | 0b01) => Err(DecodeError::UnsupportedOnTarget),
        _ => Err(DecodeError::Reserved),
    }
}

/// `funct3 = 100` in quadrant 2: CR format moves, jumps and `c.ebreak`
fn decode_register_ops(h: Halfword) -> Result<Instruction, DecodeError> {
    match (h.bits(12, 1), h.rd(), h.rs2()) {
        (0, 0, 0) => Err(DecodeError::Reserved),
        (0, rs1, 0) => Ok(Instruction::C_JR { rs1 }),
        (0, rd, rs2) => Ok(Instruction::C_MV { rd, rs2 }),
        (_, 0, 0) => Ok(Instruction::C_EBREAK),
        (_, rs1, 0) => Ok(Instruction::C_JALR { rs1 }),
        (_, rd, rs2) => Ok(Instruction::C_ADD { rd, rs2 }),
    }
}

/// Convert compressed register index (3-bit) to full register index (x8-x15)
fn expand_compressed_reg(reg: u8) -> u8 {
    8 + (reg & 0b111)
}

/*
    Compressed formats. rd/rs1/rs2 are full 5-bit register fields,
    rd'/rs1'/rs2' are 3-bit fields naming x8-x15.

    CR-type | funct4 |   rd/rs1   |   rs2    | op |
            | 15-12  |    11-7    |   6-2    | 1-0|

    CI-type | funct3 | imm |   rd/rs1   | imm | op |
            | 15-13  | 12  |    11-7    | 6-2 | 1-0|

    CSS-type| funct3 |     imm     |   rs2    | op |
            | 15-13  |    12-7     |   6-2    | 1-0|

    CIW-type| funct3 |     imm      | rd' | op |
            | 15-13  |     12-5     | 4-2 | 1-0|

    CL-type | funct3 | imm | rs1' | imm | rd' | op |
            | 15-13  |12-10| 9-7  | 6-5 | 4-2 | 1-0|

    CS-type | funct3 | imm | rs1' | imm | rs2'| op |
            | 15-13  |12-10| 9-7  | 6-5 | 4-2 | 1-0|

    CA-type | funct6 | rd'/rs1' | funct2 | rs2'| op |
            | 15-10  |   9-7    |  6-5   | 4-2 | 1-0|

    CB-type | funct3 | off | rs1' |    offset    | op |
            | 15-13  | 12  | 9-7  |   6-2        | 1-0|

    CJ-type | funct3 |        jump target        | op |
            | 15-13  |         12-2              | 1-0|
*/

/// Field accessors over a compressed halfword
#[derive(Debug, Clone, Copy)]
struct Halfword(u16);

impl Halfword {
    /// `len` bits starting at bit `lo`
    fn bits(self, lo: u32, len: u32) -> u16 {
        (self.0 >> lo) & ((1 << len) - 1)
    }

    /// The `len`-bit field at `lo`, placed at bit `at` of the result
    fn place(self, lo: u32, len: u32, at: u32) -> u16 {
        self.bits(lo, len) << at
    }

    fn quadrant(self) -> u8 {
        self.bits(0, 2) as u8
    }

    fn funct3(self) -> u8 {
        self.bits(13, 3) as u8
    }

    fn rd(self) -> u8 {
        self.bits(7, 5) as u8
    }

    fn rs2(self) -> u8 {
        self.bits(2, 5) as u8
    }

    /// rd' (CL/CIW) and rs2' (CS/CA) share bits [4:2]
    fn rd_prime(self) -> u8 {
        expand_compressed_reg(self.bits(2, 3) as u8)
    }

    fn rs1_prime(self) -> u8 {
        expand_compressed_reg(self.bits(7, 3) as u8)
    }

    /// Sign-extended 6-bit CI immediate, imm[5] = bit 12, imm[4:0] = bits [6:2]
    fn ci_imm(self) -> i8 {
        let imm = (self.place(12, 1, 5) | self.bits(2, 5)) as i8;
        (imm << 2) >> 2
    }

    /// CI shift amount; RV32 reserves shamt[5]
    fn shamt(self, rv64: bool) -> Result<u8, DecodeError> {
        let shamt = (self.place(12, 1, 5) | self.bits(2, 5)) as u8;
        if !rv64 && shamt & 0b10_0000 != 0 {
            return Err(DecodeError::Reserved);
        }
        Ok(shamt)
    }

    /// nzuimm[5:4|9:6|2|3] from bits [12:5], always a multiple of 4
    fn ciw_imm(self) -> u16 {
        self.place(11, 2, 4) | self.place(7, 4, 6) | self.place(6, 1, 2) | self.place(5, 1, 3)
    }

    /// uimm[5:3] = bits [12:10], uimm[2] = bit 6, uimm[6] = bit 5
    fn cl_word_offset(self) -> u8 {
        (self.place(10, 3, 3) | self.place(6, 1, 2) | self.place(5, 1, 6)) as u8
    }

    /// uimm[5:3] = bits [12:10], uimm[7:6] = bits [6:5]
    fn cl_double_offset(self) -> u8 {
        (self.place(10, 3, 3) | self.place(5, 2, 6)) as u8
    }

    /// uimm[5] = bit 12, uimm[4:2|7:6] = bits [6:2]
    fn lwsp_offset(self) -> u8 {
        (self.place(12, 1, 5) | self.place(4, 3, 2) | self.place(2, 2, 6)) as u8
    }

    /// uimm[5] = bit 12, uimm[4:3|8:6] = bits [6:2]
    fn ldsp_offset(self) -> u16 {
        self.place(12, 1, 5) | self.place(5, 2, 3) | self.place(2, 3, 6)
    }

    /// uimm[5:2|7:6] = bits [12:7]
    fn swsp_offset(self) -> u8 {
        (self.place(9, 4, 2) | self.place(7, 2, 6)) as u8
    }

    /// uimm[5:3|8:6] = bits [12:7]
    fn sdsp_offset(self) -> u16 {
        self.place(10, 3, 3) | self.place(7, 3, 6)
    }

    /// Sign-extended nzimm[9|4|6|8:7|5] from bits 12 and [6:2]
    fn addi16sp_imm(self) -> i16 {
        let imm = self.place(12, 1, 9)
            | self.place(6, 1, 4)
            | self.place(5, 1, 6)
            | self.place(3, 2, 7)
            | self.place(2, 1, 5);
        ((imm as i16) << 6) >> 6
    }

    /// nzimm[17:12] sign-extended, returned as the 20-bit `lui` immediate
    fn lui_imm(self) -> i32 {
        i32::from(self.ci_imm()) & 0xf_ffff
    }

    /// Sign-extended offset[11|4|9:8|10|6|7|3:1|5] from bits [12:2]
    fn cj_offset(self) -> i16 {
        let offset = self.place(12, 1, 11)
            | self.place(11, 1, 4)
            | self.place(9, 2, 8)
            | self.place(8, 1, 10)
            | self.place(7, 1, 6)
            | self.place(6, 1, 7)
            | self.place(3, 3, 1)
            | self.place(2, 1, 5);
        ((offset as i16) << 4) >> 4
    }

    /// Sign-extended offset[8|4:3] from bits [12:10] and [7:6|2:1|5] from bits [6:2]
    fn cb_offset(self) -> i16 {
        let offset = self.place(12, 1, 8)
            | self.place(10, 2, 3)
            | self.place(5, 2, 6)
            | self.place(3, 2, 1)
            | self.place(2, 1, 5);
        ((offset as i16) << 7) >> 7
    }
}

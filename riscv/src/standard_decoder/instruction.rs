//! Standard (32-bit) RISC-V instructions
//!
//! One variant per instruction class. Operand fields hold register indices
//! and already sign-extended immediates; `Display` renders the canonical
//! assembly text using ABI register names.
use std::fmt;

use crate::{registers::abi_name, standard_decoder::opcode::Opcode};

/// RISC-V standard instructions (RV32I/RV64I, M, A, Zicsr, Zifencei)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
pub enum Instruction {
    // === Loads ===
    LB { rd: u8, rs1: u8, offset: i32 },
    LH { rd: u8, rs1: u8, offset: i32 },
    LW { rd: u8, rs1: u8, offset: i32 },
    LD { rd: u8, rs1: u8, offset: i32 },
    LBU { rd: u8, rs1: u8, offset: i32 },
    LHU { rd: u8, rs1: u8, offset: i32 },
    LWU { rd: u8, rs1: u8, offset: i32 },

    // === Stores ===
    SB { rs1: u8, rs2: u8, offset: i32 },
    SH { rs1: u8, rs2: u8, offset: i32 },
    SW { rs1: u8, rs2: u8, offset: i32 },
    SD { rs1: u8, rs2: u8, offset: i32 },

    // === Immediate arithmetic ===
    ADDI { rd: u8, rs1: u8, imm: i32 },
    SLTI { rd: u8, rs1: u8, imm: i32 },
    SLTIU { rd: u8, rs1: u8, imm: i32 },
    XORI { rd: u8, rs1: u8, imm: i32 },
    ORI { rd: u8, rs1: u8, imm: i32 },
    ANDI { rd: u8, rs1: u8, imm: i32 },
    SLLI { rd: u8, rs1: u8, shamt: u8 },
    SRLI { rd: u8, rs1: u8, shamt: u8 },
    SRAI { rd: u8, rs1: u8, shamt: u8 },

    // === Register arithmetic ===
    ADD { rd: u8, rs1: u8, rs2: u8 },
    SUB { rd: u8, rs1: u8, rs2: u8 },
    SLL { rd: u8, rs1: u8, rs2: u8 },
    SLT { rd: u8, rs1: u8, rs2: u8 },
    SLTU { rd: u8, rs1: u8, rs2: u8 },
    XOR { rd: u8, rs1: u8, rs2: u8 },
    SRL { rd: u8, rs1: u8, rs2: u8 },
    SRA { rd: u8, rs1: u8, rs2: u8 },
    OR { rd: u8, rs1: u8, rs2: u8 },
    AND { rd: u8, rs1: u8, rs2: u8 },

    // === M extension ===
    MUL { rd: u8, rs1: u8, rs2: u8 },
    MULH { rd: u8, rs1: u8, rs2: u8 },
    MULHSU { rd: u8, rs1: u8, rs2: u8 },
    MULHU { rd: u8, rs1: u8, rs2: u8 },
    DIV { rd: u8, rs1: u8, rs2: u8 },
    DIVU { rd: u8, rs1: u8, rs2: u8 },
    REM { rd: u8, rs1: u8, rs2: u8 },
    REMU { rd: u8, rs1: u8, rs2: u8 },

    // === Control transfer ===
    BEQ { rs1: u8, rs2: u8, offset: i32 },
    BNE { rs1: u8, rs2: u8, offset: i32 },
    BLT { rs1: u8, rs2: u8, offset: i32 },
    BGE { rs1: u8, rs2: u8, offset: i32 },
    BLTU { rs1: u8, rs2: u8, offset: i32 },
    BGEU { rs1: u8, rs2: u8, offset: i32 },
    JAL { rd: u8, offset: i32 },
    JALR { rd: u8, rs1: u8, offset: i32 },

    // === Upper immediates ===
    /// `imm` is the 20-bit upper immediate, not shifted
    LUI { rd: u8, imm: i32 },
    /// `imm` is the 20-bit upper immediate, not shifted
    AUIPC { rd: u8, imm: i32 },

    // === System ===
    ECALL,
    EBREAK,
    CSRRW { rd: u8, rs1: u8, csr: u16 },
    CSRRS { rd: u8, rs1: u8, csr: u16 },
    CSRRC { rd: u8, rs1: u8, csr: u16 },
    CSRRWI { rd: u8, uimm: u8, csr: u16 },
    CSRRSI { rd: u8, uimm: u8, csr: u16 },
    CSRRCI { rd: u8, uimm: u8, csr: u16 },

    // === Memory ordering ===
    FENCE { pred: u8, succ: u8 },
    FENCE_I,

    // === RV64I word operations ===
    ADDIW { rd: u8, rs1: u8, imm: i32 },
    SLLIW { rd: u8, rs1: u8, shamt: u8 },
    SRLIW { rd: u8, rs1: u8, shamt: u8 },
    SRAIW { rd: u8, rs1: u8, shamt: u8 },
    ADDW { rd: u8, rs1: u8, rs2: u8 },
    SUBW { rd: u8, rs1: u8, rs2: u8 },
    SLLW { rd: u8, rs1: u8, rs2: u8 },
    SRLW { rd: u8, rs1: u8, rs2: u8 },
    SRAW { rd: u8, rs1: u8, rs2: u8 },
    MULW { rd: u8, rs1: u8, rs2: u8 },
    DIVW { rd: u8, rs1: u8, rs2: u8 },
    DIVUW { rd: u8, rs1: u8, rs2: u8 },
    REMW { rd: u8, rs1: u8, rs2: u8 },
    REMUW { rd: u8, rs1: u8, rs2: u8 },

    // === A extension, word ===
    LR_W { rd: u8, rs1: u8, aq: bool, rl: bool },
    SC_W { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOSWAP_W { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOADD_W { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOXOR_W { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOAND_W { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOOR_W { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOMIN_W { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOMAX_W { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOMINU_W { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOMAXU_W { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },

    // === A extension, doubleword ===
    LR_D { rd: u8, rs1: u8, aq: bool, rl: bool },
    SC_D { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOSWAP_D { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOADD_D { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOXOR_D { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOAND_D { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOOR_D { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOMIN_D { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOMAX_D { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOMINU_D { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
    AMOMAXU_D { rd: u8, rs1: u8, rs2: u8, aq: bool, rl: bool },
}

impl Instruction {
    /// Returns the size of the instruction in bytes
    pub const fn size() -> usize {
        4
    }

    /// Get the mnemonic string for this instruction
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::LB { .. } => "lb",
            Instruction::LH { .. } => "lh",
            Instruction::LW { .. } => "lw",
            Instruction::LD { .. } => "ld",
            Instruction::LBU { .. } => "lbu",
            Instruction::LHU { .. } => "lhu",
            Instruction::LWU { .. } => "lwu",
            Instruction::SB { .. } => "sb",
            Instruction::SH { .. } => "sh",
            Instruction::SW { .. } => "sw",
            Instruction::SD { .. } => "sd",
            Instruction::ADDI { .. } => "addi",
            Instruction::SLTI { .. } => "slti",
            Instruction::SLTIU { .. } => "sltiu",
            Instruction::XORI { .. } => "xori",
            Instruction::ORI { .. } => "ori",
            Instruction::ANDI { .. } => "andi",
            Instruction::SLLI { .. } => "slli",
            Instruction::SRLI { .. } => "srli",
            Instruction::SRAI { .. } => "srai",
            Instruction::ADD { .. } => "add",
            Instruction::SUB { .. } => "sub",
            Instruction::SLL { .. } => "sll",
            Instruction::SLT { .. } => "slt",
            Instruction::SLTU { .. } => "sltu",
            Instruction::XOR { .. } => "xor",
            Instruction::SRL { .. } => "srl",
            Instruction::SRA { .. } => "sra",
            Instruction::OR { .. } => "or",
            Instruction::AND { .. } => "and",
            Instruction::MUL { .. } => "mul",
            Instruction::MULH { .. } => "mulh",
            Instruction::MULHSU { .. } => "mulhsu",
            Instruction::MULHU { .. } => "mulhu",
            Instruction::DIV { .. } => "div",
            Instruction::DIVU { .. } => "divu",
            Instruction::REM { .. } => "rem",
            Instruction::REMU { .. } => "remu",
            Instruction::BEQ { .. } => "beq",
            Instruction::BNE { .. } => "bne",
            Instruction::BLT { .. } => "blt",
            Instruction::BGE { .. } => "bge",
            Instruction::BLTU { .. } => "bltu",
            Instruction::BGEU { .. } => "bgeu",
            Instruction::JAL { .. } => "jal",
            Instruction::JALR { .. } => "jalr",
            Instruction::LUI { .. } => "lui",
            Instruction::AUIPC { .. } => "auipc",
            Instruction::ECALL => "ecall",
            Instruction::EBREAK => "ebreak",
            Instruction::CSRRW { .. } => "csrrw",
            Instruction::CSRRS { .. } => "csrrs",
            Instruction::CSRRC { .. } => "csrrc",
            Instruction::CSRRWI { .. } => "csrrwi",
            Instruction::CSRRSI { .. } => "csrrsi",
            Instruction::CSRRCI { .. } => "csrrci",
            Instruction::FENCE { .. } => "fence",
            Instruction::FENCE_I => "fence.i",
            Instruction::ADDIW { .. } => "addiw",
            Instruction::SLLIW { .. } => "slliw",
            Instruction::SRLIW { .. } => "srliw",
            Instruction::SRAIW { .. } => "sraiw",
            Instruction::ADDW { .. } => "addw",
            Instruction::SUBW { .. } => "subw",
            Instruction::SLLW { .. } => "sllw",
            Instruction::SRLW { .. } => "srlw",
            Instruction::SRAW { .. } => "sraw",
            Instruction::MULW { .. } => "mulw",
            Instruction::DIVW { .. } => "divw",
            Instruction::DIVUW { .. } => "divuw",
            Instruction::REMW { .. } => "remw",
            Instruction::REMUW { .. } => "remuw",
            Instruction::LR_W { .. } => "lr.w",
            Instruction::SC_W { .. } => "sc.w",
            Instruction::AMOSWAP_W { .. } => "amoswap.w",
            Instruction::AMOADD_W { .. } => "amoadd.w",
            Instruction::AMOXOR_W { .. } => "amoxor.w",
            Instruction::AMOAND_W { .. } => "amoand.w",
            Instruction::AMOOR_W { .. } => "amoor.w",
            Instruction::AMOMIN_W { .. } => "amomin.w",
            Instruction::AMOMAX_W { .. } => "amomax.w",
            Instruction::AMOMINU_W { .. } => "amominu.w",
            Instruction::AMOMAXU_W { .. } => "amomaxu.w",
            Instruction::LR_D { .. } => "lr.d",
            Instruction::SC_D { .. } => "sc.d",
            Instruction::AMOSWAP_D { .. } => "amoswap.d",
            Instruction::AMOADD_D { .. } => "amoadd.d",
            Instruction::AMOXOR_D { .. } => "amoxor.d",
            Instruction::AMOAND_D { .. } => "amoand.d",
            Instruction::AMOOR_D { .. } => "amoor.d",
            Instruction::AMOMIN_D { .. } => "amomin.d",
            Instruction::AMOMAX_D { .. } => "amomax.d",
            Instruction::AMOMINU_D { .. } => "amominu.d",
            Instruction::AMOMAXU_D { .. } => "amomaxu.d",
        }
    }

    /// Major opcode class this instruction is encoded under
    pub fn opcode(&self) -> Opcode {
        use Instruction::*;
        match self {
            LB { .. } | LH { .. } | LW { .. } | LD { .. } | LBU { .. } | LHU { .. }
            | LWU { .. } => Opcode::Load,
            SB { .. } | SH { .. } | SW { .. } | SD { .. } => Opcode::Store,
            ADDI { .. } | SLTI { .. } | SLTIU { .. } | XORI { .. } | ORI { .. } | ANDI { .. }
            | SLLI { .. } | SRLI { .. } | SRAI { .. } => Opcode::OpImm,
            ADD { .. } | SUB { .. } | SLL { .. } | SLT { .. } | SLTU { .. } | XOR { .. }
            | SRL { .. } | SRA { .. } | OR { .. } | AND { .. } | MUL { .. } | MULH { .. }
            | MULHSU { .. } | MULHU { .. } | DIV { .. } | DIVU { .. } | REM { .. }
            | REMU { .. } => Opcode::Op,
            BEQ { .. } | BNE { .. } | BLT { .. } | BGE { .. } | BLTU { .. } | BGEU { .. } => {
                Opcode::Branch
            }
            JAL { .. } => Opcode::Jal,
            JALR { .. } => Opcode::Jalr,
            LUI { .. } => Opcode::Lui,
            AUIPC { .. } => Opcode::Auipc,
            ECALL | EBREAK | CSRRW { .. } | CSRRS { .. } | CSRRC { .. } | CSRRWI { .. }
            | CSRRSI { .. } | CSRRCI { .. } => Opcode::System,
            FENCE { .. } | FENCE_I => Opcode::MiscMem,
            ADDIW { .. } | SLLIW { .. } | SRLIW { .. } | SRAIW { .. } => Opcode::OpImm32,
            ADDW { .. } | SUBW { .. } | SLLW { .. } | SRLW { .. } | SRAW { .. } | MULW { .. }
            | DIVW { .. } | DIVUW { .. } | REMW { .. } | REMUW { .. } => Opcode::Op32,
            LR_W { .. } | SC_W { .. } | AMOSWAP_W { .. } | AMOADD_W { .. } | AMOXOR_W { .. }
            | AMOAND_W { .. } | AMOOR_W { .. } | AMOMIN_W { .. } | AMOMAX_W { .. }
            | AMOMINU_W { .. } | AMOMAXU_W { .. } | LR_D { .. } | SC_D { .. }
            | AMOSWAP_D { .. } | AMOADD_D { .. } | AMOXOR_D { .. } | AMOAND_D { .. }
            | AMOOR_D { .. } | AMOMIN_D { .. } | AMOMAX_D { .. } | AMOMINU_D { .. }
            | AMOMAXU_D { .. } => Opcode::Amo,
        }
    }
}

/// Renders the `pred`/`succ` sets of a fence as `iorw` letters
fn fence_set(bits: u8) -> String {
    let set: String = [(0b1000u8, 'i'), (0b0100, 'o'), (0b0010, 'r'), (0b0001, 'w')]
        .iter()
        .filter(|(mask, _)| bits & *mask != 0)
        .map(|(_, c)| *c)
        .collect();
    if set.is_empty() {
        "0".to_string()
    } else {
        set
    }
}

/// Acquire/release ordering suffix for atomics
fn ordering_suffix(aq: bool, rl: bool) -> &'static str {
    match (aq, rl) {
        (false, false) => "",
        (true, false) => ".aq",
        (false, true) => ".rl",
        (true, true) => ".aqrl",
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;
        let mnemonic = self.mnemonic();
        match *self {
            LB { rd, rs1, offset }
            | LH { rd, rs1, offset }
            | LW { rd, rs1, offset }
            | LD { rd, rs1, offset }
            | LBU { rd, rs1, offset }
            | LHU { rd, rs1, offset }
            | LWU { rd, rs1, offset }
            | JALR { rd, rs1, offset } => {
                write!(f, "{mnemonic} {}, {offset}({})", abi_name(rd), abi_name(rs1))
            }
            SB { rs1, rs2, offset }
            | SH { rs1, rs2, offset }
            | SW { rs1, rs2, offset }
            | SD { rs1, rs2, offset } => {
                write!(f, "{mnemonic} {}, {offset}({})", abi_name(rs2), abi_name(rs1))
            }
            ADDI { rd, rs1, imm }
            | SLTI { rd, rs1, imm }
            | SLTIU { rd, rs1, imm }
            | XORI { rd, rs1, imm }
            | ORI { rd, rs1, imm }
            | ANDI { rd, rs1, imm }
            | ADDIW { rd, rs1, imm } => {
                write!(f, "{mnemonic} {}, {}, {imm}", abi_name(rd), abi_name(rs1))
            }
            SLLI { rd, rs1, shamt }
            | SRLI { rd, rs1, shamt }
            | SRAI { rd, rs1, shamt }
            | SLLIW { rd, rs1, shamt }
            | SRLIW { rd, rs1, shamt }
            | SRAIW { rd, rs1, shamt } => {
                write!(f, "{mnemonic} {}, {}, {shamt}", abi_name(rd), abi_name(rs1))
            }
            ADD { rd, rs1, rs2 }
            | SUB { rd, rs1, rs2 }
            | SLL { rd, rs1, rs2 }
            | SLT { rd, rs1, rs2 }
            | SLTU { rd, rs1, rs2 }
            | XOR { rd, rs1, rs2 }
            | SRL { rd, rs1, rs2 }
            | SRA { rd, rs1, rs2 }
            | OR { rd, rs1, rs2 }
            | AND { rd, rs1, rs2 }
            | MUL { rd, rs1, rs2 }
            | MULH { rd, rs1, rs2 }
            | MULHSU { rd, rs1, rs2 }
            | MULHU { rd, rs1, rs2 }
            | DIV { rd, rs1, rs2 }
            | DIVU { rd, rs1, rs2 }
            | REM { rd, rs1, rs2 }
            | REMU { rd, rs1, rs2 }
            | ADDW { rd, rs1, rs2 }
            | SUBW { rd, rs1, rs2 }
            | SLLW { rd, rs1, rs2 }
            | SRLW { rd, rs1, rs2 }
            | SRAW { rd, rs1, rs2 }
            | MULW { rd, rs1, rs2 }
            | DIVW { rd, rs1, rs2 }
            | DIVUW { rd, rs1, rs2 }
            | REMW { rd, rs1, rs2 }
            | REMUW { rd, rs1, rs2 } => {
                write!(f, "{mnemonic} {}, {}, {}", abi_name(rd), abi_name(rs1), abi_name(rs2))
            }
            BEQ { rs1, rs2, offset }
            | BNE { rs1, rs2, offset }
            | BLT { rs1, rs2, offset }
            | BGE { rs1, rs2, offset }
            | BLTU { rs1, rs2, offset }
            | BGEU { rs1, rs2, offset } => {
                write!(f, "{mnemonic} {}, {}, {offset}", abi_name(rs1), abi_name(rs2))
            }
            JAL { rd, offset } => write!(f, "{mnemonic} {}, {offset}", abi_name(rd)),
            LUI { rd, imm } | AUIPC { rd, imm } => {
                write!(f, "{mnemonic} {}, 0x{:x}", abi_name(rd), imm & 0xf_ffff)
            }
            ECALL | EBREAK | FENCE_I => write!(f, "{mnemonic}"),
            CSRRW { rd, rs1, csr } | CSRRS { rd, rs1, csr } | CSRRC { rd, rs1, csr } => {
                write!(f, "{mnemonic} {}, 0x{csr:03x}, {}", abi_name(rd), abi_name(rs1))
            }
            CSRRWI { rd, uimm, csr } | CSRRSI { rd, uimm, csr } | CSRRCI { rd, uimm, csr } => {
                write!(f, "{mnemonic} {}, 0x{csr:03x}, {uimm}", abi_name(rd))
            }
            FENCE { pred, succ } => {
                write!(f, "{mnemonic} {}, {}", fence_set(pred), fence_set(succ))
            }
            LR_W { rd, rs1, aq, rl } | LR_D { rd, rs1, aq, rl } => {
                write!(f, "{mnemonic}{} {}, ({})", ordering_suffix(aq, rl), abi_name(rd), abi_name(rs1))
            }
            SC_W { rd, rs1, rs2, aq, rl }
            | SC_D { rd, rs1, rs2, aq, rl }
            | AMOSWAP_W { rd, rs1, rs2, aq, rl }
            | AMOADD_W { rd, rs1, rs2, aq, rl }
            | AMOXOR_W { rd, rs1, rs2, aq, rl }
            | AMOAND_W { rd, rs1, rs2, aq, rl }
            | AMOOR_W { rd, rs1, rs2, aq, rl }
            | AMOMIN_W { rd, rs1, rs2, aq, rl }
            | AMOMAX_W { rd, rs1, rs2, aq, rl }
            | AMOMINU_W { rd, rs1, rs2, aq, rl }
            | AMOMAXU_W { rd, rs1, rs2, aq, rl }
            | AMOSWAP_D { rd, rs1, rs2, aq, rl }
            | AMOADD_D { rd, rs1, rs2, aq, rl }
            | AMOXOR_D { rd, rs1, rs2, aq, rl }
            | AMOAND_D { rd, rs1, rs2, aq, rl }
            | AMOOR_D { rd, rs1, rs2, aq, rl }
            | AMOMIN_D { rd, rs1, rs2, aq, rl }
            | AMOMAX_D { rd, rs1, rs2, aq, rl }
            | AMOMINU_D { rd, rs1, rs2, aq, rl }
            | AMOMAXU_D { rd, rs1, rs2, aq, rl } => write!(
                f,
                "{mnemonic}{} {}, {}, ({})",
                ordering_suffix(aq, rl),
                abi_name(rd),
                abi_name(rs2),
                abi_name(rs1)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        assert_eq!(Instruction::ADDI { rd: 0, rs1: 0, imm: 0 }.to_string(), "addi zero, zero, 0");
        assert_eq!(Instruction::LW { rd: 10, rs1: 2, offset: -8 }.to_string(), "lw a0, -8(sp)");
        assert_eq!(Instruction::SW { rs1: 2, rs2: 1, offset: 12 }.to_string(), "sw ra, 12(sp)");
        assert_eq!(Instruction::ADD { rd: 3, rs1: 1, rs2: 2 }.to_string(), "add gp, ra, sp");
        assert_eq!(Instruction::LUI { rd: 10, imm: 0x12345 }.to_string(), "lui a0, 0x12345");
        assert_eq!(Instruction::JALR { rd: 0, rs1: 1, offset: 0 }.to_string(), "jalr zero, 0(ra)");
        assert_eq!(Instruction::ECALL.to_string(), "ecall");
    }

    #[test]
    fn test_display_fence_and_atomics() {
        assert_eq!(Instruction::FENCE { pred: 0b1111, succ: 0b0011 }.to_string(), "fence iorw, rw");
        assert_eq!(
            Instruction::AMOADD_W { rd: 10, rs1: 11, rs2: 12, aq: true, rl: true }.to_string(),
            "amoadd.w.aqrl a0, a2, (a1)"
        );
        assert_eq!(
            Instruction::LR_W { rd: 10, rs1: 11, aq: true, rl: false }.to_string(),
            "lr.w.aq a0, (a1)"
        );
    }

    #[test]
    fn test_opcode_classes() {
        assert_eq!(Instruction::ADDI { rd: 0, rs1: 0, imm: 0 }.opcode(), Opcode::OpImm);
        assert_eq!(Instruction::MUL { rd: 1, rs1: 1, rs2: 1 }.opcode(), Opcode::Op);
        assert_eq!(Instruction::FENCE_I.opcode(), Opcode::MiscMem);
        assert_eq!(Instruction::SC_D { rd: 1, rs1: 2, rs2: 3, aq: false, rl: false }.opcode(), Opcode::Amo);
    }
}

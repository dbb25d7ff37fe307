//! Compressed (16-bit) RISC-V instructions
//!
//! Every compressed instruction is shorthand for a standard one. The
//! `From` conversion gives that expansion; `Display` keeps the `c.` form so
//! a disassembly shows what is actually in memory.
use std::fmt;

use crate::{registers::abi_name, standard_decoder::Instruction as StandardInstruction};

/// Stack pointer, the implicit base register of the `*SP` forms
const SP: u8 = 2;
/// Link register written by `c.jal` and `c.jalr`
const RA: u8 = 1;

/// RISC-V compressed (16-bit) instructions (RVC extension)
///
/// Register fields always hold full indices; the 3-bit `rd'`/`rs1'`/`rs2'`
/// encodings are already expanded to x8-x15.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Instruction {
    // CIW (wide immediate)
    C_ADDI4SPN { rd: u8, imm: u16 },

    // CL (loads)
    C_LW { rd: u8, rs1: u8, offset: u8 },
    C_LD { rd: u8, rs1: u8, offset: u8 },

    // CS (stores) and CSS (stack stores)
    C_SW { rs1: u8, rs2: u8, offset: u8 },
    C_SD { rs1: u8, rs2: u8, offset: u8 },
    C_SWSP { rs2: u8, offset: u8 },
    C_SDSP { rs2: u8, offset: u16 },

    // CI (immediates, shifts, stack loads)
    C_NOP,
    C_ADDI { rd: u8, imm: i8 },
    C_ADDIW { rd: u8, imm: i8 },
    C_LI { rd: u8, imm: i8 },
    C_ADDI16SP { imm: i16 },
    /// `imm` is the 20-bit upper immediate of the expanded `lui`, not shifted
    C_LUI { rd: u8, imm: i32 },
    C_SRLI { rd: u8, shamt: u8 },
    C_SRAI { rd: u8, shamt: u8 },
    C_ANDI { rd: u8, imm: i8 },
    C_SLLI { rd: u8, shamt: u8 },
    C_LWSP { rd: u8, offset: u8 },
    C_LDSP { rd: u8, offset: u16 },

    // CA (arithmetic on compressed registers)
    C_SUB { rd: u8, rs2: u8 },
    C_XOR { rd: u8, rs2: u8 },
    C_OR { rd: u8, rs2: u8 },
    C_AND { rd: u8, rs2: u8 },
    C_SUBW { rd: u8, rs2: u8 },
    C_ADDW { rd: u8, rs2: u8 },

    // CB (branches)
    C_BEQZ { rs1: u8, offset: i16 },
    C_BNEZ { rs1: u8, offset: i16 },

    // CJ (jumps)
    C_J { offset: i16 },
    /// RV32 only, shares its encoding with `c.addiw` on RV64
    C_JAL { offset: i16 },

    // CR (register moves and indirect jumps)
    C_JR { rs1: u8 },
    C_MV { rd: u8, rs2: u8 },
    C_EBREAK,
    C_JALR { rs1: u8 },
    C_ADD { rd: u8, rs2: u8 },
}

impl Instruction {
    /// Returns the size of the instruction in bytes
    pub const fn size() -> usize {
        2
    }

    /// Get the mnemonic string for this compressed instruction
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::C_ADDI4SPN { .. } => "c.addi4spn",
            Instruction::C_LW { .. } => "c.lw",
            Instruction::C_LD { .. } => "c.ld",
            Instruction::C_SW { .. } => "c.sw",
            Instruction::C_SD { .. } => "c.sd",
            Instruction::C_SWSP { .. } => "c.swsp",
            Instruction::C_SDSP { .. } => "c.sdsp",
            Instruction::C_NOP => "c.nop",
            Instruction::C_ADDI { .. } => "c.addi",
            Instruction::C_ADDIW { .. } => "c.addiw",
            Instruction::C_LI { .. } => "c.li",
            Instruction::C_ADDI16SP { .. } => "c.addi16sp",
            Instruction::C_LUI { .. } => "c.lui",
            Instruction::C_SRLI { .. } => "c.srli",
            Instruction::C_SRAI { .. } => "c.srai",
            Instruction::C_ANDI { .. } => "c.andi",
            Instruction::C_SLLI { .. } => "c.slli",
            Instruction::C_LWSP { .. } => "c.lwsp",
            Instruction::C_LDSP { .. } => "c.ldsp",
            Instruction::C_SUB { .. } => "c.sub",
            Instruction::C_XOR { .. } => "c.xor",
            Instruction::C_OR { .. } => "c.or",
            Instruction::C_AND { .. } => "c.and",
            Instruction::C_SUBW { .. } => "c.subw",
            Instruction::C_ADDW { .. } => "c.addw",
            Instruction::C_BEQZ { .. } => "c.beqz",
            Instruction::C_BNEZ { .. } => "c.bnez",
            Instruction::C_J { .. } => "c.j",
            Instruction::C_JAL { .. } => "c.jal",
            Instruction::C_JR { .. } => "c.jr",
            Instruction::C_MV { .. } => "c.mv",
            Instruction::C_EBREAK => "c.ebreak",
            Instruction::C_JALR { .. } => "c.jalr",
            Instruction::C_ADD { .. } => "c.add",
        }
    }
}

impl From<Instruction> for StandardInstruction {
    fn from(value: Instruction) -> Self {
        use Instruction::*;
        match value {
            C_ADDI4SPN { rd, imm } => StandardInstruction::ADDI { rd, rs1: SP, imm: imm.into() },

            C_LW { rd, rs1, offset } => StandardInstruction::LW { rd, rs1, offset: offset.into() },
            C_LD { rd, rs1, offset } => StandardInstruction::LD { rd, rs1, offset: offset.into() },
            C_LWSP { rd, offset } => StandardInstruction::LW { rd, rs1: SP, offset: offset.into() },
            C_LDSP { rd, offset } => StandardInstruction::LD { rd, rs1: SP, offset: offset.into() },

            C_SW { rs1, rs2, offset } => StandardInstruction::SW { rs1, rs2, offset: offset.into() },
            C_SD { rs1, rs2, offset } => StandardInstruction::SD { rs1, rs2, offset: offset.into() },
            C_SWSP { rs2, offset } => StandardInstruction::SW { rs1: SP, rs2, offset: offset.into() },
            C_SDSP { rs2, offset } => StandardInstruction::SD { rs1: SP, rs2, offset: offset.into() },

            C_NOP => StandardInstruction::ADDI { rd: 0, rs1: 0, imm: 0 },
            C_ADDI { rd, imm } => StandardInstruction::ADDI { rd, rs1: rd, imm: imm.into() },
            C_ADDIW { rd, imm } => StandardInstruction::ADDIW { rd, rs1: rd, imm: imm.into() },
            C_LI { rd, imm } => StandardInstruction::ADDI { rd, rs1: 0, imm: imm.into() },
            C_ADDI16SP { imm } => StandardInstruction::ADDI { rd: SP, rs1: SP, imm: imm.into() },
            C_LUI { rd, imm } => StandardInstruction::LUI { rd, imm },

            C_SLLI { rd, shamt } => StandardInstruction::SLLI { rd, rs1: rd, shamt },
            C_SRLI { rd, shamt } => StandardInstruction::SRLI { rd, rs1: rd, shamt },
            C_SRAI { rd, shamt } => StandardInstruction::SRAI { rd, rs1: rd, shamt },
            C_ANDI { rd, imm } => StandardInstruction::ANDI { rd, rs1: rd, imm: imm.into() },

            C_SUB { rd, rs2 } => StandardInstruction::SUB { rd, rs1: rd, rs2 },
            C_XOR { rd, rs2 } => StandardInstruction::XOR { rd, rs1: rd, rs2 },
            C_OR { rd, rs2 } => StandardInstruction::OR { rd, rs1: rd, rs2 },
            C_AND { rd, rs2 } => StandardInstruction::AND { rd, rs1: rd, rs2 },
            C_SUBW { rd, rs2 } => StandardInstruction::SUBW { rd, rs1: rd, rs2 },
            C_ADDW { rd, rs2 } => StandardInstruction::ADDW { rd, rs1: rd, rs2 },

            C_J { offset } => StandardInstruction::JAL { rd: 0, offset: offset.into() },
            C_JAL { offset } => StandardInstruction::JAL { rd: RA, offset: offset.into() },
            C_BEQZ { rs1, offset } => StandardInstruction::BEQ { rs1, rs2: 0, offset: offset.into() },
            C_BNEZ { rs1, offset } => StandardInstruction::BNE { rs1, rs2: 0, offset: offset.into() },
            C_JR { rs1 } => StandardInstruction::JALR { rd: 0, rs1, offset: 0 },
            C_JALR { rs1 } => StandardInstruction::JALR { rd: RA, rs1, offset: 0 },
            C_MV { rd, rs2 } => StandardInstruction::ADD { rd, rs1: 0, rs2 },
            C_ADD { rd, rs2 } => StandardInstruction::ADD { rd, rs1: rd, rs2 },

            C_EBREAK => StandardInstruction::EBREAK,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;
        let mnemonic = self.mnemonic();
        match *self {
            C_NOP | C_EBREAK => write!(f, "{mnemonic}"),
            C_ADDI4SPN { rd, imm } => write!(f, "{mnemonic} {}, sp, {imm}", abi_name(rd)),
            C_LW { rd, rs1, offset } | C_LD { rd, rs1, offset } => {
                write!(f, "{mnemonic} {}, {offset}({})", abi_name(rd), abi_name(rs1))
            }
            C_SW { rs1, rs2, offset } | C_SD { rs1, rs2, offset } => {
                write!(f, "{mnemonic} {}, {offset}({})", abi_name(rs2), abi_name(rs1))
            }
            C_LWSP { rd, offset } => write!(f, "{mnemonic} {}, {offset}(sp)", abi_name(rd)),
            C_LDSP { rd, offset } => write!(f, "{mnemonic} {}, {offset}(sp)", abi_name(rd)),
            C_SWSP { rs2, offset } => write!(f, "{mnemonic} {}, {offset}(sp)", abi_name(rs2)),
            C_SDSP { rs2, offset } => write!(f, "{mnemonic} {}, {offset}(sp)", abi_name(rs2)),
            C_ADDI { rd, imm } | C_ADDIW { rd, imm } | C_LI { rd, imm } | C_ANDI { rd, imm } => {
                write!(f, "{mnemonic} {}, {imm}", abi_name(rd))
            }
            C_ADDI16SP { imm } => write!(f, "{mnemonic} sp, {imm}"),
            C_LUI { rd, imm } => write!(f, "{mnemonic} {}, 0x{:x}", abi_name(rd), imm & 0xf_ffff),
            C_SRLI { rd, shamt } | C_SRAI { rd, shamt } | C_SLLI { rd, shamt } => {
                write!(f, "{mnemonic} {}, {shamt}", abi_name(rd))
            }
            C_SUB { rd, rs2 }
            | C_XOR { rd, rs2 }
            | C_OR { rd, rs2 }
            | C_AND { rd, rs2 }
            | C_SUBW { rd, rs2 }
            | C_ADDW { rd, rs2 }
            | C_MV { rd, rs2 }
            | C_ADD { rd, rs2 } => write!(f, "{mnemonic} {}, {}", abi_name(rd), abi_name(rs2)),
            C_BEQZ { rs1, offset } | C_BNEZ { rs1, offset } => {
                write!(f, "{mnemonic} {}, {offset}", abi_name(rs1))
            }
            C_J { offset } | C_JAL { offset } => write!(f, "{mnemonic} {offset}"),
            C_JR { rs1 } | C_JALR { rs1 } => write!(f, "{mnemonic} {}", abi_name(rs1)),
        }
    }
}

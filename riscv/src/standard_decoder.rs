//! Standard (32-bit uncompressed) RISC-V instruction decoder
//!
//! The catalog is a fixed, ordered table of `(mask, bits, extension, build)`
//! entries. A word matches an entry when `word & mask == bits`; the first
//! matching entry whose extension the [`Target`] enables wins. Entries that are
//! more specific, or only legal on RV64, are declared ahead of the entries they
//! overlap with.
mod error;
mod instruction;
mod opcode;

pub use error::DecodeError;
pub use instruction::Instruction;
pub use opcode::Opcode;

use crate::target::{Extension, Target};

/// Decode a 32-bit standard RISC-V instruction
///
/// Words whose two low bits are not `0b11` have no standard opcode and are
/// rejected with [`DecodeError::UnsupportedInstruction`]. When the only entries
/// matching a word belong to disabled extensions, the first of those extensions
/// is reported.
pub fn decode_standard_instruction(bits: u32, target: &Target) -> Result<Instruction, DecodeError> {
    if Opcode::from_bits((bits & MASK_OPCODE) as u8).is_none() {
        return Err(DecodeError::UnsupportedInstruction);
    }

    let fields = Fields(bits);
    let mut disabled = None;
    for pattern in CATALOG.iter().filter(|pattern| bits & pattern.mask == pattern.bits) {
        if target.supports_extension(pattern.extension) {
            return Ok((pattern.build)(fields));
        }
        disabled.get_or_insert(pattern.extension);
    }

    Err(disabled.map_or(DecodeError::InvalidFormat, DecodeError::UnsupportedExtension))
}

/*
    All 32-bit instructions fit one of six formats. A field always sits at
    the same position when the format has it, so extraction does not need
    to know the format up front.

    R-type | funct7 |  rs2 |  rs1 | funct3 |   rd  | opcode |
           | 31-25  |24-20 |19-15 | 14-12  | 11-7  | 6-0    |

    I-type |   imm[11:0]    |  rs1 | funct3 |   rd  | opcode |
           |   31-20        |19-15 | 14-12  | 11-7  | 6-0    |

    S-type | imm[11:5] |  rs2 |  rs1 | funct3 | imm[4:0] | opcode |
           | 31-25     |24-20 |19-15 | 14-12  | 11-7     | 6-0    |

    B-type | imm[12] | imm[10:5] |  rs2 |  rs1 | funct3 | imm[4:1|11] | opcode |
           |   31    | 30-25     |24-20 |19-15 | 14-12  | 11-7        | 6-0    |

    U-type |                imm[31:12]                 |   rd  | opcode |
           |                31-12                      | 11-7  | 6-0    |

    J-type | imm[20] | imm[10:1] | imm[11] | imm[19:12] |   rd  | opcode |
           |   31    | 30-21     |   20    | 19-12      | 11-7  | 6-0    |
*/

/// Field accessors over a raw instruction word
#[derive(Debug, Clone, Copy)]
struct Fields(u32);

impl Fields {
    fn rd(self) -> u8 {
        ((self.0 >> 7) & 0x1f) as u8
    }

    fn rs1(self) -> u8 {
        ((self.0 >> 15) & 0x1f) as u8
    }

    fn rs2(self) -> u8 {
        ((self.0 >> 20) & 0x1f) as u8
    }

    /// I-type immediate, sign-extended from 12 bits
    fn i_imm(self) -> i32 {
        (self.0 as i32) >> 20
    }

    /// S-type immediate, sign-extended from 12 bits
    fn s_imm(self) -> i32 {
        ((self.0 as i32) >> 25 << 5) | ((self.0 >> 7) & 0x1f) as i32
    }

    /// B-type branch offset, sign-extended from 13 bits
    fn b_imm(self) -> i32 {
        let w = self.0;
        ((w as i32) >> 31 << 12)
            | (((w >> 7) & 0x1) << 11) as i32
            | (((w >> 25) & 0x3f) << 5) as i32
            | (((w >> 8) & 0xf) << 1) as i32
    }

    /// U-type immediate: bits [31:12], not shifted back into place
    fn u_imm(self) -> i32 {
        (self.0 >> 12) as i32
    }

    /// J-type jump offset, sign-extended from 21 bits
    fn j_imm(self) -> i32 {
        let w = self.0;
        ((w as i32) >> 31 << 20)
            | (((w >> 12) & 0xff) << 12) as i32
            | (((w >> 20) & 0x1) << 11) as i32
            | (((w >> 21) & 0x3ff) << 1) as i32
    }

    /// CSR address, no sign extension
    fn csr(self) -> u16 {
        (self.0 >> 20) as u16
    }

    /// Shift amount, bits [25:20]. RV32 entries pin bit 25 to zero in their mask.
    fn shamt(self) -> u8 {
        ((self.0 >> 20) & 0x3f) as u8
    }

    /// CSR immediate instructions reuse the rs1 slot for a 5-bit unsigned value
    fn uimm(self) -> u8 {
        self.rs1()
    }

    fn aq(self) -> bool {
        (self.0 >> 26) & 0x1 != 0
    }

    fn rl(self) -> bool {
        (self.0 >> 25) & 0x1 != 0
    }

    fn pred(self) -> u8 {
        ((self.0 >> 24) & 0xf) as u8
    }

    fn succ(self) -> u8 {
        ((self.0 >> 20) & 0xf) as u8
    }
}

struct Pattern {
    mask: u32,
    bits: u32,
    extension: Extension,
    build: fn(Fields) -> Instruction,
}

const MASK_OPCODE: u32 = 0x0000_007f;
const MASK_FUNCT3: u32 = 0x0000_707f;
const MASK_FUNCT7: u32 = 0xfe00_707f;
/// RV64 immediate shifts use bit 25 for the sixth shamt bit
const MASK_FUNCT6: u32 = 0xfc00_707f;
const MASK_AMO: u32 = 0xf800_707f;
/// LR additionally requires rs2 to be zero
const MASK_LR: u32 = 0xf9f0_707f;
/// FENCE requires fm, rs1 and rd to be zero
const MASK_FENCE: u32 = 0xf00f_ffff;
/// FENCE.I requires rs1 and rd to be zero
const MASK_FENCE_I: u32 = 0x000f_ffff;
const MASK_EXACT: u32 = 0xffff_ffff;

const fn op(opcode: Opcode) -> u32 {
    opcode.bits() as u32
}

const fn f3(opcode: Opcode, funct3: u32) -> u32 {
    (funct3 << 12) | op(opcode)
}

const fn f7(opcode: Opcode, funct3: u32, funct7: u32) -> u32 {
    (funct7 << 25) | f3(opcode, funct3)
}

const fn amo(funct3: u32, funct5: u32) -> u32 {
    (funct5 << 27) | f3(Opcode::Amo, funct3)
}

use Extension::{RV32A, RV32I, RV32M, RV64A, RV64I, RV64M, Zicsr, Zifencei};
use Opcode::{
    Amo, Auipc, Branch, Jal, Jalr, Load, Lui, MiscMem, Op, Op32, OpImm, OpImm32, Store, System,
};

#[rustfmt::skip]
static CATALOG: &[Pattern] = &[
    // Loads
    Pattern { mask: MASK_FUNCT3, bits: f3(Load, 0b000), extension: RV32I, build: |f| Instruction::LB { rd: f.rd(), rs1: f.rs1(), offset: f.i_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Load, 0b001), extension: RV32I, build: |f| Instruction::LH { rd: f.rd(), rs1: f.rs1(), offset: f.i_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Load, 0b010), extension: RV32I, build: |f| Instruction::LW { rd: f.rd(), rs1: f.rs1(), offset: f.i_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Load, 0b011), extension: RV64I, build: |f| Instruction::LD { rd: f.rd(), rs1: f.rs1(), offset: f.i_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Load, 0b100), extension: RV32I, build: |f| Instruction::LBU { rd: f.rd(), rs1: f.rs1(), offset: f.i_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Load, 0b101), extension: RV32I, build: |f| Instruction::LHU { rd: f.rd(), rs1: f.rs1(), offset: f.i_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Load, 0b110), extension: RV64I, build: |f| Instruction::LWU { rd: f.rd(), rs1: f.rs1(), offset: f.i_imm() } },

    // Memory ordering
    Pattern { mask: MASK_FENCE, bits: f3(MiscMem, 0b000), extension: RV32I, build: |f| Instruction::FENCE { pred: f.pred(), succ: f.succ() } },
    Pattern { mask: MASK_FENCE_I, bits: f3(MiscMem, 0b001), extension: Zifencei, build: |_| Instruction::FENCE_I },

    // Immediate arithmetic
    Pattern { mask: MASK_FUNCT3, bits: f3(OpImm, 0b000), extension: RV32I, build: |f| Instruction::ADDI { rd: f.rd(), rs1: f.rs1(), imm: f.i_imm() } },
    Pattern { mask: MASK_FUNCT6, bits: f7(OpImm, 0b001, 0b000_0000), extension: RV64I, build: |f| Instruction::SLLI { rd: f.rd(), rs1: f.rs1(), shamt: f.shamt() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(OpImm, 0b001, 0b000_0000), extension: RV32I, build: |f| Instruction::SLLI { rd: f.rd(), rs1: f.rs1(), shamt: f.shamt() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(OpImm, 0b010), extension: RV32I, build: |f| Instruction::SLTI { rd: f.rd(), rs1: f.rs1(), imm: f.i_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(OpImm, 0b011), extension: RV32I, build: |f| Instruction::SLTIU { rd: f.rd(), rs1: f.rs1(), imm: f.i_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(OpImm, 0b100), extension: RV32I, build: |f| Instruction::XORI { rd: f.rd(), rs1: f.rs1(), imm: f.i_imm() } },
    Pattern { mask: MASK_FUNCT6, bits: f7(OpImm, 0b101, 0b000_0000), extension: RV64I, build: |f| Instruction::SRLI { rd: f.rd(), rs1: f.rs1(), shamt: f.shamt() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(OpImm, 0b101, 0b000_0000), extension: RV32I, build: |f| Instruction::SRLI { rd: f.rd(), rs1: f.rs1(), shamt: f.shamt() } },
    Pattern { mask: MASK_FUNCT6, bits: f7(OpImm, 0b101, 0b010_0000), extension: RV64I, build: |f| Instruction::SRAI { rd: f.rd(), rs1: f.rs1(), shamt: f.shamt() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(OpImm, 0b101, 0b010_0000), extension: RV32I, build: |f| Instruction::SRAI { rd: f.rd(), rs1: f.rs1(), shamt: f.shamt() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(OpImm, 0b110), extension: RV32I, build: |f| Instruction::ORI { rd: f.rd(), rs1: f.rs1(), imm: f.i_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(OpImm, 0b111), extension: RV32I, build: |f| Instruction::ANDI { rd: f.rd(), rs1: f.rs1(), imm: f.i_imm() } },

    // Upper immediates
    Pattern { mask: MASK_OPCODE, bits: op(Auipc), extension: RV32I, build: |f| Instruction::AUIPC { rd: f.rd(), imm: f.u_imm() } },
    Pattern { mask: MASK_OPCODE, bits: op(Lui), extension: RV32I, build: |f| Instruction::LUI { rd: f.rd(), imm: f.u_imm() } },

    // RV64I word immediates
    Pattern { mask: MASK_FUNCT3, bits: f3(OpImm32, 0b000), extension: RV64I, build: |f| Instruction::ADDIW { rd: f.rd(), rs1: f.rs1(), imm: f.i_imm() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(OpImm32, 0b001, 0b000_0000), extension: RV64I, build: |f| Instruction::SLLIW { rd: f.rd(), rs1: f.rs1(), shamt: f.shamt() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(OpImm32, 0b101, 0b000_0000), extension: RV64I, build: |f| Instruction::SRLIW { rd: f.rd(), rs1: f.rs1(), shamt: f.shamt() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(OpImm32, 0b101, 0b010_0000), extension: RV64I, build: |f| Instruction::SRAIW { rd: f.rd(), rs1: f.rs1(), shamt: f.shamt() } },

    // Stores
    Pattern { mask: MASK_FUNCT3, bits: f3(Store, 0b000), extension: RV32I, build: |f| Instruction::SB { rs1: f.rs1(), rs2: f.rs2(), offset: f.s_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Store, 0b001), extension: RV32I, build: |f| Instruction::SH { rs1: f.rs1(), rs2: f.rs2(), offset: f.s_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Store, 0b010), extension: RV32I, build: |f| Instruction::SW { rs1: f.rs1(), rs2: f.rs2(), offset: f.s_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Store, 0b011), extension: RV64I, build: |f| Instruction::SD { rs1: f.rs1(), rs2: f.rs2(), offset: f.s_imm() } },

    // Atomics, word
    Pattern { mask: MASK_LR, bits: amo(0b010, 0b00010), extension: RV32A, build: |f| Instruction::LR_W { rd: f.rd(), rs1: f.rs1(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b010, 0b00011), extension: RV32A, build: |f| Instruction::SC_W { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b010, 0b00001), extension: RV32A, build: |f| Instruction::AMOSWAP_W { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b010, 0b00000), extension: RV32A, build: |f| Instruction::AMOADD_W { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b010, 0b00100), extension: RV32A, build: |f| Instruction::AMOXOR_W { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b010, 0b01100), extension: RV32A, build: |f| Instruction::AMOAND_W { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b010, 0b01000), extension: RV32A, build: |f| Instruction::AMOOR_W { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b010, 0b10000), extension: RV32A, build: |f| Instruction::AMOMIN_W { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b010, 0b10100), extension: RV32A, build: |f| Instruction::AMOMAX_W { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b010, 0b11000), extension: RV32A, build: |f| Instruction::AMOMINU_W { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b010, 0b11100), extension: RV32A, build: |f| Instruction::AMOMAXU_W { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },

    // Atomics, doubleword
    Pattern { mask: MASK_LR, bits: amo(0b011, 0b00010), extension: RV64A, build: |f| Instruction::LR_D { rd: f.rd(), rs1: f.rs1(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b011, 0b00011), extension: RV64A, build: |f| Instruction::SC_D { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b011, 0b00001), extension: RV64A, build: |f| Instruction::AMOSWAP_D { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b011, 0b00000), extension: RV64A, build: |f| Instruction::AMOADD_D { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b011, 0b00100), extension: RV64A, build: |f| Instruction::AMOXOR_D { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b011, 0b01100), extension: RV64A, build: |f| Instruction::AMOAND_D { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b011, 0b01000), extension: RV64A, build: |f| Instruction::AMOOR_D { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b011, 0b10000), extension: RV64A, build: |f| Instruction::AMOMIN_D { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b011, 0b10100), extension: RV64A, build: |f| Instruction::AMOMAX_D { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b011, 0b11000), extension: RV64A, build: |f| Instruction::AMOMINU_D { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },
    Pattern { mask: MASK_AMO, bits: amo(0b011, 0b11100), extension: RV64A, build: |f| Instruction::AMOMAXU_D { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2(), aq: f.aq(), rl: f.rl() } },

    // Register arithmetic
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b000, 0b000_0000), extension: RV32I, build: |f| Instruction::ADD { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b000, 0b010_0000), extension: RV32I, build: |f| Instruction::SUB { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b001, 0b000_0000), extension: RV32I, build: |f| Instruction::SLL { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b010, 0b000_0000), extension: RV32I, build: |f| Instruction::SLT { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b011, 0b000_0000), extension: RV32I, build: |f| Instruction::SLTU { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b100, 0b000_0000), extension: RV32I, build: |f| Instruction::XOR { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b101, 0b000_0000), extension: RV32I, build: |f| Instruction::SRL { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b101, 0b010_0000), extension: RV32I, build: |f| Instruction::SRA { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b110, 0b000_0000), extension: RV32I, build: |f| Instruction::OR { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b111, 0b000_0000), extension: RV32I, build: |f| Instruction::AND { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },

    // Multiply/divide
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b000, 0b000_0001), extension: RV32M, build: |f| Instruction::MUL { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b001, 0b000_0001), extension: RV32M, build: |f| Instruction::MULH { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b010, 0b000_0001), extension: RV32M, build: |f| Instruction::MULHSU { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b011, 0b000_0001), extension: RV32M, build: |f| Instruction::MULHU { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b100, 0b000_0001), extension: RV32M, build: |f| Instruction::DIV { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b101, 0b000_0001), extension: RV32M, build: |f| Instruction::DIVU { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b110, 0b000_0001), extension: RV32M, build: |f| Instruction::REM { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op, 0b111, 0b000_0001), extension: RV32M, build: |f| Instruction::REMU { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },

    // RV64I word register operations
    Pattern { mask: MASK_FUNCT7, bits: f7(Op32, 0b000, 0b000_0000), extension: RV64I, build: |f| Instruction::ADDW { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op32, 0b000, 0b010_0000), extension: RV64I, build: |f| Instruction::SUBW { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op32, 0b001, 0b000_0000), extension: RV64I, build: |f| Instruction::SLLW { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op32, 0b101, 0b000_0000), extension: RV64I, build: |f| Instruction::SRLW { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op32, 0b101, 0b010_0000), extension: RV64I, build: |f| Instruction::SRAW { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op32, 0b000, 0b000_0001), extension: RV64M, build: |f| Instruction::MULW { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op32, 0b100, 0b000_0001), extension: RV64M, build: |f| Instruction::DIVW { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op32, 0b101, 0b000_0001), extension: RV64M, build: |f| Instruction::DIVUW { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op32, 0b110, 0b000_0001), extension: RV64M, build: |f| Instruction::REMW { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },
    Pattern { mask: MASK_FUNCT7, bits: f7(Op32, 0b111, 0b000_0001), extension: RV64M, build: |f| Instruction::REMUW { rd: f.rd(), rs1: f.rs1(), rs2: f.rs2() } },

    // Branches
    Pattern { mask: MASK_FUNCT3, bits: f3(Branch, 0b000), extension: RV32I, build: |f| Instruction::BEQ { rs1: f.rs1(), rs2: f.rs2(), offset: f.b_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Branch, 0b001), extension: RV32I, build: |f| Instruction::BNE { rs1: f.rs1(), rs2: f.rs2(), offset: f.b_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Branch, 0b100), extension: RV32I, build: |f| Instruction::BLT { rs1: f.rs1(), rs2: f.rs2(), offset: f.b_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Branch, 0b101), extension: RV32I, build: |f| Instruction::BGE { rs1: f.rs1(), rs2: f.rs2(), offset: f.b_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Branch, 0b110), extension: RV32I, build: |f| Instruction::BLTU { rs1: f.rs1(), rs2: f.rs2(), offset: f.b_imm() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(Branch, 0b111), extension: RV32I, build: |f| Instruction::BGEU { rs1: f.rs1(), rs2: f.rs2(), offset: f.b_imm() } },

    // Jumps
    Pattern { mask: MASK_FUNCT3, bits: f3(Jalr, 0b000), extension: RV32I, build: |f| Instruction::JALR { rd: f.rd(), rs1: f.rs1(), offset: f.i_imm() } },
    Pattern { mask: MASK_OPCODE, bits: op(Jal), extension: RV32I, build: |f| Instruction::JAL { rd: f.rd(), offset: f.j_imm() } },

    // System
    Pattern { mask: MASK_EXACT, bits: op(System), extension: RV32I, build: |_| Instruction::ECALL },
    Pattern { mask: MASK_EXACT, bits: (1 << 20) | op(System), extension: RV32I, build: |_| Instruction::EBREAK },
    Pattern { mask: MASK_FUNCT3, bits: f3(System, 0b001), extension: Zicsr, build: |f| Instruction::CSRRW { rd: f.rd(), rs1: f.rs1(), csr: f.csr() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(System, 0b010), extension: Zicsr, build: |f| Instruction::CSRRS { rd: f.rd(), rs1: f.rs1(), csr: f.csr() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(System, 0b011), extension: Zicsr, build: |f| Instruction::CSRRC { rd: f.rd(), rs1: f.rs1(), csr: f.csr() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(System, 0b101), extension: Zicsr, build: |f| Instruction::CSRRWI { rd: f.rd(), uimm: f.uimm(), csr: f.csr() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(System, 0b110), extension: Zicsr, build: |f| Instruction::CSRRSI { rd: f.rd(), uimm: f.uimm(), csr: f.csr() } },
    Pattern { mask: MASK_FUNCT3, bits: f3(System, 0b111), extension: Zicsr, build: |f| Instruction::CSRRCI { rd: f.rd(), uimm: f.uimm(), csr: f.csr() } },
];

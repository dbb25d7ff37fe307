/// Major opcode of a 32-bit instruction, bits [6:0]
///
/// See: https://riscv-software-src.github.io/riscv-unified-db/manual/html/isa/isa_20240411/chapters/rv-32-64g.html#opcodemap
///
/// Every major opcode has bits [1:0] set. Compressed instructions report the
/// opcode of their standard expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::unusual_byte_groupings)]
#[repr(u8)]
pub enum Opcode {
    /// lb, lh, lw, ld, lbu, lhu, lwu
    Load = 0b00_000_11,
    /// fence, fence.i
    MiscMem = 0b00_011_11,
    /// addi, slti, xori, slli, ...
    OpImm = 0b00_100_11,
    Auipc = 0b00_101_11,
    /// addiw, slliw, srliw, sraiw (RV64I)
    OpImm32 = 0b00_110_11,
    /// sb, sh, sw, sd
    Store = 0b01_000_11,
    /// lr, sc, amo* (A)
    Amo = 0b01_011_11,
    /// Register-register ALU, including M
    Op = 0b01_100_11,
    Lui = 0b01_101_11,
    /// addw, subw, mulw, ... (RV64I)
    Op32 = 0b01_110_11,
    Branch = 0b11_000_11,
    Jalr = 0b11_001_11,
    Jal = 0b11_011_11,
    /// ecall, ebreak, csr*
    System = 0b11_100_11,
}

impl Opcode {
    pub const ALL: [Opcode; 14] = [
        Opcode::Load,
        Opcode::MiscMem,
        Opcode::OpImm,
        Opcode::Auipc,
        Opcode::OpImm32,
        Opcode::Store,
        Opcode::Amo,
        Opcode::Op,
        Opcode::Lui,
        Opcode::Op32,
        Opcode::Branch,
        Opcode::Jalr,
        Opcode::Jal,
        Opcode::System,
    ];

    /// Opcode named by the low seven bits of `bits`, if any
    pub fn from_bits(bits: u8) -> Option<Self> {
        let bits = bits & 0x7f;
        Self::ALL.into_iter().find(|opcode| opcode.bits() == bits)
    }

    /// The 7-bit opcode field value
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_round_trip() {
        for bits in 0..=0x7fu8 {
            if let Some(opcode) = Opcode::from_bits(bits) {
                assert_eq!(opcode.bits(), bits);
                assert_eq!(bits & 0b11, 0b11);
            }
        }
        assert_eq!(Opcode::from_bits(0b001_0011), Some(Opcode::OpImm));
        assert_eq!(Opcode::from_bits(0b000_0000), None);
        assert_eq!(Opcode::ALL.iter().filter(|op| Opcode::from_bits(op.bits()) == Some(**op)).count(), 14);
    }
}

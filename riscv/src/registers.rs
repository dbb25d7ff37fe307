//! RISC-V integer register names
//!
//! Ref: https://riscv-non-isa.github.io/riscv-elf-psabi-doc/#_register_convention
//!
//! | ABI name | X name | Usage                                |
//! |----------|--------|--------------------------------------|
//! | zero     | x0     | Read always as zero                  |
//! | ra       | x1     | Return address                       |
//! | sp       | x2     | Stack pointer                        |
//! | gp       | x3     | Global pointer                       |
//! | tp       | x4     | Thread pointer                       |
//! | t0-t2    | x5-x7  | Temporary registers 0-2              |
//! | s0       | x8     | Saved register 0 / frame pointer     |
//! | s1       | x9     | Saved register 1                     |
//! | a0-a1    | x10-11 | Function arguments / return values   |
//! | a2-a7    | x12-17 | Function arguments 2-7               |
//! | s2-s11   | x18-27 | Saved registers 2-11                 |
//! | t3-t6    | x28-31 | Temporary registers 3-6              |

/// Number of integer registers
pub const REGS_IN_MAIN: usize = 32;

const ABI_NAMES: [&str; REGS_IN_MAIN] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// ABI name of an integer register. Only the low five bits of `index` are used.
pub fn abi_name(index: u8) -> &'static str {
    ABI_NAMES[usize::from(index & 0x1f)]
}

/// Architectural name (`x0`..`x31`) of an integer register
pub fn x_name(index: u8) -> String {
    format!("x{}", index & 0x1f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abi_names() {
        assert_eq!(abi_name(0), "zero");
        assert_eq!(abi_name(2), "sp");
        assert_eq!(abi_name(8), "s0");
        assert_eq!(abi_name(17), "a7");
        assert_eq!(abi_name(27), "s11");
        assert_eq!(abi_name(31), "t6");
    }

    #[test]
    fn test_names_are_masked() {
        assert_eq!(abi_name(33), "ra");
        assert_eq!(x_name(9), "x9");
        assert_eq!(x_name(40), "x8");
    }
}

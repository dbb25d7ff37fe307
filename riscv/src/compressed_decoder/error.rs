/// Compressed decoder errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Defined illegal instruction (all-zero halfword)")]
    Illegal,

    #[error("Reserved encoding")]
    Reserved,

    #[error("Instruction requires RV64")]
    UnsupportedOnTarget,

    #[error("Invalid compressed instruction")]
    InvalidInstruction,

    #[error("Not a compressed instruction (bits [1:0] = 0b11)")]
    NotCompressed,
}

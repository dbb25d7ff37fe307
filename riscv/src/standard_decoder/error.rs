use crate::target::Extension;

/// Standard decoder errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The encoding is known but belongs to an extension the target leaves out
    #[error("Unsupported extension: {0}")]
    UnsupportedExtension(Extension),

    #[error("Invalid instruction format")]
    InvalidFormat,

    /// Bits [6:0] are not a major opcode this decoder knows
    #[error("Instruction not supported by target")]
    UnsupportedInstruction,
}

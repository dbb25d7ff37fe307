//! RISC-V instruction decoding for standard (32-bit) and compressed (16-bit)
//! encodings.
//!
//! [`decode`] takes one 32-bit word as read from memory. Bits [1:0] choose
//! the path: anything other than `0b11` is a compressed instruction held in
//! the low halfword, `0b11` is a standard instruction. The two paths never
//! overlap. [`InstructionDecoder::decode_bytes`] walks a little-endian byte
//! stream with mixed instruction lengths.
pub mod compressed_decoder;
pub mod registers;
pub mod standard_decoder;
pub mod target;

use std::fmt;

use compressed_decoder::{decode_compressed_instruction, is_compressed};

pub use compressed_decoder::{
    DecodeError as CompressedDecodeError, Instruction as CompressedInstruction,
};
pub use standard_decoder::{decode_standard_instruction, DecodeError, Instruction, Opcode};
pub use target::{Extension, Target, TargetParseError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Cannot decode 0x{word:08x}: {source}")]
    Standard { word: u32, source: DecodeError },

    #[error("Cannot decode 0x{word:08x} as a compressed instruction: {source}")]
    Compressed { word: u32, source: CompressedDecodeError },

    #[error("Tried to read past end of file")]
    ReadingPastEOF,

    #[error("code length = {len} which is not a multiple of {alignment}")]
    MisalignedCode { len: usize, alignment: usize },
}

impl Error {
    /// The word that failed to decode, if the error is about a single word
    pub fn word(&self) -> Option<u32> {
        match self {
            Error::Standard { word, .. } | Error::Compressed { word, .. } => Some(*word),
            Error::ReadingPastEOF | Error::MisalignedCode { .. } => None,
        }
    }
}

/// Indicates whether an instruction was compressed or not
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WasCompressed {
    /// 16-bit compressed instruction
    Yes,
    /// 32-bit standard instruction
    No,
}

/// Result of decoding a single memory word
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodedInstruction {
    Standard(Instruction),
    Compressed(CompressedInstruction),
}

impl DecodedInstruction {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            DecodedInstruction::Standard(instruction) => instruction.mnemonic(),
            DecodedInstruction::Compressed(instruction) => instruction.mnemonic(),
        }
    }

    /// The standard instruction this decodes to; compressed forms are expanded
    pub fn expand(&self) -> Instruction {
        match *self {
            DecodedInstruction::Standard(instruction) => instruction,
            DecodedInstruction::Compressed(instruction) => instruction.into(),
        }
    }

    /// Major opcode class, taken from the expansion for compressed forms
    pub fn opcode(&self) -> Opcode {
        self.expand().opcode()
    }

    pub fn was_compressed(&self) -> WasCompressed {
        match self {
            DecodedInstruction::Standard(_) => WasCompressed::No,
            DecodedInstruction::Compressed(_) => WasCompressed::Yes,
        }
    }

    /// Encoded size in bytes
    pub fn size(&self) -> usize {
        match self {
            DecodedInstruction::Standard(_) => Instruction::size(),
            DecodedInstruction::Compressed(_) => CompressedInstruction::size(),
        }
    }
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedInstruction::Standard(instruction) => instruction.fmt(f),
            DecodedInstruction::Compressed(instruction) => instruction.fmt(f),
        }
    }
}

/// Decode one 32-bit memory word against `target`
///
/// Pure: the same word and target always give the same result. A failure
/// carries the offending word.
pub fn decode(word: u32, target: &Target) -> Result<DecodedInstruction, Error> {
    let low_half = word as u16;
    if is_compressed(low_half) {
        decode_compressed_instruction(low_half, target)
            .map(DecodedInstruction::Compressed)
            .map_err(|source| Error::Compressed { word, source })
    } else {
        decode_standard_instruction(word, target)
            .map(DecodedInstruction::Standard)
            .map_err(|source| Error::Standard { word, source })
    }
}

/// High-level RISC-V instruction decoder with target configuration
#[derive(Debug, Clone)]
pub struct InstructionDecoder {
    target: Target,
}

impl InstructionDecoder {
    /// Create a new decoder with default RV64IMAC target
    pub fn new() -> Self {
        Self { target: Target::rv64imac() }
    }

    /// Create a decoder with a specific target
    pub fn with_target(target: Target) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Decode a single memory word, see [`decode`]
    pub fn decode_word(&self, word: u32) -> Result<DecodedInstruction, Error> {
        decode(word, &self.target)
    }

    /// Decode multiple instructions from a byte array (handles mixed 16/32-bit instructions)
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Vec<(Instruction, WasCompressed)>, Error> {
        let alignment = code_alignment(&self.target);
        if bytes.len() % alignment != 0 {
            return Err(Error::MisalignedCode { len: bytes.len(), alignment });
        }

        let mut instructions = Vec::with_capacity(bytes.len() / 2);
        let mut i = 0;

        while i + 2 <= bytes.len() {
            let first_half = u16::from_le_bytes([bytes[i], bytes[i + 1]]);

            let word = if is_compressed(first_half) {
                u32::from(first_half)
            } else {
                if i + 4 > bytes.len() {
                    return Err(Error::ReadingPastEOF);
                }
                let second_half = u16::from_le_bytes([bytes[i + 2], bytes[i + 3]]);
                u32::from(first_half) | (u32::from(second_half) << 16)
            };

            let decoded = self.decode_word(word)?;
            instructions.push((decoded.expand(), decoded.was_compressed()));
            i += decoded.size();
        }

        Ok(instructions)
    }
}

impl Default for InstructionDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the code alignment in bytes
///
/// It will be 2 if the compressed extension is enabled, 4 otherwise. Code
/// with data mixed into it can break this unless the assembler was told to
/// align (`.align 2`).
const fn code_alignment(target: &Target) -> usize {
    if target.compressed_enabled() {
        CompressedInstruction::size()
    } else {
        Instruction::size()
    }
}

use riscv::{Error, Instruction, InstructionDecoder, Target, WasCompressed};

/// I-type OP-IMM word with the given imm[11:5], shamt, funct3, rd=x1 and rs1=x2
fn op_imm(imm_11_5: u32, shamt: u32, funct3: u32) -> [u8; 4] {
    let bits = (imm_11_5 << 25) | (shamt << 20) | (2 << 15) | (funct3 << 12) | (1 << 7) | 0b001_0011;
    bits.to_le_bytes()
}

#[test]
fn test_slli_upper_bits() {
    let rv32 = InstructionDecoder::with_target(Target::rv32imc());
    let rv64 = InstructionDecoder::with_target(Target::rv64gc());

    let valid = op_imm(0, 5, 0b001);
    let expected = vec![(Instruction::SLLI { rd: 1, rs1: 2, shamt: 5 }, WasCompressed::No)];
    assert_eq!(rv32.decode_bytes(&valid).unwrap(), expected);
    assert_eq!(rv64.decode_bytes(&valid).unwrap(), expected);

    // imm[11:5] = 0010000 is reserved on both widths
    assert!(rv32.decode_bytes(&op_imm(0b001_0000, 1, 0b001)).is_err());
    assert!(rv64.decode_bytes(&op_imm(0b001_0000, 1, 0b001)).is_err());

    // imm[5] is shamt[5]: reserved on RV32, legal on RV64
    assert!(rv32.decode_bytes(&op_imm(0b000_0001, 1, 0b001)).is_err());
    assert_eq!(
        rv64.decode_bytes(&op_imm(0b000_0001, 1, 0b001)).unwrap()[0].0,
        Instruction::SLLI { rd: 1, rs1: 2, shamt: 33 }
    );
}

#[test]
fn test_srli_srai_patterns() {
    let rv32 = InstructionDecoder::with_target(Target::rv32imc());
    let rv64 = InstructionDecoder::with_target(Target::rv64gc());

    assert_eq!(
        rv32.decode_bytes(&op_imm(0, 3, 0b101)).unwrap()[0].0,
        Instruction::SRLI { rd: 1, rs1: 2, shamt: 3 }
    );
    assert_eq!(
        rv32.decode_bytes(&op_imm(0b010_0000, 3, 0b101)).unwrap()[0].0,
        Instruction::SRAI { rd: 1, rs1: 2, shamt: 3 }
    );
    assert_eq!(
        rv64.decode_bytes(&op_imm(0b010_0001, 3, 0b101)).unwrap()[0].0,
        Instruction::SRAI { rd: 1, rs1: 2, shamt: 35 }
    );

    // Only 0000000 and 0100000 are defined for imm[11:5]
    assert!(rv32.decode_bytes(&op_imm(0b100_0000, 3, 0b101)).is_err());
    assert!(rv64.decode_bytes(&op_imm(0b000_0010, 3, 0b101)).is_err());
}

#[test]
fn test_misaligned_code_is_an_error() {
    let decoder = InstructionDecoder::with_target(Target::rv32i());
    let result = decoder.decode_bytes(&[0x13, 0x00]);
    assert_eq!(result, Err(Error::MisalignedCode { len: 2, alignment: 4 }));
}

#[test]
fn test_truncated_standard_instruction() {
    let decoder = InstructionDecoder::with_target(Target::rv32imc());
    let result = decoder.decode_bytes(&[0x01, 0x00, 0x13, 0x00]);
    assert_eq!(result, Err(Error::ReadingPastEOF));
}

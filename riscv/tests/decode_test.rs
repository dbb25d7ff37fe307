use riscv::{
    decode, CompressedDecodeError, CompressedInstruction, DecodeError, DecodedInstruction, Error,
    Instruction, Opcode, Target,
};

#[test]
fn test_zero_word_fails_with_the_word() {
    let err = decode(0x0000_0000, &Target::rv32i()).unwrap_err();
    assert_eq!(err, Error::Compressed { word: 0, source: CompressedDecodeError::Illegal });
    assert_eq!(err.word(), Some(0));
    assert!(err.to_string().contains("0x00000000"));
}

#[test]
fn test_canonical_nop() {
    let decoded = decode(0x0000_0013, &Target::rv32i()).unwrap();
    assert_eq!(decoded, DecodedInstruction::Standard(Instruction::ADDI { rd: 0, rs1: 0, imm: 0 }));
    assert_eq!(decoded.opcode(), Opcode::OpImm);
    assert_eq!(decoded.mnemonic(), "addi");
    assert_eq!(decoded.to_string(), "addi zero, zero, 0");
    assert_eq!(decoded.size(), 4);
}

#[test]
fn test_compressed_word_uses_low_halfword() {
    // Upper halfword is whatever follows in memory and is ignored
    let decoded = decode(0xdead_0085, &Target::rv32imc()).unwrap();
    assert_eq!(decoded, DecodedInstruction::Compressed(CompressedInstruction::C_ADDI { rd: 1, imm: 1 }));
    assert_eq!(decoded.to_string(), "c.addi ra, 1");
    assert_eq!(decoded.opcode(), Opcode::OpImm);
    assert_eq!(decoded.expand(), Instruction::ADDI { rd: 1, rs1: 1, imm: 1 });
    assert_eq!(decoded.size(), 2);
}

#[test]
fn test_standard_failure_carries_word() {
    // Opcode 0b0001011 (custom-0) is not in the catalog
    let err = decode(0x1234_500b, &Target::rv64gc()).unwrap_err();
    assert_eq!(err, Error::Standard { word: 0x1234_500b, source: DecodeError::UnsupportedInstruction });
    assert_eq!(err.word(), Some(0x1234_500b));
}

#[test]
fn test_decode_is_idempotent() {
    let target = Target::rv64gc();
    for word in [0x0000_0013, 0x0000_0000, 0x0085, 0x02A0_0093, 0xffff_ffff, 0x0000_100f, 0x9002] {
        assert_eq!(decode(word, &target), decode(word, &target));
    }
}

#[test]
fn test_compressed_and_standard_spaces_are_disjoint() {
    let targets = [Target::rv32i(), Target::rv32imc(), Target::rv64gc()];
    for target in &targets {
        for low in (0..=0xffffu32).step_by(13) {
            let word = 0xa5a5_0000 | low;
            let standard_space = word & 0b11 == 0b11;
            match decode(word, target) {
                Ok(DecodedInstruction::Standard(_)) | Err(Error::Standard { .. }) => {
                    assert!(standard_space, "0x{word:08x} took the standard path")
                }
                Ok(DecodedInstruction::Compressed(_)) | Err(Error::Compressed { .. }) => {
                    assert!(!standard_space, "0x{word:08x} took the compressed path")
                }
                Err(other) => panic!("unexpected error {other:?}"),
            }
        }
    }
}

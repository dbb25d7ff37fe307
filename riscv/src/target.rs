//! RISC-V target configuration
//!
//! A [`Target`] is the ISA variant a word is decoded against. Standard
//! instructions belonging to an extension only decode when the target
//! enables that extension.
use std::{fmt, str::FromStr};

/// RISC-V instruction set extensions known to the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// RV32I - Base integer instruction set
    RV32I,
    /// RV64I - 64-bit extensions to base
    RV64I,
    /// RV32M - Integer multiply/divide
    RV32M,
    /// RV64M - 64-bit multiply/divide
    RV64M,
    /// RV32A - Atomic instructions
    RV32A,
    /// RV64A - 64-bit atomic instructions
    RV64A,
    /// Zicsr - Control and Status Register instructions
    Zicsr,
    /// Zifencei - Instruction-fetch fence
    Zifencei,
    /// RVC - Compressed instruction extension
    RVC,
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extension::RV32I => write!(f, "RV32I (Base Integer)"),
            Extension::RV64I => write!(f, "RV64I (64-bit Extensions)"),
            Extension::RV32M => write!(f, "RV32M (Multiply/Divide)"),
            Extension::RV64M => write!(f, "RV64M (64-bit Multiply/Divide)"),
            Extension::RV32A => write!(f, "RV32A (Atomic)"),
            Extension::RV64A => write!(f, "RV64A (64-bit Atomic)"),
            Extension::Zicsr => write!(f, "Zicsr (CSR Instructions)"),
            Extension::Zifencei => write!(f, "Zifencei (Instruction Fence)"),
            Extension::RVC => write!(f, "RVC (Compressed)"),
        }
    }
}

/// Errors produced while parsing an ISA string such as `rv32imc`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetParseError {
    #[error("ISA string must start with rv32 or rv64: {0:?}")]
    MissingBase(String),

    #[error("ISA string must name the base integer set `i` (or `g`): {0:?}")]
    MissingInteger(String),

    #[error("Unsupported extension `{extension}` in ISA string {isa:?}")]
    UnsupportedExtension { isa: String, extension: String },
}

/// RISC-V target configuration using builder pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Multiply/divide extension
    m: bool,
    /// Atomic extension
    a: bool,
    /// Compressed instruction extension
    c: bool,
    /// 64-bit extension
    i64: bool,
    /// CSR extension
    zicsr: bool,
    /// Instruction fence extension
    zifencei: bool,
}

impl Target {
    /// Create a new target with just RV32I base
    pub const fn new() -> Self {
        Self { m: false, a: false, c: false, i64: false, zicsr: false, zifencei: false }
    }

    /// Enable multiply/divide extension (M)
    pub const fn with_m(mut self) -> Self {
        self.m = true;
        self
    }

    /// Enable atomic extension (A)
    pub const fn with_a(mut self) -> Self {
        self.a = true;
        self
    }

    /// Enable compressed instruction extension (C)
    pub const fn with_c(mut self) -> Self {
        self.c = true;
        self
    }

    /// Enable 64-bit extension (RV64I)
    pub const fn with_64bit(mut self) -> Self {
        self.i64 = true;
        self
    }

    /// Enable CSR extension (Zicsr)
    pub const fn with_zicsr(mut self) -> Self {
        self.zicsr = true;
        self
    }

    /// Enable instruction fence extension (Zifencei)
    pub const fn with_zifencei(mut self) -> Self {
        self.zifencei = true;
        self
    }

    /// Create RV32I target, the base integer set the Gecko core implements
    pub const fn rv32i() -> Self {
        Self::new()
    }

    /// Create RV32IMC target
    pub const fn rv32imc() -> Self {
        Self::new().with_m().with_c()
    }

    /// Create RV64IMAC target (common 64-bit configuration)
    pub const fn rv64imac() -> Self {
        Self::new().with_64bit().with_m().with_a().with_c()
    }

    /// Create RV64GC target without the floating point sets, which this decoder does not cover
    pub const fn rv64gc() -> Self {
        Self::new().with_64bit().with_m().with_a().with_c().with_zicsr().with_zifencei()
    }

    /// Check if an extension is supported
    pub const fn supports_extension(&self, extension: Extension) -> bool {
        match extension {
            Extension::RV32I => true,
            Extension::RV64I => self.i64,
            Extension::RV32M => self.m,
            Extension::RV64M => self.m && self.i64,
            Extension::RV32A => self.a,
            Extension::RV64A => self.a && self.i64,
            Extension::Zicsr => self.zicsr,
            Extension::Zifencei => self.zifencei,
            Extension::RVC => self.c,
        }
    }

    pub const fn compressed_enabled(&self) -> bool {
        self.c
    }

    /// Get a string representation of the target
    pub fn target_string(&self) -> String {
        let mut result = if self.i64 { "RV64I".to_string() } else { "RV32I".to_string() };

        if self.m {
            result.push('M');
        }
        if self.a {
            result.push('A');
        }
        if self.c {
            result.push('C');
        }

        let mut extensions = Vec::new();
        if self.zicsr {
            extensions.push("Zicsr");
        }
        if self.zifencei {
            extensions.push("Zifencei");
        }

        if !extensions.is_empty() {
            result.push('_');
            result.push_str(&extensions.join("_"));
        }

        result
    }

    /// Get all enabled extensions
    pub fn enabled_extensions(&self) -> Vec<Extension> {
        let mut extensions = vec![Extension::RV32I];

        if self.i64 {
            extensions.push(Extension::RV64I);
        }
        if self.m {
            extensions.push(Extension::RV32M);
        }
        if self.m && self.i64 {
            extensions.push(Extension::RV64M);
        }
        if self.a {
            extensions.push(Extension::RV32A);
        }
        if self.a && self.i64 {
            extensions.push(Extension::RV64A);
        }
        if self.c {
            extensions.push(Extension::RVC);
        }
        if self.zicsr {
            extensions.push(Extension::Zicsr);
        }
        if self.zifencei {
            extensions.push(Extension::Zifencei);
        }

        extensions
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_string())
    }
}

impl FromStr for Target {
    type Err = TargetParseError;

    /// Parses ISA strings of the form `rv32imc`, `RV64GC` or `rv32i_zicsr_zifencei`
    fn from_str(isa: &str) -> Result<Self, Self::Err> {
        let lower = isa.trim().to_ascii_lowercase();
        let mut sections = lower.split('_');
        let base = sections.next().unwrap_or_default();

        let (mut target, letters) = if let Some(rest) = base.strip_prefix("rv32") {
            (Target::new(), rest)
        } else if let Some(rest) = base.strip_prefix("rv64") {
            (Target::new().with_64bit(), rest)
        } else {
            return Err(TargetParseError::MissingBase(isa.to_string()));
        };

        let mut letters = letters.chars();
        match letters.next() {
            Some('i') => {}
            Some('g') => {
                target = target.with_m().with_a().with_zicsr().with_zifencei();
            }
            _ => return Err(TargetParseError::MissingInteger(isa.to_string())),
        }

        for letter in letters {
            target = match letter {
                'm' => target.with_m(),
                'a' => target.with_a(),
                'c' => target.with_c(),
                other => {
                    return Err(TargetParseError::UnsupportedExtension {
                        isa: isa.to_string(),
                        extension: other.to_string(),
                    })
                }
            };
        }

        for extension in sections.filter(|s| !s.is_empty()) {
            target = match extension {
                "zicsr" => target.with_zicsr(),
                "zifencei" => target.with_zifencei(),
                other => {
                    return Err(TargetParseError::UnsupportedExtension {
                        isa: isa.to_string(),
                        extension: other.to_string(),
                    })
                }
            };
        }

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presets() {
        assert_eq!("rv32i".parse::<Target>().unwrap(), Target::rv32i());
        assert_eq!("RV32IMC".parse::<Target>().unwrap(), Target::rv32imc());
        assert_eq!("rv64imac".parse::<Target>().unwrap(), Target::rv64imac());
        assert_eq!("rv64gc".parse::<Target>().unwrap(), Target::rv64gc());
    }

    #[test]
    fn test_display_round_trip() {
        for target in [Target::rv32i(), Target::rv32imc(), Target::rv64imac(), Target::rv64gc()] {
            let parsed: Target = target.to_string().parse().unwrap();
            assert_eq!(parsed, target);
        }
        assert_eq!(Target::rv64gc().to_string(), "RV64IMAC_Zicsr_Zifencei");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("x86".parse::<Target>(), Err(TargetParseError::MissingBase(_))));
        assert!(matches!("rv32e".parse::<Target>(), Err(TargetParseError::MissingInteger(_))));
        assert!(matches!(
            "rv32imf".parse::<Target>(),
            Err(TargetParseError::UnsupportedExtension { extension, .. }) if extension == "f"
        ));
        assert!(matches!(
            "rv32i_zihpm".parse::<Target>(),
            Err(TargetParseError::UnsupportedExtension { extension, .. }) if extension == "zihpm"
        ));
    }

    #[test]
    fn test_enabled_extensions() {
        let extensions = Target::rv32imc().enabled_extensions();
        assert_eq!(extensions, vec![Extension::RV32I, Extension::RV32M, Extension::RVC]);
        assert!(!Target::rv32imc().supports_extension(Extension::RV64M));
        assert!(Target::rv64imac().supports_extension(Extension::RV64A));
    }
}

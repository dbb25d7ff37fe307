use anyhow::{Context, Result};
use colored::Colorize;
use riscv::Target;

use gecko_view::state::UNKNOWN_INSTRUCTION;

// Structure representing the 'decode' subcommand
#[derive(clap::Args)]
#[command(about = "Disassemble 32-bit instruction words")]
pub struct DecodeCmd {
    /// ISA string such as rv32imc or rv64gc
    #[clap(long, env = "GECKO_VIEW_ISA", default_value = "rv32i")]
    pub isa: String,

    /// Words in hexadecimal, with or without 0x
    #[clap(required = true, value_parser = parse_word)]
    pub words: Vec<u32>,
}

impl DecodeCmd {
    pub fn run(&self) -> Result<()> {
        let target: Target =
            self.isa.parse().with_context(|| format!("Invalid ISA string {:?}", self.isa))?;

        for word in &self.words {
            match riscv::decode(*word, &target) {
                Ok(instruction) => println!("0x{word:08x}  {instruction}"),
                Err(err) => println!(
                    "0x{word:08x}  {}  {}",
                    UNKNOWN_INSTRUCTION.red(),
                    format!("({err})").dimmed()
                ),
            }
        }

        Ok(())
    }
}

pub fn parse_word(text: &str) -> Result<u32, String> {
    let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text);
    u32::from_str_radix(&digits.replace('_', ""), 16)
        .map_err(|err| format!("{text:?} is not a 32-bit hexadecimal word: {err}"))
}

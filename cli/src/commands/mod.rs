mod config;
mod decode;
mod render;

use clap::{Parser, Subcommand};

pub use config::ConfigCmd;
pub use decode::{parse_word, DecodeCmd};
pub use render::{RenderCmd, WaveformFormat};

#[derive(Parser)]
#[command(name = "gecko-view", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the register and instruction view at a cursor
    Render(RenderCmd),
    /// Disassemble instruction words
    Decode(DecodeCmd),
    /// Print the signal list hooks as JSON
    Config(ConfigCmd),
}

impl Cli {
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Render(cmd) => cmd.run(),
            Command::Decode(cmd) => cmd.run(),
            Command::Config(cmd) => cmd.run(),
        }
    }
}

//! GDB-style view of the Gecko RISC-V core
//!
//! Reconstructs the program counter, the register file with its hazard
//! depth, and a window of decoded instructions from a simulation waveform at
//! a cursor, and lays them out in a character grid for the waveform viewer.
//!
//! The viewer calls the hooks in [`plugin`]. Waveform storage and the grid
//! surface are reached through the traits in [`waveform`] and [`buffer`].
pub mod buffer;
pub mod config;
pub mod dump;
mod error;
pub mod plugin;
pub mod render;
pub mod signals;
pub mod state;
pub mod trace;
pub mod waveform;

pub use buffer::{CharBuffer, Grid};
pub use config::{ConfigError, ViewConfig};
pub use dump::{load_vcd, read_vcd, VcdError};
pub use error::ViewError;
pub use plugin::{interactive, nalu_config, user_config, GeckoView, Plugin, SignalNode, SignalRadix};
pub use render::render;
pub use signals::SignalPaths;
pub use state::{assemble, MachineSnapshot, RegisterSnapshot, WindowEntry};
pub use trace::{Trace, TraceError};
pub use waveform::{
    BitVector, Logic, MemoryHeader, MemoryWaveform, SearchMode, VcdHeader, VcdVariable, Waveform,
    WaveformValue,
};

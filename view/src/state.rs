//! Machine state at one timestamp index, read out of the waveform
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use riscv::{registers::REGS_IN_MAIN, DecodedInstruction, Target};
use tracing::{debug, trace};

use crate::{
    error::ViewError,
    signals::SignalPaths,
    waveform::{SearchMode, VcdHeader, Waveform},
};

/// Words shown on each side of the program counter
pub const DEFAULT_WINDOW_RADIUS: u32 = 3;

/// Largest window radius a view may be configured with
pub const MAX_WINDOW_RADIUS: u32 = 1024;

/// Text shown in place of a word that does not decode
pub const UNKNOWN_INSTRUCTION: &str = "<unknown>";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegisterSnapshot {
    pub value: u32,
    /// Operations in flight that will write this register, `0..=7`
    pub hazard: u8,
}

/// One word of the instruction window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntry {
    /// Distance from the program counter in words
    pub offset: i64,
    pub address: u64,
    pub word: u32,
    pub instruction: Result<DecodedInstruction, riscv::Error>,
}

impl WindowEntry {
    /// Assembly text, or [`UNKNOWN_INSTRUCTION`] when the word did not decode
    pub fn text(&self) -> String {
        match &self.instruction {
            Ok(instruction) => instruction.to_string(),
            Err(_) => UNKNOWN_INSTRUCTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineSnapshot {
    pub timestamp_index: usize,
    pub program_counter: u32,
    pub registers: [RegisterSnapshot; REGS_IN_MAIN],
    /// Words read on each side of the program counter
    pub window_radius: u32,
    /// Ascending by offset; addresses below zero are left out
    pub window: Vec<WindowEntry>,
}

/// Number of in-flight writers given the two wrapping counters of the
/// register status table
///
/// The counters are three bits wide in hardware, so the difference wraps
/// modulo 8 rather than saturating.
pub fn hazard_depth(front: u32, rear: u32) -> u8 {
    (front.wrapping_sub(rear) & 0x7) as u8
}

/// Timestamp index the view shows for `cursor`: the latest one at or before it
pub fn resolve_timestamp(waveform: &dyn Waveform, cursor: u64) -> Result<usize, ViewError> {
    waveform
        .search_timestamp(cursor, SearchMode::Before)
        .ok_or(ViewError::TimestampNotFound(cursor))
}

/// Build the snapshot at `timestamp_index` with the default window radius
pub fn assemble(
    timestamp_index: usize,
    waveform: &dyn Waveform,
    header: &dyn VcdHeader,
    paths: &SignalPaths,
    target: &Target,
) -> Result<MachineSnapshot, ViewError> {
    Assembler::new(waveform, header, paths, target).assemble(timestamp_index)
}

/// Reads machine state through the waveform collaborators
///
/// Every lookup either succeeds or aborts the whole snapshot. The only
/// failure kept local is decoding an instruction word.
pub struct Assembler<'a> {
    waveform: &'a dyn Waveform,
    header: &'a dyn VcdHeader,
    paths: &'a SignalPaths,
    target: &'a Target,
    window_radius: u32,
}

impl<'a> Assembler<'a> {
    pub fn new(
        waveform: &'a dyn Waveform,
        header: &'a dyn VcdHeader,
        paths: &'a SignalPaths,
        target: &'a Target,
    ) -> Self {
        Self { waveform, header, paths, target, window_radius: DEFAULT_WINDOW_RADIUS }
    }

    /// Capped at [`MAX_WINDOW_RADIUS`]
    pub fn with_window_radius(mut self, window_radius: u32) -> Self {
        self.window_radius = window_radius.min(MAX_WINDOW_RADIUS);
        self
    }

    pub fn assemble(&self, timestamp_index: usize) -> Result<MachineSnapshot, ViewError> {
        let mut registers = [RegisterSnapshot::default(); REGS_IN_MAIN];
        for (index, register) in (0u8..).zip(registers.iter_mut()) {
            *register = self.register(index, timestamp_index)?;
        }

        let program_counter = self.read_u32(&self.paths.program_counter(), timestamp_index)?;
        let window = self.window(program_counter, timestamp_index)?;

        debug!(
            "Assembled snapshot at timestamp index {} with pc 0x{:08x} and {} window entries",
            timestamp_index,
            program_counter,
            window.len()
        );

        Ok(MachineSnapshot {
            timestamp_index,
            program_counter,
            registers,
            window_radius: self.window_radius,
            window,
        })
    }

    pub fn register(
        &self,
        index: u8,
        timestamp_index: usize,
    ) -> Result<RegisterSnapshot, ViewError> {
        let value = self.read_u32(&self.paths.register_value(index), timestamp_index)?;
        let front = self.read_u32(&self.paths.hazard_front(index), timestamp_index)?;
        let rear = self.read_u32(&self.paths.hazard_rear(index), timestamp_index)?;
        Ok(RegisterSnapshot { value, hazard: hazard_depth(front, rear) })
    }

    /// Words at `pc - radius ..= pc + radius`, skipping negative addresses
    pub fn window(&self, pc: u32, timestamp_index: usize) -> Result<Vec<WindowEntry>, ViewError> {
        let radius = i64::from(self.window_radius);
        let pc = i64::from(pc);
        let mut window = Vec::new();

        for offset in (-radius).max(-pc)..=radius {
            let address = (pc + offset) as u64;
            let word = self.read_u32(&self.paths.memory_word(address), timestamp_index)?;
            let instruction = riscv::decode(word, self.target);
            if let Err(err) = &instruction {
                trace!("Word 0x{:08x} at address {} does not decode: {}", word, address, err);
            }
            window.push(WindowEntry { offset, address, word, instruction });
        }

        Ok(window)
    }

    /// Low 32 bits of the vector `path` carries at `timestamp_index`
    pub fn read_u32(&self, path: &str, timestamp_index: usize) -> Result<u32, ViewError> {
        let variable = self
            .header
            .get_variable(path)
            .ok_or_else(|| ViewError::SignalNotFound(path.to_string()))?;
        let value = self.waveform.search_value(variable.idcode(), timestamp_index).ok_or_else(
            || ViewError::ValueNotFound { path: path.to_string(), timestamp_index },
        )?;
        let vector = value.vector().ok_or_else(|| ViewError::VectorNotFound(path.to_string()))?;
        Ok(low_u32(&vector.value()))
    }
}

fn low_u32(value: &BigUint) -> u32 {
    (value & BigUint::from(u32::MAX)).to_u32().unwrap_or_default()
}

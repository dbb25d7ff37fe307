//! Hierarchical signal paths of the Gecko core
//!
//! Array-like signals (register file, hazard counters, memory) are addressed
//! as `<prefix>[<n>]` with `n` in decimal. The program counter is a single
//! signal.
use serde::{Deserialize, Serialize};

const CORE: &str = "TOP.gecko_nano_wrapper.inst.core";

/// Where the view finds each piece of machine state in the waveform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignalPaths {
    /// Register file storage, indexed by register number
    pub register_file: String,
    /// Hazard front counters, indexed by register number
    pub hazard_front: String,
    /// Hazard rear counters, indexed by register number
    pub hazard_rear: String,
    pub program_counter: String,
    /// Instruction memory, indexed by word address
    pub memory: String,
}

impl Default for SignalPaths {
    fn default() -> Self {
        Self {
            register_file: format!(
                "{CORE}.gecko_decode_inst.regfile.register_file_inst.xilinx_distributed_ram_inst.data"
            ),
            hazard_front: format!(
                "{CORE}.gecko_decode_inst.register_status_table.front_counter_inst.xilinx_distributed_ram_inst.data"
            ),
            hazard_rear: format!(
                "{CORE}.gecko_decode_inst.register_status_table.rear_counter_inst.xilinx_distributed_ram_inst.data"
            ),
            program_counter: format!("{CORE}.gecko_fetch_inst.pc"),
            memory: "TOP.gecko_nano_wrapper.inst.memory_inst.memory".to_string(),
        }
    }
}

impl SignalPaths {
    pub fn register_value(&self, index: u8) -> String {
        indexed(&self.register_file, u64::from(index))
    }

    pub fn hazard_front(&self, index: u8) -> String {
        indexed(&self.hazard_front, u64::from(index))
    }

    pub fn hazard_rear(&self, index: u8) -> String {
        indexed(&self.hazard_rear, u64::from(index))
    }

    pub fn program_counter(&self) -> String {
        self.program_counter.clone()
    }

    pub fn memory_word(&self, address: u64) -> String {
        indexed(&self.memory, address)
    }
}

fn indexed(prefix: &str, n: u64) -> String {
    format!("{prefix}[{n}]")
}

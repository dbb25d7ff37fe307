//! JSON value-change traces
//!
//! ```json
//! { "signals": [
//!     { "path": "TOP.clk", "width": 1, "changes": [[0, 0], [5, 1], [10, "0"]] },
//!     { "path": "TOP.bus", "width": 8, "changes": [[0, "xxxxxxxx"], [10, 255]] }
//! ] }
//! ```
//!
//! A change value is an unsigned integer, a string of `0 1 x z` (most
//! significant first, left-extended like a VCD value change), or a real.
//! Idcodes are assigned in declaration order.
use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::waveform::{BitVector, MemoryHeader, MemoryWaveform};

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Failed to read trace file {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("Invalid trace: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Signal {0} has width 0")]
    InvalidWidth(String),

    #[error("Signal {0} is declared twice")]
    DuplicateSignal(String),

    #[error("Signal {path} at time {time}: {value:?} is not a {width}-bit logic string")]
    BadValue { path: String, time: u64, value: String, width: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraceValue {
    Integer(u64),
    Logic(String),
    Real(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSignal {
    pub path: String,
    pub width: usize,
    #[serde(default)]
    pub changes: Vec<(u64, TraceValue)>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trace {
    pub signals: Vec<TraceSignal>,
}

impl Trace {
    pub fn load(path: &Path) -> Result<Self, TraceError> {
        let text = fs::read_to_string(path)
            .map_err(|source| TraceError::Io { path: path.display().to_string(), source })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, TraceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the in-memory header and waveform holding every change
    pub fn into_waveform(self) -> Result<(MemoryHeader, MemoryWaveform), TraceError> {
        let mut header = MemoryHeader::new();
        let mut waveform = MemoryWaveform::new();

        for signal in self.signals {
            if signal.width == 0 {
                return Err(TraceError::InvalidWidth(signal.path));
            }
            let idcode = waveform.add_signal();
            if header.add_variable(signal.path.clone(), idcode, signal.width).is_some() {
                return Err(TraceError::DuplicateSignal(signal.path));
            }

            for (time, value) in signal.changes {
                match value {
                    TraceValue::Integer(value) => {
                        waveform.insert_vector(idcode, time, BitVector::from_u64(value, signal.width));
                    }
                    TraceValue::Logic(text) => {
                        let Some(vector) = BitVector::parse(&text, signal.width) else {
                            return Err(TraceError::BadValue {
                                path: signal.path,
                                time,
                                value: text,
                                width: signal.width,
                            });
                        };
                        waveform.insert_vector(idcode, time, vector);
                    }
                    TraceValue::Real(value) => {
                        waveform.insert_real(idcode, time, value);
                    }
                }
            }
        }

        debug!(
            "Loaded trace with {} signals over {} timestamps",
            waveform.signal_count(),
            waveform.timestamps().len()
        );
        Ok((header, waveform))
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;
    use crate::waveform::{SearchMode, VcdHeader, Waveform};

    const TRACE: &str = r#"{
        "signals": [
            { "path": "TOP.clk", "width": 1, "changes": [[0, 0], [5, 1], [10, "0"], [15, 1]] },
            { "path": "TOP.bus", "width": 8, "changes": [[0, "x"], [10, 255]] },
            { "path": "TOP.temp", "width": 64, "changes": [[5, 36.6]] }
        ]
    }"#;

    #[test]
    fn test_load_trace() {
        let (header, waveform) = Trace::from_json_str(TRACE).unwrap().into_waveform().unwrap();
        assert_eq!(waveform.timestamps(), &[0, 5, 10, 15]);

        let bus = header.get_variable("TOP.bus").unwrap();
        assert_eq!(bus.idcode(), 1);
        assert_eq!(bus.bit_width(), 8);

        let at_5 = waveform.search_value(bus.idcode(), 1).unwrap();
        assert!(at_5.is_unknown());
        assert_eq!(at_5.timestamp_index(), 0);

        let index = waveform.search_timestamp(12, SearchMode::Before).unwrap();
        let at_12 = waveform.search_value(bus.idcode(), index).unwrap();
        assert_eq!(at_12.vector().map(BitVector::value), Some(BigUint::from(255u32)));

        let temp = header.get_variable("TOP.temp").unwrap();
        assert_eq!(waveform.search_value(temp.idcode(), 3).and_then(|v| v.real()), Some(36.6));
    }

    #[test]
    fn test_rejects_bad_signals() {
        let bad_value = r#"{ "signals": [ { "path": "a", "width": 2, "changes": [[0, "101"]] } ] }"#;
        let err = Trace::from_json_str(bad_value).unwrap().into_waveform().unwrap_err();
        assert!(matches!(err, TraceError::BadValue { time: 0, width: 2, .. }));

        let zero_width = r#"{ "signals": [ { "path": "a", "width": 0 } ] }"#;
        let err = Trace::from_json_str(zero_width).unwrap().into_waveform().unwrap_err();
        assert!(matches!(err, TraceError::InvalidWidth(path) if path == "a"));

        let duplicate = r#"{ "signals": [ { "path": "a", "width": 1 }, { "path": "a", "width": 1 } ] }"#;
        let err = Trace::from_json_str(duplicate).unwrap().into_waveform().unwrap_err();
        assert!(matches!(err, TraceError::DuplicateSignal(path) if path == "a"));

        assert!(matches!(Trace::from_json_str("{"), Err(TraceError::Json(_))));
    }
}

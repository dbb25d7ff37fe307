//! VCD dumps produced by the simulator
//!
//! Every `$var` is declared under its dotted scope path plus its reference,
//! e.g. `TOP.gecko_nano_wrapper.inst.core.gecko_fetch_inst.pc`. When the
//! declaration carries an index (`$var wire 8 # exit_code [7:0] $end`) the
//! indexed spelling `TOP.exit_code[7:0]` resolves to the same variable.
//! Changes seen before the first `#<time>` are recorded at time 0.
use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use thiserror::Error;
use tracing::debug;
use vcd::{Command, IdCode, Parser, ReferenceIndex, ScopeItem, Value};

use crate::waveform::{BitVector, MemoryHeader, MemoryWaveform};

#[derive(Debug, Error)]
pub enum VcdError {
    #[error("Failed to read VCD file {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("Invalid VCD: {0}")]
    Parse(String),

    #[error("Value change for undeclared id code {0}")]
    UnknownIdCode(String),

    #[error("Variable {0} is declared with width 0")]
    InvalidWidth(String),

    #[error("Id code {code} at time {time}: {value:?} does not fit {width} bits")]
    BadValue { code: String, time: u64, value: String, width: usize },
}

/// Open and load the dump at `path`
pub fn load_vcd(path: &Path) -> Result<(MemoryHeader, MemoryWaveform), VcdError> {
    let file = File::open(path)
        .map_err(|source| VcdError::Io { path: path.display().to_string(), source })?;
    read_vcd(BufReader::new(file))
}

/// Load a whole dump into the in-memory header and waveform
pub fn read_vcd<R: BufRead>(reader: R) -> Result<(MemoryHeader, MemoryWaveform), VcdError> {
    let mut parser = Parser::new(reader);
    let vcd_header = parser.parse_header().map_err(|err| VcdError::Parse(err.to_string()))?;

    let mut header = MemoryHeader::new();
    let mut waveform = MemoryWaveform::new();
    let mut signals = HashMap::new();
    declare(&vcd_header.items, "", &mut header, &mut waveform, &mut signals)?;

    let mut time = 0;
    for command in parser {
        let command = command.map_err(|err| VcdError::Parse(err.to_string()))?;
        let (code, text) = match command {
            Command::Timestamp(timestamp) => {
                time = timestamp;
                continue;
            }
            Command::ChangeScalar(code, value) => (code, logic_char(value).to_string()),
            Command::ChangeVector(code, vector) => {
                (code, vector.iter().map(logic_char).collect::<String>())
            }
            Command::ChangeReal(code, value) => {
                let (idcode, _) = signal(&signals, code)?;
                waveform.insert_real(idcode, time, value);
                continue;
            }
            _ => continue,
        };

        let (idcode, width) = signal(&signals, code)?;
        let Some(vector) = BitVector::parse(&text, width) else {
            return Err(VcdError::BadValue { code: code.to_string(), time, value: text, width });
        };
        waveform.insert_vector(idcode, time, vector);
    }

    debug!(
        "Loaded VCD with {} variables over {} timestamps",
        header.len(),
        waveform.timestamps().len()
    );
    Ok((header, waveform))
}

fn declare(
    items: &[ScopeItem],
    scope: &str,
    header: &mut MemoryHeader,
    waveform: &mut MemoryWaveform,
    signals: &mut HashMap<IdCode, (usize, usize)>,
) -> Result<(), VcdError> {
    for item in items {
        match item {
            ScopeItem::Scope(inner) => {
                let path = join(scope, &inner.identifier);
                declare(&inner.items, &path, header, waveform, signals)?;
            }
            ScopeItem::Var(var) => {
                let path = join(scope, &var.reference);
                let width = var.size as usize;
                if width == 0 {
                    return Err(VcdError::InvalidWidth(path));
                }
                // Several variables may share one id code
                let (idcode, _) =
                    *signals.entry(var.code).or_insert_with(|| (waveform.add_signal(), width));
                if let Some(index) = &var.index {
                    header.add_variable(format!("{path}{}", index_suffix(index)), idcode, width);
                }
                header.add_variable(path, idcode, width);
            }
            _ => {}
        }
    }
    Ok(())
}

fn signal(
    signals: &HashMap<IdCode, (usize, usize)>,
    code: IdCode,
) -> Result<(usize, usize), VcdError> {
    signals.get(&code).copied().ok_or_else(|| VcdError::UnknownIdCode(code.to_string()))
}

fn join(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}

fn index_suffix(index: &ReferenceIndex) -> String {
    match index {
        ReferenceIndex::BitSelect(bit) => format!("[{bit}]"),
        ReferenceIndex::Range(msb, lsb) => format!("[{msb}:{lsb}]"),
    }
}

fn logic_char(value: Value) -> char {
    match value {
        Value::V0 => '0',
        Value::V1 => '1',
        Value::X => 'x',
        Value::Z => 'z',
    }
}

//! Waveform collaborator interface and an in-memory implementation
//!
//! The view never owns waveform storage. It asks a [`VcdHeader`] for the
//! idcode behind a hierarchical path, and a [`Waveform`] for the value that
//! idcode carries at a timestamp index. [`MemoryWaveform`] and
//! [`MemoryHeader`] are small reference implementations backed by sorted
//! vectors and a hash map.
use std::{collections::HashMap, fmt, ops::RangeInclusive};

use num_bigint::BigUint;
use num_traits::Zero;

/// Four-state logic level of one bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logic {
    Zero,
    One,
    Unknown,
    HighImpedance,
}

impl Logic {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Logic::Zero),
            '1' => Some(Logic::One),
            'x' | 'X' => Some(Logic::Unknown),
            'z' | 'Z' => Some(Logic::HighImpedance),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Logic::Zero => '0',
            Logic::One => '1',
            Logic::Unknown => 'x',
            Logic::HighImpedance => 'z',
        }
    }

    /// Numeric reading of the bit: `x` reads as 0 and `z` reads as 1
    pub fn value_bit(self) -> bool {
        matches!(self, Logic::One | Logic::HighImpedance)
    }
}

/// Fixed-width four-state vector, bit 0 is the least significant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: Vec<Logic>,
}

impl BitVector {
    /// Vector of `width` zero bits
    pub fn zeros(width: usize) -> Self {
        Self { bits: vec![Logic::Zero; width] }
    }

    /// Two-state vector holding the low `width` bits of `value`
    pub fn from_u64(value: u64, width: usize) -> Self {
        let bits = (0..width)
            .map(|i| if i < 64 && (value >> i) & 1 == 1 { Logic::One } else { Logic::Zero })
            .collect();
        Self { bits }
    }

    /// Parse a most-significant-first string of `0 1 x z` into a vector of
    /// `width` bits
    ///
    /// A shorter string is left-extended the way VCD value changes are:
    /// with `x` or `z` when that is the leading character, with `0`
    /// otherwise. Returns `None` for an empty string, a string longer than
    /// `width`, or any other character.
    pub fn parse(text: &str, width: usize) -> Option<Self> {
        let msb_first = text.chars().map(Logic::from_char).collect::<Option<Vec<_>>>()?;
        let leading = *msb_first.first()?;
        if msb_first.len() > width {
            return None;
        }

        let fill = match leading {
            Logic::Unknown | Logic::HighImpedance => leading,
            Logic::Zero | Logic::One => Logic::Zero,
        };
        let mut bits: Vec<Logic> = msb_first.into_iter().rev().collect();
        bits.resize(width, fill);
        Some(Self { bits })
    }

    pub fn get_bit_width(&self) -> usize {
        self.bits.len()
    }

    pub fn get_logic(&self, index: usize) -> Option<Logic> {
        self.bits.get(index).copied()
    }

    /// Two-state reading of one bit, `None` when it is `x`, `z`, or out of range
    pub fn get_bit(&self, index: usize) -> Option<bool> {
        match self.get_logic(index)? {
            Logic::Zero => Some(false),
            Logic::One => Some(true),
            Logic::Unknown | Logic::HighImpedance => None,
        }
    }

    /// Unsigned value of the vector, see [`Logic::value_bit`]
    pub fn value(&self) -> BigUint {
        self.collect_bits(Logic::value_bit)
    }

    /// Bits that are `x` or `z`
    pub fn mask(&self) -> BigUint {
        self.collect_bits(|logic| matches!(logic, Logic::Unknown | Logic::HighImpedance))
    }

    pub fn is_unknown(&self) -> bool {
        self.bits.contains(&Logic::Unknown)
    }

    pub fn is_high_impedance(&self) -> bool {
        self.bits.contains(&Logic::HighImpedance)
    }

    fn collect_bits(&self, set: impl Fn(Logic) -> bool) -> BigUint {
        let mut value = BigUint::zero();
        for (index, logic) in self.bits.iter().enumerate() {
            if set(*logic) {
                value.set_bit(index as u64, true);
            }
        }
        value
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bits.iter().rev().try_for_each(|logic| write!(f, "{}", logic.as_char()))
    }
}

/// Value of a signal at a timestamp, with the index of the change that set it
#[derive(Debug, Clone, PartialEq)]
pub enum WaveformValue {
    Vector(BitVector, usize),
    Real(f64, usize),
}

impl WaveformValue {
    pub fn vector(&self) -> Option<&BitVector> {
        match self {
            WaveformValue::Vector(vector, _) => Some(vector),
            WaveformValue::Real(..) => None,
        }
    }

    pub fn real(&self) -> Option<f64> {
        match self {
            WaveformValue::Vector(..) => None,
            WaveformValue::Real(value, _) => Some(*value),
        }
    }

    /// Timestamp index of the value change this value comes from
    pub fn timestamp_index(&self) -> usize {
        match self {
            WaveformValue::Vector(_, index) | WaveformValue::Real(_, index) => *index,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.vector().is_some_and(BitVector::is_unknown)
    }

    pub fn is_high_impedance(&self) -> bool {
        self.vector().is_some_and(BitVector::is_high_impedance)
    }
}

/// How [`Waveform::search_timestamp`] maps a time onto a timestamp index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Latest timestamp at or before the requested time
    Before,
    /// Earliest timestamp at or after the requested time
    After,
    /// Nearest timestamp, the earlier one on a tie
    Closest,
    /// Only the requested time itself
    Exact,
}

/// Read access to recorded value changes
pub trait Waveform {
    fn search_timestamp(&self, timestamp: u64, mode: SearchMode) -> Option<usize>;

    fn get_timestamp(&self, index: usize) -> Option<u64>;

    /// Value in effect at `timestamp_index`: the most recent change at or
    /// before it
    fn search_value(&self, idcode: usize, timestamp_index: usize) -> Option<WaveformValue>;
}

/// A declared variable of the waveform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcdVariable {
    name: String,
    idcode: usize,
    bit_width: usize,
}

impl VcdVariable {
    pub fn new(name: impl Into<String>, idcode: usize, bit_width: usize) -> Self {
        Self { name: name.into(), idcode, bit_width }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn idcode(&self) -> usize {
        self.idcode
    }

    pub fn bit_width(&self) -> usize {
        self.bit_width
    }
}

/// Resolves hierarchical paths to variables
pub trait VcdHeader {
    fn get_variable(&self, path: &str) -> Option<VcdVariable>;
}

#[derive(Debug, Clone, PartialEq)]
enum Sample {
    Vector(BitVector),
    Real(f64),
}

/// In-memory waveform built from explicit value changes
#[derive(Debug, Clone, Default)]
pub struct MemoryWaveform {
    /// Sorted, without duplicates
    timestamps: Vec<u64>,
    /// Per idcode, sorted by time
    changes: Vec<Vec<(u64, Sample)>>,
}

impl MemoryWaveform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next idcode
    pub fn add_signal(&mut self) -> usize {
        self.changes.push(Vec::new());
        self.changes.len() - 1
    }

    pub fn signal_count(&self) -> usize {
        self.changes.len()
    }

    /// Record that `idcode` takes `value` from `timestamp` on. A second change
    /// at the same time replaces the first. Returns `false` for an unknown
    /// idcode.
    pub fn insert_vector(&mut self, idcode: usize, timestamp: u64, value: BitVector) -> bool {
        self.insert(idcode, timestamp, Sample::Vector(value))
    }

    pub fn insert_real(&mut self, idcode: usize, timestamp: u64, value: f64) -> bool {
        self.insert(idcode, timestamp, Sample::Real(value))
    }

    /// First and last recorded timestamps
    pub fn get_timestamp_range(&self) -> Option<RangeInclusive<u64>> {
        Some(*self.timestamps.first()?..=*self.timestamps.last()?)
    }

    pub fn timestamps(&self) -> &[u64] {
        &self.timestamps
    }

    fn insert(&mut self, idcode: usize, timestamp: u64, sample: Sample) -> bool {
        let Some(changes) = self.changes.get_mut(idcode) else {
            return false;
        };
        match changes.binary_search_by_key(&timestamp, |(time, _)| *time) {
            Ok(position) => changes[position].1 = sample,
            Err(position) => changes.insert(position, (timestamp, sample)),
        }
        if let Err(position) = self.timestamps.binary_search(&timestamp) {
            self.timestamps.insert(position, timestamp);
        }
        true
    }
}

impl Waveform for MemoryWaveform {
    fn search_timestamp(&self, timestamp: u64, mode: SearchMode) -> Option<usize> {
        let before = || self.timestamps.partition_point(|time| *time <= timestamp).checked_sub(1);
        let after = || {
            let position = self.timestamps.partition_point(|time| *time < timestamp);
            (position < self.timestamps.len()).then_some(position)
        };

        match mode {
            SearchMode::Exact => self.timestamps.binary_search(&timestamp).ok(),
            SearchMode::Before => before(),
            SearchMode::After => after(),
            SearchMode::Closest => match (before(), after()) {
                (Some(b), Some(a)) => {
                    let below = timestamp - self.timestamps[b];
                    let above = self.timestamps[a] - timestamp;
                    Some(if above < below { a } else { b })
                }
                (b, a) => b.or(a),
            },
        }
    }

    fn get_timestamp(&self, index: usize) -> Option<u64> {
        self.timestamps.get(index).copied()
    }

    fn search_value(&self, idcode: usize, timestamp_index: usize) -> Option<WaveformValue> {
        let timestamp = self.get_timestamp(timestamp_index)?;
        let changes = self.changes.get(idcode)?;
        let position = changes.partition_point(|(time, _)| *time <= timestamp).checked_sub(1)?;
        let (time, sample) = &changes[position];
        let index = self.timestamps.binary_search(time).ok()?;
        Some(match sample {
            Sample::Vector(vector) => WaveformValue::Vector(vector.clone(), index),
            Sample::Real(value) => WaveformValue::Real(*value, index),
        })
    }
}

/// In-memory path to variable table
#[derive(Debug, Clone, Default)]
pub struct MemoryHeader {
    variables: HashMap<String, VcdVariable>,
}

impl MemoryHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `path`. Returns the variable it replaces, if any.
    pub fn add_variable(
        &mut self,
        path: impl Into<String>,
        idcode: usize,
        bit_width: usize,
    ) -> Option<VcdVariable> {
        let path = path.into();
        let variable = VcdVariable::new(path.clone(), idcode, bit_width);
        self.variables.insert(path, variable)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl VcdHeader for MemoryHeader {
    fn get_variable(&self, path: &str) -> Option<VcdVariable> {
        self.variables.get(path).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waveform_with_times(times: &[u64]) -> (MemoryWaveform, usize) {
        let mut waveform = MemoryWaveform::new();
        let idcode = waveform.add_signal();
        for (i, time) in times.iter().enumerate() {
            waveform.insert_vector(idcode, *time, BitVector::from_u64(i as u64, 8));
        }
        (waveform, idcode)
    }

    #[test]
    fn test_bitvector_parse_extension() {
        assert_eq!(BitVector::parse("101", 8).map(|bv| bv.to_string()), Some("00000101".into()));
        assert_eq!(BitVector::parse("x1", 4).map(|bv| bv.to_string()), Some("xxx1".into()));
        assert_eq!(BitVector::parse("Z", 3).map(|bv| bv.to_string()), Some("zzz".into()));
        assert_eq!(BitVector::parse("", 3), None);
        assert_eq!(BitVector::parse("10101", 4), None);
        assert_eq!(BitVector::parse("102", 4), None);
    }

    #[test]
    fn test_bitvector_value_and_mask() {
        let bv = BitVector::parse("1zx0", 4).unwrap();
        assert_eq!(bv.value(), BigUint::from(0b1100u32));
        assert_eq!(bv.mask(), BigUint::from(0b0110u32));
        assert!(bv.is_unknown());
        assert!(bv.is_high_impedance());
        assert_eq!(bv.get_bit(0), Some(false));
        assert_eq!(bv.get_bit(1), None);
        assert_eq!(bv.get_bit(3), Some(true));
        assert_eq!(bv.get_logic(2), Some(Logic::HighImpedance));
        assert_eq!(bv.get_logic(4), None);
    }

    #[test]
    fn test_bitvector_from_u64() {
        let bv = BitVector::from_u64(0xdead_beef, 32);
        assert_eq!(bv.value(), BigUint::from(0xdead_beefu32));
        assert_eq!(BitVector::from_u64(0x1ff, 8).value(), BigUint::from(0xffu32));
        assert_eq!(BitVector::from_u64(1, 70).get_bit_width(), 70);
        assert!(BitVector::zeros(4).value().is_zero());
    }

    #[test]
    fn test_search_timestamp_modes() {
        let (waveform, _) = waveform_with_times(&[10, 20, 30]);

        assert_eq!(waveform.search_timestamp(20, SearchMode::Exact), Some(1));
        assert_eq!(waveform.search_timestamp(25, SearchMode::Exact), None);

        assert_eq!(waveform.search_timestamp(25, SearchMode::Before), Some(1));
        assert_eq!(waveform.search_timestamp(30, SearchMode::Before), Some(2));
        assert_eq!(waveform.search_timestamp(5, SearchMode::Before), None);
        assert_eq!(waveform.search_timestamp(99, SearchMode::Before), Some(2));

        assert_eq!(waveform.search_timestamp(25, SearchMode::After), Some(2));
        assert_eq!(waveform.search_timestamp(5, SearchMode::After), Some(0));
        assert_eq!(waveform.search_timestamp(31, SearchMode::After), None);

        assert_eq!(waveform.search_timestamp(24, SearchMode::Closest), Some(1));
        assert_eq!(waveform.search_timestamp(26, SearchMode::Closest), Some(2));
        assert_eq!(waveform.search_timestamp(25, SearchMode::Closest), Some(1));
        assert_eq!(waveform.search_timestamp(0, SearchMode::Closest), Some(0));
        assert_eq!(waveform.search_timestamp(1000, SearchMode::Closest), Some(2));
    }

    #[test]
    fn test_search_value_holds_last_change() {
        let mut waveform = MemoryWaveform::new();
        let slow = waveform.add_signal();
        let fast = waveform.add_signal();
        waveform.insert_vector(slow, 0, BitVector::from_u64(7, 4));
        for time in [0, 5, 10, 15] {
            waveform.insert_vector(fast, time, BitVector::from_u64(time, 4));
        }

        let value = waveform.search_value(slow, 3).unwrap();
        assert_eq!(value.vector().map(BitVector::value), Some(BigUint::from(7u32)));
        assert_eq!(value.timestamp_index(), 0);

        let value = waveform.search_value(fast, 2).unwrap();
        assert_eq!(value.timestamp_index(), 2);

        assert_eq!(waveform.search_value(fast, 4), None);
        assert_eq!(waveform.search_value(9, 0), None);
        assert_eq!(waveform.get_timestamp_range(), Some(0..=15));
    }

    #[test]
    fn test_search_value_before_first_change() {
        let mut waveform = MemoryWaveform::new();
        let early = waveform.add_signal();
        let late = waveform.add_signal();
        waveform.insert_vector(early, 0, BitVector::from_u64(1, 1));
        waveform.insert_vector(late, 10, BitVector::from_u64(1, 1));
        assert_eq!(waveform.search_value(late, 0), None);
        assert!(waveform.search_value(late, 1).is_some());
    }

    #[test]
    fn test_real_values() {
        let mut waveform = MemoryWaveform::new();
        let idcode = waveform.add_signal();
        assert!(waveform.insert_real(idcode, 4, 1.5));
        assert!(!waveform.insert_real(idcode + 1, 4, 1.5));
        let value = waveform.search_value(idcode, 0).unwrap();
        assert_eq!(value.real(), Some(1.5));
        assert_eq!(value.vector(), None);
        assert!(!value.is_unknown());
    }

    #[test]
    fn test_header_lookup() {
        let mut header = MemoryHeader::new();
        assert!(header.add_variable("TOP.clk", 0, 1).is_none());
        assert!(header.add_variable("TOP.clk", 1, 1).is_some());
        let variable = header.get_variable("TOP.clk").unwrap();
        assert_eq!(variable.idcode(), 1);
        assert_eq!(variable.name(), "TOP.clk");
        assert_eq!(variable.bit_width(), 1);
        assert!(header.get_variable("TOP.rst").is_none());
        assert_eq!(header.len(), 1);
    }
}

use thiserror::Error;

/// Failures that abort a render pass
///
/// The snapshot is built all-or-nothing, so any of these means nothing was
/// drawn into the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("No timestamp at or before cursor {0}")]
    TimestampNotFound(u64),

    #[error("Signal not found in waveform header: {0}")]
    SignalNotFound(String),

    #[error("No value for {path} at timestamp index {timestamp_index}")]
    ValueNotFound { path: String, timestamp_index: usize },

    #[error("Value of {0} is not a bit vector")]
    VectorNotFound(String),
}

use thiserror::Error;

/// Errors raised by the event store and its mutation helpers
#[derive(Debug, Error)]
pub enum StoreError {
    /// Start time is not strictly earlier than end time
    #[error("start time {start} must be earlier than end time {end}")]
    InvalidTimeRange { start: String, end: String },

    /// The underlying key-value storage rejected a read or write
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors surfaced by the calendar view state
#[derive(Debug, Error)]
pub enum ViewError {
    /// Jump-to-date input was not a valid `YYYY-MM-DD` date
    #[error("invalid date picker value: {0:?}")]
    InvalidPickerDate(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}

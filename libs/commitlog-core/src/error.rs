#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// Read of an offset that has not been assigned yet.
    #[error("offset not found: {offset}")]
    OffsetNotFound { offset: u64 },

    /// Append rejected because the log already holds `max_records` records.
    #[error("log is full: capacity of {max_records} records reached")]
    CapacityExceeded { max_records: usize },
}

impl LogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LogError::OffsetNotFound { .. })
    }
}

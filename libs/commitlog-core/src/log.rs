use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::LogConfig;
use crate::error::LogError;
use crate::record::Record;

// ═══════════════════════════════════════════════════════════════
//  RecordLog
// ═══════════════════════════════════════════════════════════════

/// Append/read access to an offset-addressed log.
///
/// The HTTP adapter only sees this trait, so it can hold the log as
/// `Arc<dyn RecordLog>` without knowing the concrete storage.
pub trait RecordLog: Send + Sync {
    /// Append a record and return the offset assigned to it.
    /// The `offset` field of the input is ignored.
    fn append(&self, record: Record) -> Result<u64, LogError>;

    /// Read the record stored at `offset`.
    fn read(&self, offset: u64) -> Result<Record, LogError>;

    /// Number of records appended so far (== next offset).
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ═══════════════════════════════════════════════════════════════
//  Log
// ═══════════════════════════════════════════════════════════════

/// In-memory append-only log.
///
/// A single lock covers the whole sequence: append takes it exclusively for
/// length check + push, read takes it shared for bounds check + clone.
/// The record at index `i` always has `offset == i`.
#[derive(Debug)]
pub struct Log {
    records: RwLock<Vec<Record>>,
    max_records: usize,
}

impl Default for Log {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

impl Log {
    pub fn new(config: LogConfig) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            max_records: config.max_records,
        }
    }

    /// Capacity ceiling this log was created with.
    pub fn capacity(&self) -> usize {
        self.max_records
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<Record>> {
        match self.records.read() {
            Ok(g) => g,
            Err(poisoned) => {
                tracing::warn!("log read lock was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<Record>> {
        match self.records.write() {
            Ok(g) => g,
            Err(poisoned) => {
                tracing::warn!("log write lock was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

impl RecordLog for Log {
    fn append(&self, mut record: Record) -> Result<u64, LogError> {
        let mut records = self.write_guard();
        if records.len() >= self.max_records {
            return Err(LogError::CapacityExceeded {
                max_records: self.max_records,
            });
        }
        let offset = records.len() as u64;
        record.offset = offset;
        records.push(record);
        Ok(offset)
    }

    fn read(&self, offset: u64) -> Result<Record, LogError> {
        let records = self.read_guard();
        usize::try_from(offset)
            .ok()
            .and_then(|i| records.get(i))
            .cloned()
            .ok_or(LogError::OffsetNotFound { offset })
    }

    fn len(&self) -> u64 {
        self.read_guard().len() as u64
    }
}

//! In-memory append-only record log.
//!
//! Records are opaque byte payloads addressed by the offset the log assigns
//! at append time. Offsets start at 0, are contiguous and never reused.

pub mod config;
pub mod error;
pub mod log;
pub mod record;

pub use config::LogConfig;
pub use error::LogError;
pub use log::{Log, RecordLog};
pub use record::Record;

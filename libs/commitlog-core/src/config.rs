use serde::Deserialize;

fn default_max_records() -> usize {
    1_000_000
}

/// Log settings, parsed from the `[log]` table of the server config.
///
/// The log lives entirely in memory and is gone on restart. `max_records`
/// bounds its growth: once reached, appends fail with
/// [`LogError::CapacityExceeded`](crate::LogError::CapacityExceeded).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_max_records")]
    pub max_records: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_records: default_max_records(),
        }
    }
}

impl LogConfig {
    /// No ceiling other than available memory.
    pub fn unbounded() -> Self {
        Self {
            max_records: usize::MAX,
        }
    }
}

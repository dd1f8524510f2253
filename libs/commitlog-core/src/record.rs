/// A single entry of the log.
///
/// `value` is opaque to the log. `offset` is owned by the log: whatever the
/// caller puts there is overwritten on append.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub value: Vec<u8>,
    pub offset: u64,
}

impl Record {
    /// Record with the given payload and an unassigned (zero) offset.
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
            offset: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<Vec<u8>> for Record {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<&[u8]> for Record {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Record {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

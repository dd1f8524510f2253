//! JSON bodies of the produce/consume endpoints.
//!
//! Record payloads travel as standard (padded) base64 strings.

use serde::{Deserialize, Serialize};

use commitlog_core::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRecord {
    /// Missing or `null` decodes to an empty payload.
    #[serde(default, with = "base64_bytes")]
    pub value: Vec<u8>,
    /// Ignored on produce; the log assigns offsets.
    #[serde(default)]
    pub offset: u64,
}

impl From<WireRecord> for Record {
    fn from(r: WireRecord) -> Self {
        Record {
            value: r.value,
            offset: r.offset,
        }
    }
}

impl From<Record> for WireRecord {
    fn from(r: Record) -> Self {
        WireRecord {
            value: r.value,
            offset: r.offset,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProduceRequest {
    #[serde(default)]
    pub record: WireRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduceResponse {
    pub offset: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsumeRequest {
    #[serde(default)]
    pub offset: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumeResponse {
    pub record: WireRecord,
}

mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => STANDARD
                .decode(encoded)
                .map_err(|e| serde::de::Error::custom(format!("value is not base64: {e}"))),
            None => Ok(Vec::new()),
        }
    }
}

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored URL mapping in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// The original URL that was shortened.
    pub original_url: String,
    /// How many times the short code has been followed.
    pub click_count: u64,
    /// When the mapping was created (UTC).
    pub created_at: Timestamp,
}

impl MappingRecord {
    /// Creates a fresh record with no clicks, stamped with the current time.
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            click_count: 0,
            created_at: Timestamp::now(),
        }
    }
}

/// Usage statistics for a short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlStats {
    pub original_url: String,
    pub click_count: u64,
    pub created_at: Timestamp,
}

impl From<MappingRecord> for UrlStats {
    fn from(record: MappingRecord) -> Self {
        Self {
            original_url: record.original_url,
            click_count: record.click_count,
            created_at: record.created_at,
        }
    }
}

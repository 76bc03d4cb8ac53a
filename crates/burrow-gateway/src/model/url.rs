use burrow_core::UrlStats;
use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Deserialize)]
pub struct CreateUrlRequest {
    /// `None` only when the key is absent. A present `null` or any other
    /// non-string value is kept so it can be rejected as an invalid URL.
    #[serde(default, deserialize_with = "present")]
    pub url: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[derive(Serialize)]
pub struct CreateUrlResponse {
    pub short_code: String,
    pub short_url: String,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub clicks: u64,
    pub created_at: Timestamp,
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            url: stats.original_url,
            clicks: stats.click_count,
            created_at: stats.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

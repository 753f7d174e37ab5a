use std::io;

use serde::Deserialize;
use serde_json::Value;

pub const EMPTY_FEED_PLACEHOLDER: &str = "No transactions yet...";

#[derive(Debug, Clone, Deserialize)]
pub struct FeedView {
    pub state: String,
    pub locale: String,
    pub timezone: String,
    pub source: FeedSourceView,
    pub rows: Vec<FeedRowView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedSourceView {
    pub kind: String,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedRowView {
    pub display_id: String,
    pub display_size: String,
    pub display_fee: String,
    pub fee_severity: String,
    pub display_time: String,
}

impl FeedView {
    pub fn from_data(data: &Value) -> io::Result<Self> {
        let view = Self::deserialize(data)
            .map_err(|error| io::Error::other(format!("feed output is malformed: {error}")))?;
        if view.state == "populated" && view.rows.is_empty() {
            return Err(io::Error::other("populated feed output requires rows"));
        }
        Ok(view)
    }

    pub fn is_empty(&self) -> bool {
        self.state == "empty"
    }
}

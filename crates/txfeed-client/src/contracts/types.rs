use serde::Serialize;

use crate::feed::model::TransactionViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedState {
    Empty,
    Populated,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedData {
    pub state: FeedState,
    pub transaction_count: usize,
    pub locale: String,
    pub timezone: String,
    pub source: FeedSourceInfo,
    pub rows: Vec<TransactionViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedSourceInfo {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Upstream fee bucket for a transaction.
///
/// Values outside the known set are kept verbatim in `Unrecognized` so the
/// formatter can reject them instead of guessing a severity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeeClassification {
    Cheap,
    Normal,
    Expensive,
    Unrecognized(String),
}

impl FeeClassification {
    pub fn parse(value: &str) -> Self {
        match value {
            "CHEAP" => Self::Cheap,
            "NORMAL" => Self::Normal,
            "EXPENSIVE" => Self::Expensive,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Cheap => "CHEAP",
            Self::Normal => "NORMAL",
            Self::Expensive => "EXPENSIVE",
            Self::Unrecognized(value) => value.as_str(),
        }
    }
}

impl From<String> for FeeClassification {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<FeeClassification> for String {
    fn from(value: FeeClassification) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for FeeClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeSeverity {
    Low,
    Medium,
    High,
}

impl FeeSeverity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for FeeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    #[serde(rename = "avgFeePerVByte")]
    pub avg_fee_per_vbyte: f64,
    #[serde(rename = "medianFeePerVByte")]
    pub median_fee_per_vbyte: f64,
    #[serde(rename = "transactionsCount")]
    pub transactions_count: u64,
    #[serde(rename = "outliersCount")]
    pub outliers_count: u64,
}

/// One observed transaction as delivered by the upstream producer.
///
/// Built by `feed::parse`, which owns the mapping from the camelCase wire
/// names.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub fee_per_vbyte: f64,
    pub total_fee: f64,
    pub size: u64,
    /// Milliseconds since the Unix epoch, UTC.
    pub timestamp: i64,
    pub pattern_types: BTreeSet<String>,
    pub fee_classification: FeeClassification,
    pub is_outlier: bool,
    pub window_snapshot: WindowSnapshot,
}

/// Display values for one transaction, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionViewModel {
    pub display_id: String,
    pub display_size: String,
    pub display_fee: String,
    pub fee_severity: FeeSeverity,
    pub display_time: String,
}

#[cfg(test)]
mod tests {
    use super::FeeClassification;

    #[test]
    fn known_classifications_parse_exactly() {
        assert_eq!(FeeClassification::parse("CHEAP"), FeeClassification::Cheap);
        assert_eq!(FeeClassification::parse("NORMAL"), FeeClassification::Normal);
        assert_eq!(
            FeeClassification::parse("EXPENSIVE"),
            FeeClassification::Expensive
        );
    }

    #[test]
    fn other_spellings_stay_unrecognized() {
        assert_eq!(
            FeeClassification::parse("cheap"),
            FeeClassification::Unrecognized("cheap".to_string())
        );
        assert_eq!(FeeClassification::parse("").as_str(), "");
    }

    #[test]
    fn classification_serializes_as_wire_string() {
        let encoded = serde_json::to_string(&FeeClassification::Expensive);
        assert!(encoded.is_ok());
        if let Ok(text) = encoded {
            assert_eq!(text, "\"EXPENSIVE\"");
        }
    }
}

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const FEED_HELP_COMMAND: &str = "txfeed show --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `txfeed {cmd} --help` for usage."),
            None => "Run `txfeed --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_feed_format(message: &str, received_format: &str) -> Self {
        Self::new(
            "invalid_feed_format",
            message,
            vec![
                "Provide the feed as one top-level JSON array of transaction objects.".to_string(),
                format!("Run `{FEED_HELP_COMMAND}` to review the expected fields."),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array"],
        }))
    }

    /// A classification outside CHEAP/NORMAL/EXPENSIVE. Never mapped to a
    /// default severity.
    pub fn unrecognized_classification(row: usize, value: &str) -> Self {
        Self::new(
            "unrecognized_classification",
            &format!("Transaction {row} has unrecognized fee classification `{value}`."),
            vec![
                "Use one of CHEAP, NORMAL, or EXPENSIVE for feeClassification.".to_string(),
                "Fix the upstream producer; no rows were rendered.".to_string(),
            ],
        )
        .with_data(json!({
            "row": row,
            "value": value,
            "supported_values": ["CHEAP", "NORMAL", "EXPENSIVE"],
        }))
    }

    pub fn invalid_transaction_data(row: usize, field: &str, detail: &str) -> Self {
        Self::new(
            "invalid_transaction_data",
            &format!("Transaction {row} has invalid `{field}`: {detail}"),
            vec![
                "Validate transaction records upstream before formatting.".to_string(),
                format!("Run `{FEED_HELP_COMMAND}` to review field requirements."),
            ],
        )
        .with_data(json!({
            "row": row,
            "field": field,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

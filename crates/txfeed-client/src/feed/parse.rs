use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::feed::model::{FeeClassification, Transaction, WindowSnapshot};
use crate::{ClientError, ClientResult};

/// Parses a top-level JSON array of upstream transaction records.
///
/// Field names follow the producer's camelCase wire format. Classification
/// strings are not judged here; unknown ones surface in the formatter.
pub fn parse_transactions(content: &str) -> ClientResult<Vec<Transaction>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_feed_format(
            "Feed source is empty.",
            "empty",
        ));
    }

    let parsed = serde_json::from_str::<Value>(trimmed).map_err(|_| {
        ClientError::invalid_feed_format("Invalid JSON input. Provide a valid JSON array.", "unknown")
    })?;

    let Some(items) = parsed.as_array() else {
        return Err(ClientError::invalid_feed_format(
            "Feed input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    };

    let mut transactions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let row = index + 1;
        let Some(object) = item.as_object() else {
            return Err(ClientError::invalid_transaction_data(
                row,
                "transaction",
                "must be a JSON object.",
            ));
        };
        transactions.push(parse_transaction(row, object)?);
    }

    Ok(transactions)
}

fn parse_transaction(row: usize, object: &Map<String, Value>) -> ClientResult<Transaction> {
    let id = required_str(row, object, "id")?;
    let fee_per_vbyte = required_f64(row, object, "feePerVByte")?;
    let total_fee = required_f64(row, object, "totalFee")?;
    let size = read_size(row, object)?;
    let timestamp = required_i64(row, object, "timestamp")?;
    let fee_classification = FeeClassification::parse(&required_str(row, object, "feeClassification")?);
    let pattern_types = read_pattern_types(row, object)?;
    let is_outlier = match object.get("isOutlier") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err(type_error(row, "isOutlier", "a boolean")),
    };
    let window_snapshot = match object.get("windowSnapshot") {
        None | Some(Value::Null) => WindowSnapshot::default(),
        Some(value) => serde_json::from_value::<WindowSnapshot>(value.clone()).map_err(|_| {
            ClientError::invalid_transaction_data(
                row,
                "windowSnapshot",
                "must carry numeric avgFeePerVByte, medianFeePerVByte, transactionsCount, and outliersCount.",
            )
        })?,
    };

    Ok(Transaction {
        id,
        fee_per_vbyte,
        total_fee,
        size,
        timestamp,
        pattern_types,
        fee_classification,
        is_outlier,
        window_snapshot,
    })
}

fn required_str(row: usize, object: &Map<String, Value>, field: &str) -> ClientResult<String> {
    match object.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        None | Some(Value::Null) => Err(missing_error(row, field)),
        Some(_) => Err(type_error(row, field, "a string")),
    }
}

fn required_f64(row: usize, object: &Map<String, Value>, field: &str) -> ClientResult<f64> {
    match object.get(field) {
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| type_error(row, field, "a number")),
        None | Some(Value::Null) => Err(missing_error(row, field)),
        Some(_) => Err(type_error(row, field, "a number")),
    }
}

fn required_i64(row: usize, object: &Map<String, Value>, field: &str) -> ClientResult<i64> {
    match object.get(field) {
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or_else(|| type_error(row, field, "an integer")),
        None | Some(Value::Null) => Err(missing_error(row, field)),
        Some(_) => Err(type_error(row, field, "an integer")),
    }
}

fn read_size(row: usize, object: &Map<String, Value>) -> ClientResult<u64> {
    match object.get("size") {
        Some(Value::Number(number)) => {
            if let Some(size) = number.as_u64() {
                return Ok(size);
            }
            if number.as_f64().is_some_and(|value| value < 0.0) {
                return Err(ClientError::invalid_transaction_data(
                    row,
                    "size",
                    "must not be negative.",
                ));
            }
            Err(type_error(row, "size", "a whole number of bytes"))
        }
        None | Some(Value::Null) => Err(missing_error(row, "size")),
        Some(_) => Err(type_error(row, "size", "a whole number of bytes")),
    }
}

fn read_pattern_types(row: usize, object: &Map<String, Value>) -> ClientResult<BTreeSet<String>> {
    let Some(raw) = object.get("patternTypes") else {
        return Ok(BTreeSet::new());
    };
    let Some(items) = raw.as_array() else {
        if raw.is_null() {
            return Ok(BTreeSet::new());
        }
        return Err(type_error(row, "patternTypes", "an array of strings"));
    };

    let mut tags = BTreeSet::new();
    for item in items {
        let Some(tag) = item.as_str() else {
            return Err(type_error(row, "patternTypes", "an array of strings"));
        };
        tags.insert(tag.to_string());
    }
    Ok(tags)
}

fn missing_error(row: usize, field: &str) -> ClientError {
    ClientError::invalid_transaction_data(row, field, "is required.")
}

fn type_error(row: usize, field: &str, expected: &str) -> ClientError {
    ClientError::invalid_transaction_data(row, field, &format!("must be {expected}."))
}

use tracing::{debug, warn};

use crate::feed::model::{FeeClassification, FeeSeverity, Transaction, TransactionViewModel};
use crate::feed::time::TimeDisplay;
use crate::{ClientError, ClientResult};

pub const DISPLAY_ID_CHARS: usize = 30;
pub const DISPLAY_ID_SUFFIX: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOutcome {
    Empty,
    Populated(Vec<TransactionViewModel>),
}

impl FeedOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn rows(&self) -> &[TransactionViewModel] {
        match self {
            Self::Empty => &[],
            Self::Populated(rows) => rows,
        }
    }

    pub fn into_rows(self) -> Vec<TransactionViewModel> {
        match self {
            Self::Empty => Vec::new(),
            Self::Populated(rows) => rows,
        }
    }
}

/// Derives display values for every transaction, in input order.
///
/// The first malformed record fails the whole call; rows are 1-based in the
/// returned error.
pub fn format_feed(transactions: &[Transaction], time: &TimeDisplay) -> ClientResult<FeedOutcome> {
    debug!(
        count = transactions.len(),
        locale = time.locale.tag(),
        zone = %time.zone,
        "formatting transaction feed"
    );

    if transactions.is_empty() {
        return Ok(FeedOutcome::Empty);
    }

    let mut rows = Vec::with_capacity(transactions.len());
    for (index, transaction) in transactions.iter().enumerate() {
        let view = format_transaction(index + 1, transaction, time).inspect_err(|error| {
            warn!(row = index + 1, code = %error.code, "rejected transaction");
        })?;
        rows.push(view);
    }

    Ok(FeedOutcome::Populated(rows))
}

pub fn format_transaction(
    row: usize,
    transaction: &Transaction,
    time: &TimeDisplay,
) -> ClientResult<TransactionViewModel> {
    ensure_non_negative_finite(row, "feePerVByte", transaction.fee_per_vbyte)?;
    ensure_non_negative_finite(row, "totalFee", transaction.total_fee)?;

    let fee_severity = fee_severity(&transaction.fee_classification)
        .ok_or_else(|| {
            ClientError::unrecognized_classification(row, transaction.fee_classification.as_str())
        })?;
    let display_time = time
        .format_time_of_day(transaction.timestamp)
        .ok_or_else(|| {
            ClientError::invalid_transaction_data(
                row,
                "timestamp",
                "must be a millisecond epoch within the supported date range.",
            )
        })?;

    Ok(TransactionViewModel {
        display_id: display_id(&transaction.id),
        display_size: display_size(transaction.size),
        display_fee: display_fee(transaction.fee_per_vbyte),
        fee_severity,
        display_time,
    })
}

pub fn fee_severity(classification: &FeeClassification) -> Option<FeeSeverity> {
    match classification {
        FeeClassification::Cheap => Some(FeeSeverity::Low),
        FeeClassification::Normal => Some(FeeSeverity::Medium),
        FeeClassification::Expensive => Some(FeeSeverity::High),
        FeeClassification::Unrecognized(_) => None,
    }
}

/// First 30 characters plus `...`, applied even when the id is shorter.
pub fn display_id(id: &str) -> String {
    let mut truncated = id.chars().take(DISPLAY_ID_CHARS).collect::<String>();
    truncated.push_str(DISPLAY_ID_SUFFIX);
    truncated
}

pub fn display_size(size: u64) -> String {
    format!("{size} bytes")
}

pub fn display_fee(fee_per_vbyte: f64) -> String {
    // Negative zero would otherwise print as `-0.00`.
    let fee = if fee_per_vbyte == 0.0 { 0.0 } else { fee_per_vbyte };
    format!("{fee:.2} sat/byte")
}

fn ensure_non_negative_finite(row: usize, field: &str, value: f64) -> ClientResult<()> {
    if !value.is_finite() {
        return Err(ClientError::invalid_transaction_data(
            row,
            field,
            "must be a finite number.",
        ));
    }
    if value < 0.0 {
        return Err(ClientError::invalid_transaction_data(
            row,
            field,
            "must not be negative.",
        ));
    }
    Ok(())
}

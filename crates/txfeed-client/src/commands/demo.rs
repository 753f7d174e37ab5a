use std::collections::BTreeSet;

use crate::ClientResult;
use crate::commands::common::feed_data;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::FeedSourceInfo;
use crate::feed::format_feed;
use crate::feed::model::{FeeClassification, Transaction, WindowSnapshot};
use crate::settings::FeedSettings;

// 2024-01-01 10:00, 11:00 and 12:00 UTC.
const SAMPLE_TIMESTAMPS_MS: [i64; 3] = [1_704_103_200_000, 1_704_106_800_000, 1_704_110_400_000];

pub fn run(settings: FeedSettings) -> ClientResult<SuccessEnvelope> {
    let transactions = sample_transactions();
    let outcome = format_feed(&transactions, &settings.time)?;
    let data = feed_data(
        outcome,
        &settings,
        FeedSourceInfo {
            kind: "sample".to_string(),
            path: None,
        },
    );
    success("demo", data)
}

/// Three transactions, one per fee tier, most recent last.
pub fn sample_transactions() -> Vec<Transaction> {
    let snapshot = WindowSnapshot {
        avg_fee_per_vbyte: 20.21,
        median_fee_per_vbyte: 20.5,
        transactions_count: 3,
        outliers_count: 0,
    };

    [
        ('1', 123_u64, 10.123, FeeClassification::Cheap),
        ('2', 456, 20.5, FeeClassification::Normal),
        ('3', 789, 30.0, FeeClassification::Expensive),
    ]
    .into_iter()
    .zip(SAMPLE_TIMESTAMPS_MS)
    .map(
        |((digit, size, fee_per_vbyte, fee_classification), timestamp)| Transaction {
            id: digit.to_string().repeat(64),
            fee_per_vbyte,
            total_fee: (fee_per_vbyte * size as f64).round(),
            size,
            timestamp,
            pattern_types: BTreeSet::new(),
            fee_classification,
            is_outlier: false,
            window_snapshot: snapshot.clone(),
        },
    )
    .collect()
}

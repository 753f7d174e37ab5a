#![allow(dead_code)]

use std::collections::BTreeSet;

use txfeed_client::feed::{
    FeeClassification, TimeDisplay, TimeLocale, TimeZoneSetting, Transaction, WindowSnapshot,
};

pub const TEN_AM_UTC_MS: i64 = 1_704_103_200_000;
pub const ELEVEN_AM_UTC_MS: i64 = 1_704_106_800_000;
pub const NOON_UTC_MS: i64 = 1_704_110_400_000;

pub fn utc_us() -> TimeDisplay {
    TimeDisplay::new(TimeLocale::EN_US, TimeZoneSetting::Utc)
}

pub fn transaction(
    id: String,
    size: u64,
    fee_per_vbyte: f64,
    timestamp: i64,
    fee_classification: FeeClassification,
) -> Transaction {
    Transaction {
        id,
        fee_per_vbyte,
        total_fee: 0.0,
        size,
        timestamp,
        pattern_types: BTreeSet::new(),
        fee_classification,
        is_outlier: false,
        window_snapshot: WindowSnapshot::default(),
    }
}

pub fn three_tier_feed() -> Vec<Transaction> {
    vec![
        transaction(
            "1".repeat(64),
            123,
            10.123,
            TEN_AM_UTC_MS,
            FeeClassification::Cheap,
        ),
        transaction(
            "2".repeat(64),
            456,
            20.5,
            ELEVEN_AM_UTC_MS,
            FeeClassification::Normal,
        ),
        transaction(
            "3".repeat(64),
            789,
            30.0,
            NOON_UTC_MS,
            FeeClassification::Expensive,
        ),
    ]
}

pub fn three_tier_feed_json() -> String {
    format!(
        r#"[
  {{"id":"{}","feePerVByte":10.123,"totalFee":1245,"size":123,"timestamp":{TEN_AM_UTC_MS},"feeClassification":"CHEAP","patternTypes":[],"isOutlier":false}},
  {{"id":"{}","feePerVByte":20.5,"totalFee":9348,"size":456,"timestamp":{ELEVEN_AM_UTC_MS},"feeClassification":"NORMAL"}},
  {{"id":"{}","feePerVByte":30,"totalFee":23670,"size":789,"timestamp":{NOON_UTC_MS},"feeClassification":"EXPENSIVE","isOutlier":true}}
]"#,
        "1".repeat(64),
        "2".repeat(64),
        "3".repeat(64),
    )
}

//! Display-value derivation for a feed of fee-classified transactions.
//!
//! [`feed::format_feed`] is the pure core; [`commands`] wraps it with source
//! loading and settings resolution for the `txfeed` binary.

pub mod commands;
pub mod contracts;
pub mod error;
pub mod feed;
pub mod settings;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};
pub use feed::{FeedOutcome, Transaction, TransactionViewModel, format_feed};
pub use settings::{FeedSettings, SettingsOverrides};

pub mod formatter;
pub mod model;
pub mod parse;
pub mod source;
pub mod time;

pub use formatter::{FeedOutcome, format_feed};
pub use model::{FeeClassification, FeeSeverity, Transaction, TransactionViewModel, WindowSnapshot};
pub use time::{TimeDisplay, TimeLocale, TimeZoneSetting};

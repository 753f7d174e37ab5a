use tracing::info;

use crate::ClientResult;
use crate::commands::common::feed_data;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::FeedSourceInfo;
use crate::feed::parse::parse_transactions;
use crate::feed::source::resolve_source;
use crate::feed::format_feed;
use crate::settings::FeedSettings;

#[derive(Debug, Default)]
pub struct FeedRunOptions {
    pub path: Option<String>,
    pub settings: FeedSettings,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<String>, settings: FeedSettings) -> ClientResult<SuccessEnvelope> {
    run_with_options(FeedRunOptions {
        path,
        settings,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: FeedRunOptions) -> ClientResult<SuccessEnvelope> {
    let source = resolve_source(options.path, options.stdin_override)?;
    let transactions = parse_transactions(&source.content)?;
    info!(
        source = source.kind.as_str(),
        count = transactions.len(),
        "loaded transaction feed"
    );

    let outcome = format_feed(&transactions, &options.settings.time)?;
    let data = feed_data(
        outcome,
        &options.settings,
        FeedSourceInfo {
            kind: source.kind.as_str().to_string(),
            path: source.path,
        },
    );
    success("feed", data)
}

use crate::contracts::types::{FeedData, FeedSourceInfo, FeedState};
use crate::feed::FeedOutcome;
use crate::settings::FeedSettings;

pub(crate) fn feed_data(
    outcome: FeedOutcome,
    settings: &FeedSettings,
    source: FeedSourceInfo,
) -> FeedData {
    let state = if outcome.is_empty() {
        FeedState::Empty
    } else {
        FeedState::Populated
    };
    let rows = outcome.into_rows();

    FeedData {
        state,
        transaction_count: rows.len(),
        locale: settings.time.locale.tag().to_string(),
        timezone: settings.time.zone.to_string(),
        source,
        rows,
    }
}

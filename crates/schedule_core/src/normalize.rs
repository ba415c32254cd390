//! Raw records to typed events.
//!
//! Normalisation never fails; [`retain_listable`] is the only place a row is
//! rejected.

use shared::domain::{Event, RawRecord, DEFAULT_CATEGORY};
use tracing::debug;

pub const FIELD_ID: &str = "id";
pub const FIELD_DAY: &str = "day";
pub const FIELD_DATE: &str = "date";
pub const FIELD_START_TIME: &str = "start_time";
pub const FIELD_END_TIME: &str = "end_time";
/// Source column for [`Event::venue`].
pub const FIELD_STAGE: &str = "stage";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_CATEGORY: &str = "category";

pub fn normalize(record: &RawRecord) -> Event {
    Event {
        id: field(record, FIELD_ID, ""),
        day: field(record, FIELD_DAY, ""),
        date: field(record, FIELD_DATE, ""),
        start_time: field(record, FIELD_START_TIME, ""),
        end_time: field(record, FIELD_END_TIME, ""),
        venue: field(record, FIELD_STAGE, ""),
        title: field(record, FIELD_TITLE, ""),
        category: field(record, FIELD_CATEGORY, DEFAULT_CATEGORY),
    }
}

pub fn retain_listable(events: Vec<Event>) -> Vec<Event> {
    let total = events.len();
    let kept: Vec<Event> = events.into_iter().filter(Event::is_listable).collect();
    if kept.len() < total {
        debug!(
            dropped = total - kept.len(),
            kept = kept.len(),
            "dropped rows missing day, start_time, end_time or title"
        );
    }
    kept
}

/// Normalise every record, then drop the ones that cannot be listed.
pub fn normalize_all<'a, I>(records: I) -> Vec<Event>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    retain_listable(records.into_iter().map(normalize).collect())
}

fn field(record: &RawRecord, key: &str, default: &str) -> String {
    match record.get(key) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;

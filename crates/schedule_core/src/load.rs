//! The single boundary where a failed load is caught and turned into a display state.

use std::sync::Arc;

use tracing::{error, info};

use crate::{reference::ReferenceOrder, schedule::Schedule, source::RecordSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub source: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Ready(Arc<Schedule>),
    /// Terminal for this attempt; nothing retries automatically.
    Failed(LoadFailure),
}

impl LoadOutcome {
    pub fn schedule(&self) -> Option<&Arc<Schedule>> {
        match self {
            LoadOutcome::Ready(schedule) => Some(schedule),
            LoadOutcome::Failed(_) => None,
        }
    }
}

/// Fetches, normalises and indexes the schedule. Each call starts from an
/// empty event list.
pub async fn load_schedule(source: &dyn RecordSource, reference: ReferenceOrder) -> LoadOutcome {
    let origin = source.describe();
    match source.fetch().await {
        Ok(records) => {
            let schedule = Schedule::from_records(&records, reference);
            info!(
                source = %origin,
                rows = records.len(),
                events = schedule.events().len(),
                days = schedule.days().len(),
                venues = schedule.venues().len(),
                "schedule loaded"
            );
            LoadOutcome::Ready(Arc::new(schedule))
        }
        Err(err) => {
            error!(source = %origin, error = %err, "failed to load schedule");
            LoadOutcome::Failed(LoadFailure {
                source: origin,
                message: err.to_string(),
            })
        }
    }
}

#[cfg(test)]
#[path = "tests/load_tests.rs"]
mod tests;

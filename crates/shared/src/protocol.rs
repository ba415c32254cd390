use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Event, FilterCriteria};

/// All events of one day that survived filtering, ordered by start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGroup {
    pub day: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_label: Option<String>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleView {
    pub groups: Vec<DayGroup>,
}

impl ScheduleView {
    /// An empty view is the "no results" state, not an error.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.groups.iter().map(|group| group.events.len()).sum()
    }

    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.day.as_str())
    }
}

/// Everything a renderer needs: controls, current filter and the grouped events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub criteria: FilterCriteria,
    pub days: Vec<String>,
    pub venues: Vec<String>,
    pub view: ScheduleView,
    pub location: String,
    pub is_empty: bool,
    /// False when an empty day resolves to the first day, so no "all days" state exists.
    pub all_days_selectable: bool,
    pub loaded_at: DateTime<Utc>,
}

/// Result of one filter mutation: the location to push and the rebuilt view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleUpdate {
    pub location: String,
    pub view: ScheduleView,
}

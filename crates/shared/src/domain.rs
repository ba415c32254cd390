use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One decoded row from the data source, keyed by column header.
pub type RawRecord = HashMap<String, String>;

pub const DEFAULT_CATEGORY: &str = "Performance";
pub const ACTIVITY_CATEGORY: &str = "Activity";

/// A single schedule entry. Built once by the normalizer and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub day: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub venue: String,
    pub title: String,
    pub category: String,
}

impl Event {
    /// Rows missing any of these fields never reach the working set.
    pub fn is_listable(&self) -> bool {
        !self.day.is_empty()
            && !self.start_time.is_empty()
            && !self.end_time.is_empty()
            && !self.title.is_empty()
    }

    pub fn is_activity(&self) -> bool {
        self.category == ACTIVITY_CATEGORY
    }
}

/// Active filter. An empty field places no constraint on the matching event field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub day: String,
    pub venue: String,
    pub query: String,
}

impl FilterCriteria {
    pub fn new(
        day: impl Into<String>,
        venue: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            venue: venue.into(),
            query: query.into(),
        }
    }
}

//! Named filter mutations and the mutate -> encode -> project pipeline they drive.
//!
//! UI layers bind their native events to [`FilterAction`]s (or call the
//! setters directly); nothing else changes the criteria.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::{
    domain::FilterCriteria,
    protocol::{ScheduleSnapshot, ScheduleUpdate, ScheduleView},
};

use crate::{filter::FilterEngine, projector::project, schedule::Schedule, state_codec::location_for};

pub const DEFAULT_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterAction {
    SelectDay(String),
    SelectVenue(String),
    Search(String),
}

impl FilterAction {
    pub fn name(&self) -> &'static str {
        match self {
            FilterAction::SelectDay(_) => "select_day",
            FilterAction::SelectVenue(_) => "select_venue",
            FilterAction::Search(_) => "search",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleController {
    schedule: Arc<Schedule>,
    engine: FilterEngine,
    path: String,
    first_day_default: bool,
}

impl ScheduleController {
    pub fn new(schedule: Arc<Schedule>, initial: FilterCriteria) -> Self {
        Self {
            schedule,
            engine: FilterEngine::new(initial),
            path: DEFAULT_PATH.to_string(),
            first_day_default: false,
        }
    }

    /// Location strings are built against `path` instead of `/`.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Selects the first day tab whenever the criteria name no day, both now
    /// and on every later `set_day("")`. Locations emitted afterwards always
    /// carry a day, so restoring one yields the same view.
    pub fn with_first_day_default(mut self) -> Self {
        self.first_day_default = true;
        let day = self.engine.criteria().day.clone();
        self.apply_day(&day);
        self
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn criteria(&self) -> &FilterCriteria {
        self.engine.criteria()
    }

    pub fn location(&self) -> String {
        location_for(&self.path, self.engine.criteria())
    }

    pub fn view(&self) -> ScheduleView {
        project(
            self.schedule.events(),
            self.engine.criteria(),
            self.schedule.reference(),
        )
    }

    pub fn set_day(&mut self, day: &str) -> ScheduleUpdate {
        self.apply_day(day);
        self.refresh()
    }

    pub fn set_venue(&mut self, venue: &str) -> ScheduleUpdate {
        self.engine.set_venue(venue);
        self.refresh()
    }

    pub fn set_query(&mut self, query: &str) -> ScheduleUpdate {
        self.engine.set_query(query);
        self.refresh()
    }

    pub fn dispatch(&mut self, action: FilterAction) -> ScheduleUpdate {
        tracing::debug!(action = action.name(), "applying filter action");
        match action {
            FilterAction::SelectDay(day) => self.set_day(&day),
            FilterAction::SelectVenue(venue) => self.set_venue(&venue),
            FilterAction::Search(query) => self.set_query(&query),
        }
    }

    pub fn snapshot(&self) -> ScheduleSnapshot {
        let view = self.view();
        ScheduleSnapshot {
            criteria: self.engine.criteria().clone(),
            days: self.schedule.days().to_vec(),
            venues: self.schedule.venues().to_vec(),
            is_empty: view.is_empty(),
            view,
            location: self.location(),
            all_days_selectable: !self.first_day_default,
            loaded_at: self.schedule.loaded_at(),
        }
    }

    fn apply_day(&mut self, day: &str) {
        let first = self.schedule.days().first();
        match first {
            Some(first) if day.is_empty() && self.first_day_default => {
                let first = first.clone();
                self.engine.set_day(first);
            }
            _ => self.engine.set_day(day),
        }
    }

    fn refresh(&self) -> ScheduleUpdate {
        ScheduleUpdate {
            location: self.location(),
            view: self.view(),
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

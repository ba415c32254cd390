use shared::domain::{Event, FilterCriteria};

/// Tests whether `event` satisfies every non-empty constraint in `criteria`.
pub fn matches(criteria: &FilterCriteria, event: &Event) -> bool {
    if !criteria.day.is_empty() && event.day != criteria.day {
        return false;
    }
    if !criteria.venue.is_empty() && event.venue != criteria.venue {
        return false;
    }
    if !criteria.query.is_empty() {
        let needle = criteria.query.to_lowercase();
        let haystack = format!("{} {}", event.title, event.venue).to_lowercase();
        if !haystack.contains(&needle) {
            return false;
        }
    }
    true
}

/// Owns the active criteria. The setters are the only way to change them.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    criteria: FilterCriteria,
}

impl FilterEngine {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_day(&mut self, day: impl Into<String>) {
        self.criteria.day = day.into();
    }

    pub fn set_venue(&mut self, venue: impl Into<String>) {
        self.criteria.venue = venue.into();
    }

    /// Stores the query with surrounding whitespace removed.
    pub fn set_query(&mut self, query: &str) {
        self.criteria.query = query.trim().to_string();
    }

    pub fn matches(&self, event: &Event) -> bool {
        matches(&self.criteria, event)
    }

    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|event| self.matches(event)).collect()
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;

use chrono::{DateTime, Utc};
use shared::domain::{Event, RawRecord};

use crate::{
    facets::{day_facets, venue_facets},
    normalize::normalize_all,
    reference::ReferenceOrder,
};

/// The loaded event set with its facets. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Schedule {
    events: Vec<Event>,
    reference: ReferenceOrder,
    days: Vec<String>,
    venues: Vec<String>,
    loaded_at: DateTime<Utc>,
}

impl Schedule {
    pub fn new(events: Vec<Event>, reference: ReferenceOrder) -> Self {
        let days = day_facets(&events, &reference.days);
        let venues = venue_facets(&events, &reference.venues);
        Self {
            events,
            reference,
            days,
            venues,
            loaded_at: Utc::now(),
        }
    }

    pub fn from_records(records: &[RawRecord], reference: ReferenceOrder) -> Self {
        Self::new(normalize_all(records), reference)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn reference(&self) -> &ReferenceOrder {
        &self.reference
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn venues(&self) -> &[String] {
        &self.venues
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

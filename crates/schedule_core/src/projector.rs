//! Filtered events grouped by day, ready for rendering.

use std::collections::HashMap;

use shared::{
    domain::{Event, FilterCriteria},
    protocol::{DayGroup, ScheduleView},
};

use crate::{facets::order_facets, filter::matches, reference::ReferenceOrder, time::parse_minutes};

/// Builds the grouped view for `criteria`.
///
/// Groups follow the reference day order. Inside a group events are ordered
/// by parsed start time; co-starting events keep their source order. A group's
/// date label comes from the first event of that day in `events` (ignoring
/// the filter) that carries a date.
pub fn project(events: &[Event], criteria: &FilterCriteria, reference: &ReferenceOrder) -> ScheduleView {
    let mut by_day: HashMap<&str, Vec<&Event>> = HashMap::new();
    for event in events.iter().filter(|event| matches(criteria, event)) {
        by_day.entry(event.day.as_str()).or_default().push(event);
    }

    let labels = date_labels(events);
    let days = order_facets(by_day.keys().copied(), &reference.days);

    let groups = days
        .into_iter()
        .filter_map(|day| {
            let mut group = by_day.remove(day.as_str())?;
            group.sort_by_key(|event| parse_minutes(&event.start_time));
            let date_label = labels.get(day.as_str()).map(|date| date.to_string());
            Some(DayGroup {
                date_label,
                events: group.into_iter().cloned().collect(),
                day,
            })
        })
        .collect();

    ScheduleView { groups }
}

fn date_labels(events: &[Event]) -> HashMap<&str, &str> {
    let mut labels = HashMap::new();
    for event in events.iter().filter(|event| !event.date.is_empty()) {
        labels
            .entry(event.day.as_str())
            .or_insert(event.date.as_str());
    }
    labels
}

#[cfg(test)]
#[path = "tests/projector_tests.rs"]
mod tests;

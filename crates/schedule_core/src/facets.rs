//! Deduplicated, deterministically ordered facet lists.
//!
//! Values found in the reference come first, in reference order. Everything
//! else follows, sorted by [`collate`]. Nothing is ever dropped.

use std::{cmp::Ordering, collections::HashMap};

use shared::domain::Event;

pub fn order_facets<I, S, R>(values: I, reference: &[R]) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    R: AsRef<str>,
{
    let rank: HashMap<&str, usize> = reference
        .iter()
        .enumerate()
        .map(|(index, value)| (value.as_ref(), index))
        .rev()
        .collect();
    let rank_of = |value: &str| rank.get(value).copied().unwrap_or(usize::MAX);

    let mut values: Vec<String> = values.into_iter().map(Into::into).collect();
    values.sort_by(|a, b| {
        rank_of(a)
            .cmp(&rank_of(b))
            .then_with(|| collate(a, b))
    });
    values.dedup();
    values
}

/// Case-insensitive ordering, falling back to byte order so distinct strings
/// never compare equal.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

pub fn day_facets<R: AsRef<str>>(events: &[Event], reference: &[R]) -> Vec<String> {
    order_facets(events.iter().map(|e| e.day.as_str()), reference)
}

/// Venues for the selector. Events without a venue contribute no option.
pub fn venue_facets<R: AsRef<str>>(events: &[Event], reference: &[R]) -> Vec<String> {
    order_facets(
        events
            .iter()
            .map(|e| e.venue.as_str())
            .filter(|venue| !venue.is_empty()),
        reference,
    )
}

#[cfg(test)]
#[path = "tests/facets_tests.rs"]
mod tests;

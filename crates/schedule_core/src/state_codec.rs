//! Filter criteria to and from the flat key/value state carried in a location string.
//!
//! `decode(encode(c)) == c` holds for every criteria value. The reverse does
//! not: unknown keys are dropped on decode and empty values are omitted on
//! encode.

use shared::domain::FilterCriteria;
use url::form_urlencoded;

pub const KEY_DAY: &str = "day";
pub const KEY_VENUE: &str = "stage";
pub const KEY_QUERY: &str = "q";

/// Key/value pairs for the non-empty fields, in `day`, `stage`, `q` order.
pub fn encode(criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
    [
        (KEY_DAY, &criteria.day),
        (KEY_VENUE, &criteria.venue),
        (KEY_QUERY, &criteria.query),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(key, value)| (key, value.clone()))
    .collect()
}

/// Never fails. Missing keys decode to "unconstrained"; for repeated keys the
/// first occurrence wins.
pub fn decode<I, K, V>(pairs: I) -> FilterCriteria
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut day = None;
    let mut venue = None;
    let mut query = None;
    for (key, value) in pairs {
        let slot = match key.as_ref() {
            KEY_DAY => &mut day,
            KEY_VENUE => &mut venue,
            KEY_QUERY => &mut query,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into());
        }
    }
    FilterCriteria {
        day: day.unwrap_or_default(),
        venue: venue.unwrap_or_default(),
        query: query.unwrap_or_default(),
    }
}

/// `application/x-www-form-urlencoded` form of [`encode`]; empty when unconstrained.
pub fn to_query_string(criteria: &FilterCriteria) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(encode(criteria))
        .finish()
}

/// Accepts an optional leading `?`.
pub fn from_query_string(query: &str) -> FilterCriteria {
    let query = query.strip_prefix('?').unwrap_or(query);
    decode(form_urlencoded::parse(query.as_bytes()))
}

/// `path` with the encoded state appended, or `path` alone when unconstrained.
pub fn location_for(path: &str, criteria: &FilterCriteria) -> String {
    let query = to_query_string(criteria);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
#[path = "tests/state_codec_tests.rs"]
mod tests;

use serde::{Deserialize, Serialize};

pub const CANONICAL_DAYS: [&str; 4] = ["Thursday", "Friday", "Saturday", "Sunday"];

pub const CANONICAL_VENUES: [&str; 10] = [
    "Eden Field Main Stage",
    "Eden Hall",
    "Mike Compton Dance Hall",
    "Big Barn",
    "Sunshine Stage",
    "Ship Deck",
    "Out & About",
    "Lounging",
    "Brookside",
    "U-LEAF",
];

/// Curated orderings used to rank day tabs and venue options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceOrder {
    pub days: Vec<String>,
    pub venues: Vec<String>,
}

impl Default for ReferenceOrder {
    fn default() -> Self {
        Self {
            days: CANONICAL_DAYS.iter().map(|d| d.to_string()).collect(),
            venues: CANONICAL_VENUES.iter().map(|v| v.to_string()).collect(),
        }
    }
}

//! Filtering, ordering and state-synchronisation engine for the festival schedule.
//!
//! Raw rows go through [`normalize`], facets come from [`facets`], and every
//! filter change runs through [`controller::ScheduleController`], which
//! re-encodes the location string ([`state_codec`]) and rebuilds the grouped
//! view ([`projector`]).

pub mod controller;
pub mod facets;
pub mod filter;
pub mod load;
pub mod markup;
pub mod normalize;
pub mod projector;
pub mod reference;
pub mod schedule;
pub mod source;
pub mod state_codec;
pub mod time;

pub use controller::{FilterAction, ScheduleController};
pub use filter::FilterEngine;
pub use load::{load_schedule, LoadFailure, LoadOutcome};
pub use reference::ReferenceOrder;
pub use schedule::Schedule;
pub use source::{LoadError, RecordSource};

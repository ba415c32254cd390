//! Request handling independent of the HTTP framework.
//!
//! Each request gets its own controller seeded from the request's query
//! string; the loaded schedule is shared read-only.

use std::sync::Arc;

use schedule_core::{
    markup::{render_load_failure_page, render_page},
    state_codec::from_query_string,
    FilterAction, LoadOutcome, Schedule, ScheduleController,
};
use shared::{
    error::ApiError,
    protocol::{ScheduleSnapshot, ScheduleUpdate},
};

pub const PAGE_PATH: &str = "/";

#[derive(Debug, Clone)]
pub struct ApiContext {
    pub outcome: LoadOutcome,
    pub default_first_day: bool,
}

impl ApiContext {
    pub fn new(outcome: LoadOutcome, default_first_day: bool) -> Self {
        Self {
            outcome,
            default_first_day,
        }
    }

    fn schedule(&self) -> Result<&Arc<Schedule>, ApiError> {
        match &self.outcome {
            LoadOutcome::Ready(schedule) => Ok(schedule),
            LoadOutcome::Failed(failure) => Err(ApiError::unavailable(format!(
                "schedule failed to load from {}: {}",
                failure.source, failure.message
            ))),
        }
    }

    fn controller(&self, schedule: &Arc<Schedule>, raw_query: &str) -> ScheduleController {
        let controller = ScheduleController::new(schedule.clone(), from_query_string(raw_query))
            .with_path(PAGE_PATH);
        if self.default_first_day {
            controller.with_first_day_default()
        } else {
            controller
        }
    }
}

pub fn schedule_snapshot(ctx: &ApiContext, raw_query: &str) -> Result<ScheduleSnapshot, ApiError> {
    let schedule = ctx.schedule()?;
    Ok(ctx.controller(schedule, raw_query).snapshot())
}

/// Applies one named mutation on top of the state in `raw_query`.
pub fn apply_action(
    ctx: &ApiContext,
    raw_query: &str,
    action: FilterAction,
) -> Result<ScheduleUpdate, ApiError> {
    let schedule = ctx.schedule()?;
    Ok(ctx.controller(schedule, raw_query).dispatch(action))
}

/// Always renders: a failed load becomes the failure page.
pub fn schedule_page(ctx: &ApiContext, raw_query: &str) -> String {
    match ctx.schedule() {
        Ok(schedule) => render_page(&ctx.controller(schedule, raw_query).snapshot(), PAGE_PATH),
        Err(_) => render_load_failure_page(),
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;

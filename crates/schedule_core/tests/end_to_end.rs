use std::sync::Arc;

use schedule_core::{
    normalize::normalize_all, projector::project, state_codec, FilterAction, ReferenceOrder,
    Schedule, ScheduleController,
};
use shared::domain::{FilterCriteria, RawRecord};

fn row(day: &str, start: &str, end: &str, stage: &str, title: &str) -> RawRecord {
    [
        ("day", day),
        ("start_time", start),
        ("end_time", end),
        ("stage", stage),
        ("title", title),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn festival_rows() -> Vec<RawRecord> {
    vec![
        row("Friday", "2:00 PM", "3:00 PM", "Main", "Band A"),
        row("Friday", "1:00 PM", "2:00 PM", "Main", "Band B"),
        row("Saturday", "5:00 PM", "6:00 PM", "Porch", "Band C"),
    ]
}

fn grouped_titles(view: &shared::protocol::ScheduleView) -> Vec<(String, Vec<String>)> {
    view.groups
        .iter()
        .map(|g| {
            (
                g.day.clone(),
                g.events.iter().map(|e| e.title.clone()).collect(),
            )
        })
        .collect()
}

#[test]
fn projects_three_rows_into_ordered_day_groups() {
    let events = normalize_all(&festival_rows());
    let view = project(&events, &FilterCriteria::default(), &ReferenceOrder::default());
    assert_eq!(
        grouped_titles(&view),
        vec![
            ("Friday".to_string(), vec!["Band B".to_string(), "Band A".to_string()]),
            ("Saturday".to_string(), vec!["Band C".to_string()]),
        ]
    );
    assert!(events.iter().all(|e| e.category == "Performance"));
}

#[test]
fn venue_filter_narrows_to_one_group() {
    let schedule = Arc::new(Schedule::from_records(
        &festival_rows(),
        ReferenceOrder::default(),
    ));
    let mut controller = ScheduleController::new(schedule, FilterCriteria::default());
    let update = controller.dispatch(FilterAction::SelectVenue("Porch".into()));

    assert_eq!(
        grouped_titles(&update.view),
        vec![("Saturday".to_string(), vec!["Band C".to_string()])]
    );
    assert_eq!(update.location, "/?stage=Porch");
}

#[test]
fn shared_location_restores_the_same_view() {
    let schedule = Arc::new(Schedule::from_records(
        &festival_rows(),
        ReferenceOrder::default(),
    ));
    let mut original = ScheduleController::new(schedule.clone(), FilterCriteria::default());
    original.set_day("Friday");
    let update = original.set_query("band a");

    let query = update.location.trim_start_matches('/');
    let restored =
        ScheduleController::new(schedule, state_codec::from_query_string(query));
    assert_eq!(restored.criteria(), original.criteria());
    assert_eq!(restored.view(), update.view);
    assert_eq!(restored.location(), update.location);
}

use super::*;
use crate::{reference::ReferenceOrder, state_codec::from_query_string};
use shared::domain::Event;

fn event(day: &str, start: &str, venue: &str, title: &str) -> Event {
    Event {
        id: String::new(),
        day: day.into(),
        date: String::new(),
        start_time: start.into(),
        end_time: "11:00 PM".into(),
        venue: venue.into(),
        title: title.into(),
        category: "Performance".into(),
    }
}

fn schedule() -> Arc<Schedule> {
    Arc::new(Schedule::new(
        vec![
            event("Saturday", "5:00 PM", "Porch", "Band C"),
            event("Friday", "2:00 PM", "Main", "Band A"),
            event("Friday", "1:00 PM", "Main", "Band B"),
        ],
        ReferenceOrder::default(),
    ))
}

#[test]
fn facets_are_computed_once_from_the_schedule() {
    let controller = ScheduleController::new(schedule(), FilterCriteria::default());
    assert_eq!(controller.schedule().days(), ["Friday", "Saturday"]);
    assert_eq!(controller.schedule().venues(), ["Main", "Porch"]);
}

#[test]
fn every_setter_returns_fresh_location_and_view() {
    let mut controller = ScheduleController::new(schedule(), FilterCriteria::default());

    let update = controller.set_venue("Porch");
    assert_eq!(update.location, "/?stage=Porch");
    assert_eq!(update.view.days().collect::<Vec<_>>(), ["Saturday"]);

    let update = controller.set_query("  band b ");
    assert_eq!(update.location, "/?stage=Porch&q=band+b");
    assert!(update.view.is_empty());

    let update = controller.set_venue("");
    assert_eq!(update.location, "/?q=band+b");
    assert_eq!(update.view.event_count(), 1);
}

#[test]
fn dispatch_routes_named_actions_to_setters() {
    let mut controller = ScheduleController::new(schedule(), FilterCriteria::default());
    controller.dispatch(FilterAction::SelectDay("Friday".into()));
    controller.dispatch(FilterAction::SelectVenue("Main".into()));
    let update = controller.dispatch(FilterAction::Search("A".into()));

    assert_eq!(controller.criteria(), &FilterCriteria::new("Friday", "Main", "A"));
    assert_eq!(update.location, "/?day=Friday&stage=Main&q=A");
}

#[test]
fn repeating_a_mutation_is_idempotent() {
    let mut controller = ScheduleController::new(schedule(), FilterCriteria::default());
    let first = controller.set_day("Friday");
    let second = controller.set_day("Friday");
    assert_eq!(first, second);
}

#[test]
fn first_day_default_only_applies_without_a_day() {
    let controller =
        ScheduleController::new(schedule(), FilterCriteria::default()).with_first_day_default();
    assert_eq!(controller.criteria().day, "Friday");

    let controller = ScheduleController::new(schedule(), FilterCriteria::new("Saturday", "", ""))
        .with_first_day_default();
    assert_eq!(controller.criteria().day, "Saturday");
}

#[test]
fn first_day_default_on_empty_schedule_leaves_day_unset() {
    let empty = Arc::new(Schedule::new(Vec::new(), ReferenceOrder::default()));
    let controller = ScheduleController::new(empty, FilterCriteria::default()).with_first_day_default();
    assert_eq!(controller.criteria().day, "");
    assert!(controller.view().is_empty());
}

#[test]
fn clearing_the_day_with_first_day_default_keeps_the_first_day() {
    let mut controller = ScheduleController::new(schedule(), FilterCriteria::new("Saturday", "", ""))
        .with_first_day_default();
    let update = controller.dispatch(FilterAction::SelectDay(String::new()));
    assert_eq!(controller.criteria().day, "Friday");
    assert_eq!(update.location, "/?day=Friday");
    assert!(!controller.snapshot().all_days_selectable);
}

#[test]
fn emitted_location_restores_the_same_view_with_first_day_default() {
    let mut controller = ScheduleController::new(schedule(), FilterCriteria::new("Friday", "", ""))
        .with_first_day_default();
    let update = controller.set_day("");

    let query = update.location.trim_start_matches('/');
    let restored = ScheduleController::new(schedule(), from_query_string(query))
        .with_first_day_default();
    assert_eq!(restored.criteria(), controller.criteria());
    assert_eq!(restored.view(), update.view);
    assert_eq!(restored.location(), update.location);
}

#[test]
fn without_first_day_default_an_empty_day_means_all_days() {
    let mut controller = ScheduleController::new(schedule(), FilterCriteria::new("Friday", "", ""));
    let update = controller.set_day("");
    assert_eq!(update.location, "/");
    assert_eq!(update.view.days().collect::<Vec<_>>(), ["Friday", "Saturday"]);
    assert!(controller.snapshot().all_days_selectable);
}

#[test]
fn snapshot_carries_the_rendering_contract() {
    let controller = ScheduleController::new(schedule(), FilterCriteria::new("", "", "zzz"))
        .with_path("/schedule");
    let snapshot = controller.snapshot();
    assert!(snapshot.is_empty);
    assert_eq!(snapshot.location, "/schedule?q=zzz");
    assert_eq!(snapshot.days, ["Friday", "Saturday"]);
    assert_eq!(snapshot.criteria.query, "zzz");
}

#[test]
fn filter_action_serializes_with_a_type_tag() {
    let json = serde_json::to_value(FilterAction::SelectVenue("Porch".into())).expect("json");
    assert_eq!(json["type"], "select_venue");
    assert_eq!(json["value"], "Porch");

    let action: FilterAction =
        serde_json::from_str(r#"{"type":"search","value":"fiddle"}"#).expect("action");
    assert_eq!(action, FilterAction::Search("fiddle".into()));
}

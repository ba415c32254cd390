use super::*;
use clap::CommandFactory;
use shared::{domain::Event, protocol::DayGroup};

fn event(start: &str, venue: &str, title: &str) -> Event {
    Event {
        id: String::new(),
        day: "Friday".into(),
        date: "2025-08-15".into(),
        start_time: start.into(),
        end_time: "3:00 PM".into(),
        venue: venue.into(),
        title: title.into(),
        category: "Performance".into(),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn render_flags_parse() {
    let cli = Cli::try_parse_from([
        "schedule",
        "--source",
        "fixtures.csv",
        "render",
        "--location",
        "?day=Friday",
        "--venue",
        "Big Barn",
        "--format",
        "json",
    ])
    .expect("parse");
    assert_eq!(cli.source, "fixtures.csv");
    match cli.command {
        Command::Render {
            location,
            venue,
            format,
            all_days,
            ..
        } => {
            assert_eq!(location, "?day=Friday");
            assert_eq!(venue.as_deref(), Some("Big Barn"));
            assert_eq!(format, Format::Json);
            assert!(!all_days);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn text_output_lists_groups_in_order() {
    let view = ScheduleView {
        groups: vec![DayGroup {
            day: "Friday".into(),
            date_label: Some("2025-08-15".into()),
            events: vec![event("1:00 PM", "Main", "Band B"), event("2:00 PM", "Main", "Band A")],
        }],
    };
    let text = render_text(&view);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "Friday (2025-08-15)");
    assert!(lines[1].contains("Band B"));
    assert!(lines[2].contains("Band A"));
}

#[test]
fn text_output_reports_empty_results() {
    assert_eq!(render_text(&ScheduleView::default()), format!("{NO_RESULTS_MESSAGE}\n"));
}

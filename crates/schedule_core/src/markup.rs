//! HTML rendering of a [`ScheduleSnapshot`].
//!
//! Every text value that reaches markup goes through [`escape_html`].

use std::borrow::Cow;

use shared::{
    domain::{Event, FilterCriteria},
    protocol::{DayGroup, ScheduleSnapshot, ScheduleView},
};

use crate::state_codec::{location_for, KEY_DAY, KEY_QUERY, KEY_VENUE};

pub const NO_RESULTS_MESSAGE: &str = "No events match your filters.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load schedule.";

/// Escapes `& < > " '`. Borrows when there is nothing to replace.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

pub fn render_schedule_html(view: &ScheduleView) -> String {
    if view.is_empty() {
        return format!("<p class=\"empty\">{NO_RESULTS_MESSAGE}</p>");
    }
    let mut html = String::new();
    for group in &view.groups {
        render_day(&mut html, group);
    }
    html
}

fn render_day(html: &mut String, group: &DayGroup) {
    let pill = group
        .date_label
        .as_deref()
        .map(|date| format!(" <span class=\"pill\">{}</span>", escape_html(date)))
        .unwrap_or_default();
    html.push_str(&format!(
        "<div class=\"day-block\"><h2 class=\"day-title\">{}{pill}</h2><div class=\"grid\">",
        escape_html(&group.day)
    ));
    for event in &group.events {
        render_card(html, event);
    }
    html.push_str("</div></div>");
}

fn render_card(html: &mut String, event: &Event) {
    let badge = if event.is_activity() {
        "badge--activity"
    } else {
        "badge--performance"
    };
    html.push_str(&format!(
        concat!(
            "<article class=\"card\">",
            "<div class=\"meta\"><span class=\"time\">{start}\u{2013}{end}</span>",
            "<span class=\"stage\">\u{2022} {venue}</span></div>",
            "<div class=\"title\">{title}</div>",
            "<div class=\"badges\"><span class=\"badge {badge}\">{category}</span></div>",
            "</article>"
        ),
        start = escape_html(&event.start_time),
        end = escape_html(&event.end_time),
        venue = escape_html(&event.venue),
        title = escape_html(&event.title),
        badge = badge,
        category = escape_html(&event.category),
    ));
}

/// Day tabs, venue selector and search box, wired to `path` via GET.
///
/// The "All Days" tab only appears when the snapshot allows an empty day.
pub fn render_controls(snapshot: &ScheduleSnapshot, path: &str) -> String {
    let criteria = &snapshot.criteria;
    let mut html = String::from("<nav class=\"tabs\">");
    if snapshot.all_days_selectable {
        let all_days = FilterCriteria {
            day: String::new(),
            ..criteria.clone()
        };
        html.push_str(&format!(
            "<a class=\"tab{}\" href=\"{}\">All Days</a>",
            active_class(criteria.day.is_empty()),
            escape_html(&location_for(path, &all_days))
        ));
    }
    for day in &snapshot.days {
        let target = FilterCriteria {
            day: day.clone(),
            ..criteria.clone()
        };
        html.push_str(&format!(
            "<a class=\"tab{}\" data-day=\"{day}\" href=\"{href}\">{day}</a>",
            active_class(&criteria.day == day),
            day = escape_html(day),
            href = escape_html(&location_for(path, &target)),
        ));
    }
    html.push_str("</nav>");

    html.push_str(&format!(
        "<form class=\"filters\" method=\"get\" action=\"{}\">",
        escape_html(path)
    ));
    if !criteria.day.is_empty() {
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"{KEY_DAY}\" value=\"{}\">",
            escape_html(&criteria.day)
        ));
    }
    html.push_str(&format!(
        "<select id=\"stageSelect\" name=\"{KEY_VENUE}\"><option value=\"\">All Stages</option>"
    ));
    for venue in &snapshot.venues {
        let selected = if &criteria.venue == venue { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{venue}\"{selected}>{venue}</option>",
            venue = escape_html(venue)
        ));
    }
    html.push_str(&format!(
        concat!(
            "</select>",
            "<input id=\"searchInput\" type=\"search\" name=\"{key}\" value=\"{query}\" ",
            "placeholder=\"Search artists or stages\">",
            "<button type=\"submit\">Filter</button></form>"
        ),
        key = KEY_QUERY,
        query = escape_html(&criteria.query),
    ));
    html
}

pub fn render_page(snapshot: &ScheduleSnapshot, path: &str) -> String {
    document(&format!(
        "{}<main id=\"schedule\">{}</main>",
        render_controls(snapshot, path),
        render_schedule_html(&snapshot.view)
    ))
}

pub fn render_load_failure_page() -> String {
    document(&format!(
        "<main id=\"schedule\"><p class=\"error\">{LOAD_FAILED_MESSAGE}</p></main>"
    ))
}

fn document(body: &str) -> String {
    format!(
        concat!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>Festival Schedule</title></head><body>{}</body></html>"
        ),
        body
    )
}

fn active_class(active: bool) -> &'static str {
    if active {
        " is-active"
    } else {
        ""
    }
}

#[cfg(test)]
#[path = "tests/markup_tests.rs"]
mod tests;

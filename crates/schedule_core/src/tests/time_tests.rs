use super::*;

#[test]
fn midnight_and_noon() {
    assert_eq!(parse_minutes("12:00 AM"), 0);
    assert_eq!(parse_minutes("12:00 PM"), 720);
    assert_eq!(parse_minutes("12:30 AM"), 30);
}

#[test]
fn afternoon_adds_twelve_hours() {
    assert_eq!(parse_minutes("1:05 PM"), 785);
    assert_eq!(parse_minutes("11:59 PM"), MINUTES_PER_DAY - 1);
}

#[test]
fn morning_hours_are_unchanged() {
    assert_eq!(parse_minutes("9:15 AM"), 555);
    assert_eq!(parse_minutes("09:15 AM"), 555);
}

#[test]
fn meridiem_is_case_insensitive_and_spacing_is_optional() {
    assert_eq!(parse_minutes("2:00 pm"), 840);
    assert_eq!(parse_minutes("2:00pM"), 840);
    assert_eq!(parse_minutes("  2:00   PM  "), 840);
}

#[test]
fn malformed_input_falls_back_to_zero() {
    for text in [
        "", "garbage", "14:00", "13:00 PM", "0:30 AM", "1:5 PM", "1:60 PM", "123:00 AM", "1:00",
        "PM", "1:00 XM", "a1:00 PM", "1:0a PM", "—1:00 PM",
    ] {
        assert_eq!(parse_minutes(text), 0, "input {text:?}");
    }
}

#[test]
fn parse_clock_distinguishes_fallback_from_midnight() {
    assert_eq!(parse_clock("12:00 AM"), Some(0));
    assert_eq!(parse_clock("garbage"), None);
}

#[test]
fn multibyte_suffix_does_not_panic() {
    assert_eq!(parse_minutes("1:00 Pé"), 0);
    assert_eq!(parse_minutes("é"), 0);
}

//! Clock strings such as `1:05 PM` to minutes since midnight.

pub const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Minutes since midnight for a 12-hour clock string, in `0..MINUTES_PER_DAY`.
///
/// Anything that is not `H:MM` / `HH:MM` followed by `AM`/`PM` (any case,
/// optional whitespace before the meridiem) yields `0`. Callers that need to
/// tell a real midnight from a fallback should use [`parse_clock`].
pub fn parse_minutes(text: &str) -> u16 {
    parse_clock(text).unwrap_or(0)
}

/// Like [`parse_minutes`], but returns `None` for text that does not match.
pub fn parse_clock(text: &str) -> Option<u16> {
    let text = text.trim();
    let (clock, meridiem) = split_meridiem(text)?;
    let (hour, minute) = clock.trim_end().split_once(':')?;

    if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: u16 = hour.parse().ok()?;
    let minute: u16 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    };
    Some(hour * 60 + minute)
}

fn split_meridiem(text: &str) -> Option<(&str, Meridiem)> {
    let split = text.len().checked_sub(2)?;
    let (clock, suffix) = (text.get(..split)?, text.get(split..)?);
    let meridiem = if suffix.eq_ignore_ascii_case("am") {
        Meridiem::Am
    } else if suffix.eq_ignore_ascii_case("pm") {
        Meridiem::Pm
    } else {
        return None;
    };
    Some((clock, meridiem))
}

#[cfg(test)]
#[path = "tests/time_tests.rs"]
mod tests;

//! Time-of-day and date formatting for trip and booking cards.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use time::macros::format_description;
use time::{Date, Time};

/// Widen `HH:MM` form input to the backend's `HH:MM:SS`. Blank input is
/// `None`; anything already longer is passed through.
pub fn widen_time(raw: &str) -> Option<String> {
    let raw = raw.trim();
    match raw.len() {
        0 => None,
        5 => Some(format!("{raw}:00")),
        _ => Some(raw.to_owned()),
    }
}

/// Whether `raw` is a valid `HH:MM:SS` time of day.
pub fn is_wire_time(raw: &str) -> bool {
    Time::parse(raw, format_description!("[hour]:[minute]:[second]")).is_ok()
}

/// `HH:MM` for display, or `--:--` when the backend sent nothing.
pub fn clock(raw: &str) -> &str {
    raw.get(..5).filter(|s| !s.is_empty()).unwrap_or("--:--")
}

fn clock_time(raw: &str) -> Option<Time> {
    Time::parse(raw.get(..5)?, format_description!("[hour]:[minute]")).ok()
}

/// Travel time such as `8h 45m`, wrapping past midnight. Whole hours render
/// without minutes; unparseable input renders empty.
pub fn trip_duration(departure: &str, arrival: &str) -> String {
    let (Some(start), Some(end)) = (clock_time(departure), clock_time(arrival)) else {
        return String::new();
    };
    let diff = (end - start).whole_minutes().rem_euclid(24 * 60);
    let (hours, minutes) = (diff / 60, diff % 60);
    if minutes > 0 { format!("{hours}h {minutes}m") } else { format!("{hours}h") }
}

/// `19 Oct 2026` from an ISO date or timestamp; the input itself if it does
/// not start with a `YYYY-MM-DD` date.
pub fn format_booking_date(raw: &str) -> String {
    let day = raw.get(..10).unwrap_or(raw);
    Date::parse(day, format_description!("[year]-[month]-[day]"))
        .ok()
        .and_then(|date| date.format(format_description!("[day padding:none] [month repr:short] [year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

//! en-US creation-time formatting for list rows.
//!
//! DESIGN
//! ======
//! Rows display the long en-US form: full weekday and month names, numeric
//! day and year, zero-padded 12-hour clock ("Monday, January 1, 2024 at
//! 12:00 PM"). `time`'s locale-free format descriptions cannot produce the
//! English names, so the pieces are assembled by hand.

#[cfg(test)]
#[path = "format_time_test.rs"]
mod format_time_test;

use time::OffsetDateTime;

/// Format a creation timestamp the way the lists display it.
pub fn format_created_at(created_at: OffsetDateTime) -> String {
    let (hour, meridiem) = clock12(created_at.hour());
    format!(
        "{weekday}, {month} {day}, {year} at {hour:02}:{minute:02} {meridiem}",
        weekday = created_at.weekday(),
        month = created_at.month(),
        day = created_at.day(),
        year = created_at.year(),
        minute = created_at.minute(),
    )
}

/// Convert a 24-hour clock hour to its 12-hour clock-face value.
fn clock12(hour: u8) -> (u8, &'static str) {
    match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    }
}

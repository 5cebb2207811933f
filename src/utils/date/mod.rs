// Date and time label formatting for the availability grid

use chrono::{DateTime, Local, NaiveDate};

/// Column header label, e.g. "Sat, Aug 9".
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// 12-hour row label for a whole-hour slot: 0 -> "12:00 AM",
/// 13 -> "1:00 PM".
pub fn format_hour_label(hour: u32) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display_hour}:00 {period}")
}

/// Clock label for chat timestamps, e.g. "3:07 PM".
pub fn format_clock_label(timestamp: DateTime<Local>) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

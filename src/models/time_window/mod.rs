// TimeWindow module
// Candidate scheduling window for an event

use serde::{Deserialize, Serialize};

/// Candidate date/time window for an event.
///
/// Day offsets are relative to "today" at grid-build time; hours are
/// whole-hour slots, 0-23 inclusive. Immutable once an event is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub day_offset_start: i64,
    pub day_offset_end: i64,
    pub hour_start: u32,
    pub hour_end: u32,
}

impl TimeWindow {
    /// Create a new window with validation.
    ///
    /// # Arguments
    /// * `day_offset_start` / `day_offset_end` - days from today, start <= end
    /// * `hour_start` / `hour_end` - hours of day, 0 <= start <= end <= 23
    ///
    /// # Returns
    /// Returns `Result<TimeWindow, String>` with validation. Zero-length
    /// ranges (a single day or a single hour) are valid.
    pub fn new(
        day_offset_start: i64,
        day_offset_end: i64,
        hour_start: u32,
        hour_end: u32,
    ) -> Result<Self, String> {
        let window = Self {
            day_offset_start,
            day_offset_end,
            hour_start,
            hour_end,
        };
        window.validate()?;
        Ok(window)
    }

    /// Validate the window invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.day_offset_end < self.day_offset_start {
            return Err("Window end day must not be before start day".to_string());
        }

        if self.hour_end > 23 {
            return Err("Window hours must be between 0 and 23".to_string());
        }

        if self.hour_start > self.hour_end {
            return Err("Window end hour must not be before start hour".to_string());
        }

        Ok(())
    }

    /// Number of days covered, inclusive of both ends.
    pub fn day_count(&self) -> usize {
        (self.day_offset_end - self.day_offset_start) as usize + 1
    }

    /// Number of hour slots covered, inclusive of both ends.
    pub fn hour_count(&self) -> usize {
        (self.hour_end - self.hour_start) as usize + 1
    }
}

impl Default for TimeWindow {
    /// The create-event form defaults: the next week, 8 AM to 10 PM.
    fn default() -> Self {
        Self {
            day_offset_start: 0,
            day_offset_end: 7,
            hour_start: 8,
            hour_end: 22,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_window() {
        let window = TimeWindow::new(0, 7, 8, 22).unwrap();
        assert_eq!(window.day_count(), 8);
        assert_eq!(window.hour_count(), 15);
    }

    #[test]
    fn test_new_reversed_days() {
        let result = TimeWindow::new(3, 1, 8, 22);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            "Window end day must not be before start day"
        );
    }

    #[test]
    fn test_new_reversed_hours() {
        let result = TimeWindow::new(0, 7, 18, 9);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_hour_out_of_range() {
        let result = TimeWindow::new(0, 7, 8, 24);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Window hours must be between 0 and 23");
    }

    #[test]
    fn test_degenerate_single_day_single_hour() {
        let window = TimeWindow::new(2, 2, 9, 9).unwrap();
        assert_eq!(window.day_count(), 1);
        assert_eq!(window.hour_count(), 1);
    }

    #[test]
    fn test_negative_offsets_allowed() {
        // A window may start before today (e.g. an event created mid-range).
        let window = TimeWindow::new(-1, 3, 0, 23).unwrap();
        assert_eq!(window.day_count(), 5);
        assert_eq!(window.hour_count(), 24);
    }

    #[test]
    fn test_default_matches_create_form() {
        let window = TimeWindow::default();
        assert_eq!(window.day_offset_start, 0);
        assert_eq!(window.day_offset_end, 7);
        assert_eq!(window.hour_start, 8);
        assert_eq!(window.hour_end, 22);
        assert!(window.validate().is_ok());
    }
}

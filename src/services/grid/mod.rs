//! Availability grid construction.
//!
//! Materializes an event's candidate window into an ordered list of
//! calendar dates and an ordered list of hour slots; defines the cell
//! coordinate space used by selection and aggregation.

use chrono::{Duration, Local, NaiveDate};

use crate::models::cell::CellId;
use crate::models::time_window::TimeWindow;

/// A fully materialized availability grid.
///
/// `dates` are chronological, one per day in the window; `hours` are
/// ascending, one per hour slot. Cells exist for every (date, hour) pair
/// and are never created or destroyed individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dates: Vec<NaiveDate>,
    hours: Vec<u32>,
}

impl Grid {
    /// Build the grid for `window`, anchored at `today`.
    ///
    /// Pure function of its inputs: `dates[i] = today + day_offset_start + i`
    /// and `hours[j] = hour_start + j`. A degenerate window (single day,
    /// single hour) yields a 1x1 grid.
    pub fn build(window: &TimeWindow, today: NaiveDate) -> Self {
        let dates = (0..window.day_count() as i64)
            .map(|i| today + Duration::days(window.day_offset_start + i))
            .collect();
        let hours = (window.hour_start..=window.hour_end).collect();
        Self { dates, hours }
    }

    /// Build the grid anchored at the current local date.
    pub fn build_for_today(window: &TimeWindow) -> Self {
        Self::build(window, Local::now().date_naive())
    }

    /// Calendar dates, one per column, chronological.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Hour slots, one per row, ascending.
    pub fn hours(&self) -> &[u32] {
        &self.hours
    }

    pub fn date_count(&self) -> usize {
        self.dates.len()
    }

    pub fn hour_count(&self) -> usize {
        self.hours.len()
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.dates.len() * self.hours.len()
    }

    /// The date at a column index, if in range.
    pub fn date_at(&self, date_index: usize) -> Option<NaiveDate> {
        self.dates.get(date_index).copied()
    }

    /// The hour at a row index, if in range.
    pub fn hour_at(&self, time_index: usize) -> Option<u32> {
        self.hours.get(time_index).copied()
    }

    /// Whether `cell` falls inside this grid.
    pub fn contains(&self, cell: CellId) -> bool {
        cell.date_index < self.dates.len() && cell.time_index < self.hours.len()
    }

    /// Iterate every cell, column-major (all slots of a date, then the next).
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.dates.len()).flat_map(move |date_index| {
            (0..self.hours.len()).map(move |time_index| CellId::new(date_index, time_index))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 9).unwrap()
    }

    #[test]
    fn test_build_counts_and_order() {
        let window = TimeWindow::new(0, 2, 9, 10).unwrap();
        let grid = Grid::build(&window, anchor());

        assert_eq!(grid.date_count(), 3);
        assert_eq!(grid.hour_count(), 2);
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.hours(), &[9, 10]);

        let dates = grid.dates();
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_build_applies_day_offsets() {
        let window = TimeWindow::new(3, 5, 0, 0).unwrap();
        let grid = Grid::build(&window, anchor());

        assert_eq!(
            grid.dates(),
            &[
                NaiveDate::from_ymd_opt(2025, 8, 12).unwrap(),
                NaiveDate::from_ymd_opt(2025, 8, 13).unwrap(),
                NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
            ]
        );
    }

    #[test]
    fn test_build_crosses_month_boundary() {
        let window = TimeWindow::new(21, 23, 8, 8).unwrap();
        let grid = Grid::build(&window, anchor());

        assert_eq!(
            grid.dates(),
            &[
                NaiveDate::from_ymd_opt(2025, 8, 30).unwrap(),
                NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
                NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn test_degenerate_window_is_single_cell() {
        let window = TimeWindow::new(0, 0, 12, 12).unwrap();
        let grid = Grid::build(&window, anchor());

        assert_eq!(grid.cell_count(), 1);
        assert_eq!(grid.date_at(0), Some(anchor()));
        assert_eq!(grid.hour_at(0), Some(12));
    }

    #[test]
    fn test_contains_bounds() {
        let window = TimeWindow::new(0, 2, 9, 10).unwrap();
        let grid = Grid::build(&window, anchor());

        assert!(grid.contains(CellId::new(0, 0)));
        assert!(grid.contains(CellId::new(2, 1)));
        assert!(!grid.contains(CellId::new(3, 0)));
        assert!(!grid.contains(CellId::new(0, 2)));
    }

    #[test]
    fn test_cells_cover_grid_exactly_once() {
        let window = TimeWindow::new(0, 2, 9, 10).unwrap();
        let grid = Grid::build(&window, anchor());

        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());

        let unique: std::collections::HashSet<_> = cells.iter().copied().collect();
        assert_eq!(unique.len(), cells.len());
        assert!(cells.iter().all(|&cell| grid.contains(cell)));
    }
}

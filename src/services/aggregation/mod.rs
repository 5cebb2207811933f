//! Per-cell aggregation of submitted availability.
//!
//! Turns the full set of participant records into a single per-cell
//! signal: who is free there, and how strongly to shade the cell.

use crate::models::cell::CellId;
use crate::models::participant::Participant;
use crate::services::availability::AvailabilityStore;

/// Fixed hue of the availability shading (green).
pub const FILL_HUE: f32 = 142.0;

/// Store-ordered partition of participants at one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBreakdown<'a> {
    pub available: Vec<&'a Participant>,
    pub unavailable: Vec<&'a Participant>,
}

/// Partition every participant by availability at `cell`, preserving
/// store (first-seen) order within each partition.
pub fn aggregate<'a>(cell: CellId, store: &'a AvailabilityStore) -> CellBreakdown<'a> {
    let (available, unavailable) = store
        .list_all()
        .iter()
        .partition(|participant| participant.is_available_at(cell));

    CellBreakdown {
        available,
        unavailable,
    }
}

/// HSL + opacity fill parameters for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFill {
    pub hue: f32,
    /// Saturation percentage, 30-80.
    pub saturation: f32,
    /// Lightness percentage, 30-80.
    pub lightness: f32,
    /// Alpha, 0.4-1.0.
    pub opacity: f32,
}

/// Fill for `cell`, or `None` when nobody is available there (the cell
/// renders fully transparent).
///
/// The ratio is normalized by the total participant count, not by the
/// per-cell count, so a submission that doesn't mark this cell still
/// lightens it. `max(1, n)` guards the empty store.
pub fn cell_fill(cell: CellId, store: &AvailabilityStore) -> Option<CellFill> {
    let available = store
        .list_all()
        .iter()
        .filter(|participant| participant.is_available_at(cell))
        .count();
    if available == 0 {
        return None;
    }

    let total = store.len().max(1);
    let ratio = available as f32 / total as f32;

    Some(CellFill {
        hue: FILL_HUE,
        saturation: (30.0 + ratio * 50.0).min(80.0),
        lightness: (80.0 - ratio * 50.0).max(30.0),
        opacity: 0.4 + ratio * 0.6,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cells(keys: &[(usize, usize)]) -> HashSet<CellId> {
        keys.iter().map(|&(d, t)| CellId::new(d, t)).collect()
    }

    fn sample_store() -> AvailabilityStore {
        let mut store = AvailabilityStore::new();
        store.upsert("Bob", cells(&[(0, 0), (1, 0)]));
        store.upsert("Carol", cells(&[(0, 0)]));
        store
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_aggregate_partitions_in_store_order() {
        let store = sample_store();

        let everyone = aggregate(CellId::new(0, 0), &store);
        let names: Vec<_> = everyone.available.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carol"]);
        assert!(everyone.unavailable.is_empty());

        let split = aggregate(CellId::new(1, 0), &store);
        assert_eq!(split.available[0].name, "Bob");
        assert_eq!(split.unavailable[0].name, "Carol");
    }

    #[test]
    fn test_aggregate_empty_store() {
        let store = AvailabilityStore::new();
        let breakdown = aggregate(CellId::new(0, 0), &store);
        assert!(breakdown.available.is_empty());
        assert!(breakdown.unavailable.is_empty());
    }

    #[test]
    fn test_fill_none_when_nobody_available() {
        let store = sample_store();
        assert!(cell_fill(CellId::new(2, 1), &store).is_none());
    }

    #[test]
    fn test_fill_none_for_empty_store() {
        let store = AvailabilityStore::new();
        assert!(cell_fill(CellId::new(0, 0), &store).is_none());
    }

    #[test]
    fn test_fill_full_ratio_boundary() {
        let mut store = AvailabilityStore::new();
        store.upsert("Bob", cells(&[(0, 0)]));

        let fill = cell_fill(CellId::new(0, 0), &store).unwrap();
        assert_close(fill.hue, 142.0);
        assert_close(fill.saturation, 80.0);
        assert_close(fill.lightness, 30.0);
        assert_close(fill.opacity, 1.0);
    }

    #[test]
    fn test_fill_half_ratio() {
        let store = sample_store();

        // Only Bob is free at (1,0): ratio 1/2.
        let fill = cell_fill(CellId::new(1, 0), &store).unwrap();
        assert_close(fill.saturation, 55.0);
        assert_close(fill.lightness, 55.0);
        assert_close(fill.opacity, 0.7);
    }

    #[test]
    fn test_fill_lightens_as_unrelated_participants_join() {
        let mut store = AvailabilityStore::new();
        store.upsert("Bob", cells(&[(0, 0)]));
        let before = cell_fill(CellId::new(0, 0), &store).unwrap();

        // Dave never marks (0,0); the cell still fades.
        store.upsert("Dave", cells(&[(3, 3)]));
        let after = cell_fill(CellId::new(0, 0), &store).unwrap();

        assert!(after.lightness > before.lightness);
        assert!(after.opacity < before.opacity);
    }
}

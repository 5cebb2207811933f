// Test fixtures - reusable test data
// Provides consistent test data across test files

use std::collections::HashSet;

use meetgrid::models::cell::CellId;
use meetgrid::models::time_window::TimeWindow;
use meetgrid::services::availability::AvailabilityStore;

/// The canonical small window: 3 dates x 2 hour slots (9-10 AM).
pub fn small_window() -> TimeWindow {
    TimeWindow::new(0, 2, 9, 10).unwrap()
}

/// Parse `"d-t"` keys into a cell set.
pub fn cells(keys: &[&str]) -> HashSet<CellId> {
    keys.iter().map(|key| key.parse().unwrap()).collect()
}

/// A store seeded with named availability sets, in the given order.
pub fn seeded_store(participants: &[(&str, &[&str])]) -> AvailabilityStore {
    let mut store = AvailabilityStore::new();
    for (name, keys) in participants {
        store.upsert(name, cells(keys));
    }
    store
}

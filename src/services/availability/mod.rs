//! In-memory availability store.
//!
//! Owns every submitted participant record for the running session.
//! Single-threaded: reads and writes happen on the UI thread, so no
//! locking is involved.

use std::collections::HashSet;

use crate::models::cell::CellId;
use crate::models::participant::Participant;

/// Insertion-ordered store of participant availability records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityStore {
    participants: Vec<Participant>,
}

impl AvailabilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a participant's availability by name.
    ///
    /// Names are compared after trimming. An existing record's set is
    /// replaced in full (not merged); a new name is appended, so
    /// `list_all` keeps first-seen order.
    pub fn upsert(&mut self, name: &str, cells: HashSet<CellId>) {
        let name = name.trim();
        log::debug!("storing availability for {name}: {} slots", cells.len());

        match self
            .participants
            .iter_mut()
            .find(|participant| participant.name == name)
        {
            Some(participant) => participant.availability = cells,
            None => self.participants.push(Participant::new(name, cells)),
        }
    }

    /// Look up a participant by trimmed name.
    pub fn get(&self, name: &str) -> Option<&Participant> {
        let name = name.trim();
        self.participants
            .iter()
            .find(|participant| participant.name == name)
    }

    /// All participants, in first-seen order.
    pub fn list_all(&self) -> &[Participant] {
        &self.participants
    }

    /// Participant names, in first-seen order. Read-only feed for the
    /// chat and polls panels.
    pub fn names(&self) -> Vec<String> {
        self.participants
            .iter()
            .map(|participant| participant.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(keys: &[(usize, usize)]) -> HashSet<CellId> {
        keys.iter().map(|&(d, t)| CellId::new(d, t)).collect()
    }

    #[test]
    fn test_upsert_inserts_new_participant() {
        let mut store = AvailabilityStore::new();
        store.upsert("Alice", cells(&[(0, 0)]));

        assert_eq!(store.len(), 1);
        let alice = store.get("Alice").unwrap();
        assert_eq!(alice.name, "Alice");
        assert!(alice.is_available_at(CellId::new(0, 0)));
    }

    #[test]
    fn test_upsert_replaces_not_merges() {
        let mut store = AvailabilityStore::new();
        store.upsert("Alice", cells(&[(0, 0), (1, 0)]));
        store.upsert("Alice", cells(&[(2, 2)]));

        assert_eq!(store.len(), 1);
        let alice = store.get("Alice").unwrap();
        assert_eq!(alice.slot_count(), 1);
        assert!(alice.is_available_at(CellId::new(2, 2)));
        assert!(!alice.is_available_at(CellId::new(0, 0)));
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut store = AvailabilityStore::new();
        store.upsert("Alice", cells(&[(0, 0), (1, 1)]));
        let once = store.clone();
        store.upsert("Alice", cells(&[(0, 0), (1, 1)]));

        assert_eq!(store, once);
    }

    #[test]
    fn test_upsert_trims_name() {
        let mut store = AvailabilityStore::new();
        store.upsert("  Alice  ", cells(&[(0, 0)]));
        store.upsert("Alice", cells(&[(1, 1)]));

        assert_eq!(store.len(), 1);
        assert!(store.get(" Alice ").is_some());
    }

    #[test]
    fn test_list_all_keeps_first_seen_order() {
        let mut store = AvailabilityStore::new();
        store.upsert("Carol", cells(&[]));
        store.upsert("Alice", cells(&[]));
        store.upsert("Bob", cells(&[]));
        store.upsert("Alice", cells(&[(0, 0)]));

        assert_eq!(store.names(), vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_get_missing_name() {
        let store = AvailabilityStore::new();
        assert!(store.get("Nobody").is_none());
        assert!(store.is_empty());
    }
}

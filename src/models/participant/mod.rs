// Participant module
// A named guest and the time slots they marked as available

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::cell::CellId;

/// A guest who submitted availability for an event.
///
/// The trimmed display name is the participant's identity: submitting again
/// under the same name replaces this record rather than creating another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub availability: HashSet<CellId>,
}

impl Participant {
    /// Create a participant with the given name and availability set.
    pub fn new(name: impl Into<String>, availability: HashSet<CellId>) -> Self {
        Self {
            name: name.into(),
            availability,
        }
    }

    /// Whether this participant marked `cell` as available.
    pub fn is_available_at(&self, cell: CellId) -> bool {
        self.availability.contains(&cell)
    }

    /// Number of slots selected, shown as "N time slots selected".
    pub fn slot_count(&self) -> usize {
        self.availability.len()
    }
}

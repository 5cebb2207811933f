//! Rectangle-selection editing of one guest's availability.
//!
//! The editor owns the in-progress working set and the transient drag
//! cursor. Nothing here touches the availability store; the session
//! copies the working set into the store on an explicit submit.

use std::collections::HashSet;

use crate::models::cell::CellId;

/// Pointer drag state. Exists only while an interaction is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// The cell where the drag began. Fixed until the drag ends.
        anchor: CellId,
    },
}

/// One guest's in-progress availability selection plus its drag cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionEditor {
    working: HashSet<CellId>,
    drag: DragState,
}

impl SelectionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The not-yet-submitted working set.
    pub fn working(&self) -> &HashSet<CellId> {
        &self.working
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Whether `cell` is currently in the working set.
    pub fn is_selected(&self, cell: CellId) -> bool {
        self.working.contains(&cell)
    }

    /// Pointer pressed on `cell`: toggle its membership and anchor a new
    /// drag there.
    pub fn begin(&mut self, cell: CellId) {
        if !self.working.remove(&cell) {
            self.working.insert(cell);
        }
        self.drag = DragState::Dragging { anchor: cell };
    }

    /// Pointer entered `cell` while dragging: union the axis-aligned
    /// rectangle between the anchor and `cell` into the working set. The
    /// anchor does not move.
    ///
    /// Cells are only ever added here. Dragging back toward the anchor
    /// does not deselect cells covered earlier in the drag; only the
    /// `begin` toggle removes a cell. Downstream behavior relies on this
    /// asymmetry, so it must be kept.
    ///
    /// No-op when no drag is in progress.
    pub fn extend(&mut self, cell: CellId) {
        let DragState::Dragging { anchor } = self.drag else {
            return;
        };
        for covered in anchor.rectangle_to(cell) {
            self.working.insert(covered);
        }
    }

    /// Pointer released, anywhere: the drag ends and the anchor is
    /// cleared. Safe to call in any state.
    pub fn end(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Replace the working set with a stored participant's availability
    /// (re-editing under an already-known name).
    pub fn load(&mut self, cells: HashSet<CellId>) {
        self.working = cells;
    }

    /// Reset to an empty selection and no drag (identity cleared or
    /// switched to an unseen name).
    pub fn clear(&mut self) {
        self.working.clear();
        self.drag = DragState::Idle;
    }

    /// Copy of the working set, for committing into the store.
    pub fn snapshot(&self) -> HashSet<CellId> {
        self.working.clone()
    }
}

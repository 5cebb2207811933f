//! Single-guest editing session for one event.
//!
//! Couples the confirmed identity to the selection editor and the
//! availability store. `submit` is the only path that writes the working
//! selection into the store.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::cell::CellId;
use crate::services::availability::AvailabilityStore;
use crate::services::selection::SelectionEditor;

/// User-facing session failures. All recoverable; the interaction is
/// rejected and no state changes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Interaction attempted before the guest confirmed a name.
    #[error("Please confirm your name first")]
    NameNotConfirmed,
    /// Empty or whitespace-only name at confirmation time.
    #[error("Please enter your name")]
    EmptyName,
}

/// One guest's editing session: identity, working selection, and the
/// shared availability store.
#[derive(Debug, Default)]
pub struct GuestSession {
    confirmed_name: Option<String>,
    editor: SelectionEditor,
    store: AvailabilityStore,
}

impl GuestSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The confirmed display name, if any.
    pub fn confirmed_name(&self) -> Option<&str> {
        self.confirmed_name.as_deref()
    }

    pub fn store(&self) -> &AvailabilityStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionEditor {
        &self.editor
    }

    /// Confirm the guest's display name (trimmed).
    ///
    /// Confirming a name with a stored record loads a copy of that record
    /// into the working selection for re-editing. Switching to an unseen
    /// name starts from an empty selection.
    pub fn confirm_name(&mut self, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }

        let changed = self.confirmed_name.as_deref() != Some(name);
        match self.store.get(name) {
            Some(participant) => self.editor.load(participant.availability.clone()),
            None if changed => self.editor.clear(),
            None => {}
        }
        self.confirmed_name = Some(name.to_string());
        Ok(())
    }

    /// Drop the confirmed identity (the "Change" action). The working
    /// selection resets; stored records are untouched.
    pub fn clear_name(&mut self) {
        self.confirmed_name = None;
        self.editor.clear();
    }

    /// Pointer pressed on `cell`: toggle it and start a drag. Requires a
    /// confirmed identity.
    pub fn begin_drag(&mut self, cell: CellId) -> Result<(), SessionError> {
        if self.confirmed_name.is_none() {
            return Err(SessionError::NameNotConfirmed);
        }
        self.editor.begin(cell);
        Ok(())
    }

    /// Pointer entered `cell`. Extends the drag rectangle when a drag is
    /// in progress; silently does nothing otherwise.
    pub fn extend_drag(&mut self, cell: CellId) {
        if self.confirmed_name.is_none() {
            return;
        }
        self.editor.extend(cell);
    }

    /// Pointer released, anywhere on screen. Always ends the drag, even
    /// when the release lands outside the grid.
    pub fn end_drag(&mut self) {
        self.editor.end();
    }

    /// Commit a copy of the working selection into the store under the
    /// confirmed name.
    pub fn submit(&mut self) -> Result<(), SessionError> {
        let name = self
            .confirmed_name
            .clone()
            .ok_or(SessionError::NameNotConfirmed)?;

        self.store.upsert(&name, self.editor.snapshot());
        log::info!(
            "availability saved for {name} ({} slots)",
            self.editor.working().len()
        );
        Ok(())
    }

    /// Participant names in first-seen order, for the chat/polls panels.
    pub fn participant_names(&self) -> Vec<String> {
        self.store.names()
    }

    /// Test/demo hook: seed the store with an existing participant set.
    pub fn seed_participant(&mut self, name: &str, cells: HashSet<CellId>) {
        self.store.upsert(name, cells);
    }
}

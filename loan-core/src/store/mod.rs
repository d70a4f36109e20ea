//! Draft persistence for in-progress applications.
//!
//! A draft store is a single-slot key-value surface: at most one draft
//! exists at a time, and starting a new application overwrites it. The
//! form session writes the full record after every mutation and clears the
//! slot at submission; it never reads the slot back itself (seeding a
//! session from a saved draft is the caller's job via [`DraftStore::load`]).
//!
//! Backends live in sibling crates; [`InMemoryDraftStore`] here is the test
//! double and a reasonable default for throwaway sessions.

use thiserror::Error;

use crate::models::FormData;

#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Single-slot persistence surface for the application draft.
pub trait DraftStore {
    /// Overwrites the slot with the full record.
    fn save(&mut self, draft: &FormData) -> Result<(), DraftStoreError>;

    /// Reads the slot; `None` when no draft exists.
    fn load(&self) -> Result<Option<FormData>, DraftStoreError>;

    /// Empties the slot. Clearing an empty slot is not an error.
    fn clear(&mut self) -> Result<(), DraftStoreError>;
}

/// In-memory single-slot store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDraftStore {
    slot: Option<FormData>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for InMemoryDraftStore {
    fn save(&mut self, draft: &FormData) -> Result<(), DraftStoreError> {
        self.slot = Some(draft.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<FormData>, DraftStoreError> {
        Ok(self.slot.clone())
    }

    fn clear(&mut self) -> Result<(), DraftStoreError> {
        self.slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn save_overwrites_the_single_slot() {
        let mut store = InMemoryDraftStore::new();

        let mut first = FormData::new();
        first.set("loanType", "va-loans");
        store.save(&first).unwrap();

        let mut second = FormData::new();
        second.set("loanType", "fha-loans");
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap(), Some(second));
    }

    #[test]
    fn load_returns_none_when_empty() {
        let store = InMemoryDraftStore::new();

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = InMemoryDraftStore::new();
        let mut draft = FormData::new();
        draft.set("firstName", "John");
        store.save(&draft).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), None);
    }
}

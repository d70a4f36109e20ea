//! File-backed draft persistence.
//!
//! One JSON document on disk holds the single draft slot. Saving rewrites
//! the whole document, loading an absent file is `None`, and clearing
//! removes the file (missing file included). The document wraps the record
//! in an envelope carrying the save timestamp, so a resumed session can
//! show the borrower when they left off.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loan_core::{DraftStore, DraftStoreError, FormData};

/// On-disk shape of the draft slot.
#[derive(Debug, Serialize, Deserialize)]
struct DraftEnvelope {
    saved_at: DateTime<Utc>,
    data: FormData,
}

/// Draft store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonDraftStore {
    path: PathBuf,
}

impl JsonDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Timestamp of the saved draft, `None` when the slot is empty.
    pub fn saved_at(&self) -> Result<Option<DateTime<Utc>>, DraftStoreError> {
        Ok(self.read_envelope()?.map(|envelope| envelope.saved_at))
    }

    fn read_envelope(&self) -> Result<Option<DraftEnvelope>, DraftStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(DraftStoreError::Storage(err.to_string())),
        };
        let envelope = serde_json::from_str(&raw)
            .map_err(|err| DraftStoreError::Serialization(err.to_string()))?;
        Ok(Some(envelope))
    }
}

impl DraftStore for JsonDraftStore {
    fn save(&mut self, draft: &FormData) -> Result<(), DraftStoreError> {
        let envelope = DraftEnvelope {
            saved_at: Utc::now(),
            data: draft.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)
            .map_err(|err| DraftStoreError::Serialization(err.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|err| DraftStoreError::Storage(err.to_string()))?;
            }
        }
        fs::write(&self.path, json).map_err(|err| DraftStoreError::Storage(err.to_string()))?;
        tracing::debug!(path = %self.path.display(), "draft written");
        Ok(())
    }

    fn load(&self) -> Result<Option<FormData>, DraftStoreError> {
        Ok(self.read_envelope()?.map(|envelope| envelope.data))
    }

    fn clear(&mut self) -> Result<(), DraftStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "draft cleared");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(DraftStoreError::Storage(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// A unique path under the system temp directory, so parallel tests
    /// never share a slot.
    fn temp_path(tag: &str) -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("loan-draft-{}-{tag}-{n}.json", std::process::id()))
    }

    fn sample_draft() -> FormData {
        let mut data = FormData::new();
        data.set("loanType", "va-loans");
        data.set("firstName", "John");
        data
    }

    #[test]
    fn save_then_load_round_trips_the_record() {
        let mut store = JsonDraftStore::new(temp_path("round-trip"));

        store.save(&sample_draft()).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, Some(sample_draft()));
        store.clear().unwrap();
    }

    #[test]
    fn load_returns_none_when_no_file_exists() {
        let store = JsonDraftStore::new(temp_path("absent"));

        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.saved_at().unwrap(), None);
    }

    #[test]
    fn save_overwrites_the_previous_draft() {
        let mut store = JsonDraftStore::new(temp_path("overwrite"));
        store.save(&sample_draft()).unwrap();

        let mut updated = sample_draft();
        updated.set("firstName", "Jane");
        store.save(&updated).unwrap();

        assert_eq!(store.load().unwrap(), Some(updated));
        store.clear().unwrap();
    }

    #[test]
    fn clear_removes_the_file_and_tolerates_absence() {
        let mut store = JsonDraftStore::new(temp_path("clear"));
        store.save(&sample_draft()).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = temp_path("nested");
        let mut store = JsonDraftStore::new(dir.join("drafts").join("slot.json"));

        store.save(&sample_draft()).unwrap();

        assert_eq!(store.load().unwrap(), Some(sample_draft()));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn corrupted_file_surfaces_a_serialization_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonDraftStore::new(path.clone());

        let err = store.load().unwrap_err();

        assert!(matches!(err, DraftStoreError::Serialization(_)));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn saved_at_reports_the_envelope_timestamp() {
        let mut store = JsonDraftStore::new(temp_path("stamp"));
        let before = Utc::now();

        store.save(&sample_draft()).unwrap();

        let stamp = store.saved_at().unwrap().expect("timestamp present");
        assert!(stamp >= before);
        store.clear().unwrap();
    }
}

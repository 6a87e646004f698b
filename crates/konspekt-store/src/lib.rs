//! Konspekt Storage Layer
//!
//! Flat-file implementation of the `ArtifactStore` trait: one pretty-printed
//! JSON document per artifact, plus an append-only newline-delimited JSON
//! event log shared by all runs.
//!
//! No locking is performed. One process running one pipeline at a time is
//! the supported model; concurrent writers to the same event log are
//! last-writer-wins.

#![warn(missing_docs)]

use konspekt_domain::traits::ArtifactStore;
use konspekt_domain::ArtifactId;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Flat-file artifact store
///
/// Artifacts are written to `<artifacts_dir>/<artifact_id>.json`; events
/// are appended as single lines to `events_path`. Both locations are
/// created on first use.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    artifacts_dir: PathBuf,
    events_path: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given locations
    pub fn new(artifacts_dir: impl Into<PathBuf>, events_path: impl Into<PathBuf>) -> Self {
        Self {
            artifacts_dir: artifacts_dir.into(),
            events_path: events_path.into(),
        }
    }

    /// Directory holding artifact files
    pub fn artifacts_dir(&self) -> &Path {
        &self.artifacts_dir
    }

    /// Path of the shared event log
    pub fn events_path(&self) -> &Path {
        &self.events_path
    }

    /// Path an artifact with this id would be written to
    pub fn artifact_path(&self, id: &ArtifactId) -> PathBuf {
        self.artifacts_dir.join(format!("{}.json", id))
    }
}

impl ArtifactStore for JsonFileStore {
    type Error = StoreError;

    fn write_artifact(&self, id: &ArtifactId, payload: &Value) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.artifacts_dir)?;
        let path = self.artifact_path(id);
        let body = serde_json::to_string_pretty(payload)?;
        fs::write(&path, body)?;
        Ok(path)
    }

    fn append_event(&self, event: &Value) -> Result<(), StoreError> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let line = serde_json::to_string(event)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_artifact_path_uses_id() {
        let store = JsonFileStore::new("/tmp/artifacts", "/tmp/events.jsonl");
        let id = ArtifactId::new();
        let path = store.artifact_path(&id);
        assert!(path.to_string_lossy().ends_with(&format!("{}.json", id)));
    }

    #[test]
    fn test_write_artifact_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(
            dir.path().join("nested/artifacts"),
            dir.path().join("events.jsonl"),
        );
        let id = ArtifactId::new();

        let path = store
            .write_artifact(&id, &json!({"status": "success"}))
            .unwrap();
        assert!(path.exists());

        let body: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(body["status"], "success");
    }
}

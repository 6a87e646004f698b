//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::{ArtifactId, BackendFailure};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

/// One invocation of an external generation backend
///
/// Implemented by the infrastructure layer (`konspekt-backend`). A call is
/// a single attempt: the orchestrator owns the retry policy and relies on
/// [`BackendFailure::is_retryable`] to decide whether to try again.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Invoke the backend once with a prompt and an output JSON schema,
    /// returning the parsed stdout JSON document
    async fn invoke(&self, prompt: &str, schema: &Value) -> Result<Value, BackendFailure>;
}

/// Storage collaborator for artifacts and audit events
///
/// Implemented by the infrastructure layer (`konspekt-store`). The run
/// orchestrator exclusively owns artifact and event lifecycle; no other
/// component writes either.
pub trait ArtifactStore {
    /// Error type for store operations
    type Error;

    /// Create the artifact file for a run, returning its path
    fn write_artifact(&self, id: &ArtifactId, payload: &Value) -> Result<PathBuf, Self::Error>;

    /// Append one record to the shared event log
    fn append_event(&self, event: &Value) -> Result<(), Self::Error>;
}

//! Outputs handed back to callers of the runner

use konspekt_domain::{ArtifactId, RequestId};
use std::path::PathBuf;

/// Locators for a completed analysis run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Identifier of the persisted artifact
    pub artifact_id: ArtifactId,
    /// Filesystem path the artifact was written to
    pub artifact_path: PathBuf,
    /// Identifier correlating this run in the audit log
    pub request_id: RequestId,
}

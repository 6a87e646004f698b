//! Error types for the pipeline

use konspekt_validator::ValidationError;
use thiserror::Error;

/// Errors that abort a pipeline run
///
/// Every variant is user-facing and final: the orchestrator never catches
/// and masks one of these, and no artifact or event is written after a
/// failure. Retries exist only inside the backend integration and are
/// already exhausted by the time `BackendCallFailed` surfaces.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Profile name not in the supported set
    #[error("Unsupported generation profile '{0}'")]
    UnsupportedProfile(String),

    /// Source path missing or a directory
    #[error("Source file does not exist or is a directory: {0}")]
    SourceNotFound(String),

    /// Source file contains only whitespace
    #[error("Source file is empty: {0}")]
    SourceEmpty(String),

    /// Backend configuration is unusable (e.g., empty command)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The backend executable does not exist
    #[error("Backend command not found: {0}")]
    BackendNotFound(String),

    /// All backend attempts failed; carries the last observed cause
    #[error("Backend call failed: {0}")]
    BackendCallFailed(String),

    /// The backend responded but produced no usable structured payload
    #[error("Backend output invalid: {0}")]
    BackendOutputInvalid(String),

    /// Generated result violates its profile's schema
    #[error(transparent)]
    SchemaValidation(#[from] ValidationError),

    /// Artifact or event persistence failed
    #[error("Store error: {0}")]
    Store(String),

    /// Filesystem error while reading the source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

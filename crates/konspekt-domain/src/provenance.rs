//! Generation provenance

use serde::{Deserialize, Serialize};

/// Records which generation backend and model produced a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Backend identifier (e.g., "claude_code", "deterministic")
    pub provider: String,

    /// Model name as reported by the backend, or "n/a" for heuristics
    pub model: String,
}

impl Provenance {
    /// Provenance for a result produced by the external claude backend
    pub fn claude_code(model: impl Into<String>) -> Self {
        Self {
            provider: "claude_code".to_string(),
            model: model.into(),
        }
    }

    /// Provenance for a deterministic heuristic result
    pub fn deterministic() -> Self {
        Self {
            provider: "deterministic".to_string(),
            model: "n/a".to_string(),
        }
    }
}

//! Backend attempt failure causes

use std::fmt;

/// Failure of a single backend invocation attempt
///
/// The orchestration layer retries attempts whose failure is retryable and
/// aborts immediately otherwise, so the causes must stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendFailure {
    /// The configured executable does not exist (never retried)
    NotFound(String),

    /// The attempt exceeded the per-attempt timeout (seconds)
    Timeout(u64),

    /// The process exited with a non-zero status; carries a bounded
    /// stderr/stdout tail for diagnostics
    NonZeroExit {
        /// Exit code, when the process was not killed by a signal
        code: Option<i32>,
        /// Trailing portion of stderr (or stdout when stderr is empty)
        tail: String,
    },

    /// The process produced no stdout
    EmptyOutput,

    /// Stdout was not valid JSON
    InvalidJson(String),

    /// The process could not be spawned for a reason other than a
    /// missing executable
    Spawn(String),
}

impl BackendFailure {
    /// Whether another attempt may be made after this failure
    pub fn is_retryable(&self) -> bool {
        !matches!(self, BackendFailure::NotFound(_))
    }
}

impl fmt::Display for BackendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendFailure::NotFound(cmd) => write!(f, "command not found: {}", cmd),
            BackendFailure::Timeout(secs) => write!(f, "timeout after {}s", secs),
            BackendFailure::NonZeroExit { code, tail } => match code {
                Some(code) => write!(f, "exit={}; {}", code, tail),
                None => write!(f, "killed by signal; {}", tail),
            },
            BackendFailure::EmptyOutput => write!(f, "empty stdout"),
            BackendFailure::InvalidJson(e) => write!(f, "invalid json stdout: {}", e),
            BackendFailure::Spawn(e) => write!(f, "failed to spawn process: {}", e),
        }
    }
}

impl std::error::Error for BackendFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_retryable() {
        assert!(!BackendFailure::NotFound("claude".into()).is_retryable());
    }

    #[test]
    fn test_transient_failures_are_retryable() {
        assert!(BackendFailure::Timeout(180).is_retryable());
        assert!(BackendFailure::EmptyOutput.is_retryable());
        assert!(BackendFailure::InvalidJson("eof".into()).is_retryable());
        assert!(BackendFailure::NonZeroExit {
            code: Some(1),
            tail: "boom".into()
        }
        .is_retryable());
    }

    #[test]
    fn test_display_carries_cause() {
        let failure = BackendFailure::NonZeroExit {
            code: Some(2),
            tail: "stack trace".into(),
        };
        let text = failure.to_string();
        assert!(text.contains("exit=2"));
        assert!(text.contains("stack trace"));
    }
}

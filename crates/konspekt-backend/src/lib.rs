//! Konspekt Generation Backends
//!
//! Implementations of the `GenerationBackend` trait from `konspekt-domain`.
//!
//! # Backends
//!
//! - [`FixtureBackend`]: deterministic canned responses for testing
//! - [`ClaudeCliBackend`]: invokes the claude CLI as a subprocess
//!
//! # Examples
//!
//! ```
//! use konspekt_backend::FixtureBackend;
//! use konspekt_domain::traits::GenerationBackend;
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let backend = FixtureBackend::new(json!({"result": "{}"}));
//! let response = backend.invoke("prompt", &json!({})).await.unwrap();
//! assert_eq!(response["result"], "{}");
//! # });
//! ```

#![warn(missing_docs)]

pub mod claude_cli;
pub mod config;

use async_trait::async_trait;
use konspekt_domain::traits::GenerationBackend;
use konspekt_domain::BackendFailure;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub use claude_cli::ClaudeCliBackend;
pub use config::BackendConfig;

/// Deterministic backend for testing
///
/// Returns a pre-configured response without spawning any process, records
/// every invocation, and can be scripted to fail a number of attempts
/// before succeeding.
///
/// # Examples
///
/// ```
/// use konspekt_backend::FixtureBackend;
/// use konspekt_domain::{traits::GenerationBackend, BackendFailure};
/// use serde_json::json;
///
/// # tokio_test::block_on(async {
/// let backend = FixtureBackend::new(json!({"ok": true}))
///     .failing_with(BackendFailure::EmptyOutput, 1);
///
/// assert!(backend.invoke("p", &json!({})).await.is_err());
/// assert!(backend.invoke("p", &json!({})).await.is_ok());
/// assert_eq!(backend.call_count(), 2);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct FixtureBackend {
    response: Value,
    scripted_failures: Arc<Mutex<VecDeque<BackendFailure>>>,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl FixtureBackend {
    /// Create a backend that always returns `response`
    pub fn new(response: Value) -> Self {
        Self {
            response,
            scripted_failures: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Script the next `times` invocations to fail with clones of `failure`
    pub fn failing_with(self, failure: BackendFailure, times: usize) -> Self {
        {
            let mut queue = self.scripted_failures.lock().unwrap();
            for _ in 0..times {
                queue.push_back(failure.clone());
            }
        }
        self
    }

    /// Number of invocations so far
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The prompt passed to the most recent invocation
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for FixtureBackend {
    async fn invoke(&self, prompt: &str, _schema: &Value) -> Result<Value, BackendFailure> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        if let Some(failure) = self.scripted_failures.lock().unwrap().pop_front() {
            return Err(failure);
        }
        Ok(self.response.clone())
    }
}

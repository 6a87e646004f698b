//! Claude CLI backend implementation
//!
//! Invokes the claude command-line tool as a subprocess with structured
//! JSON output. One `invoke` call is one attempt: per-attempt timeout is
//! enforced here, retry policy belongs to the caller.

use crate::config::BackendConfig;
use async_trait::async_trait;
use konspekt_domain::traits::GenerationBackend;
use konspekt_domain::BackendFailure;
use serde_json::Value;
use std::process::Stdio;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Maximum characters of stderr/stdout kept in a failure message
const ERROR_TAIL_CHARS: usize = 1500;

/// Subprocess-based generation backend using the claude CLI
pub struct ClaudeCliBackend {
    program: String,
    base_args: Vec<String>,
    model: String,
    effort: String,
    attempt_timeout: Duration,
}

impl ClaudeCliBackend {
    /// Build a backend from configuration
    ///
    /// Fails when the configured command is empty.
    pub fn from_config(config: &BackendConfig) -> Result<Self, String> {
        config.validate()?;
        let (program, base_args) = config
            .command_parts()
            .ok_or_else(|| "backend command must not be empty".to_string())?;
        Ok(Self {
            program,
            base_args,
            model: config.model.clone(),
            effort: config.effort.clone(),
            attempt_timeout: config.timeout(),
        })
    }

    /// The resolved program name
    pub fn program(&self) -> &str {
        &self.program
    }

    fn build_command(&self, prompt: &str, schema_json: &str) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.base_args)
            .arg("-p")
            .args(["--output-format", "json"])
            .args(["--json-schema", schema_json])
            .args(["--model", &self.model])
            .args(["--effort", &self.effort])
            .args(["--tools", ""])
            .arg("--no-session-persistence")
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl GenerationBackend for ClaudeCliBackend {
    async fn invoke(&self, prompt: &str, schema: &Value) -> Result<Value, BackendFailure> {
        let schema_json = schema.to_string();
        let mut cmd = self.build_command(prompt, &schema_json);

        debug!(
            program = %self.program,
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "invoking generation backend"
        );

        let output = match timeout(self.attempt_timeout, cmd.output()).await {
            Err(_) => return Err(BackendFailure::Timeout(self.attempt_timeout.as_secs())),
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BackendFailure::NotFound(self.program.clone()))
            }
            Ok(Err(e)) => return Err(BackendFailure::Spawn(e.to_string())),
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let noise = if stderr.trim().is_empty() {
                stdout
            } else {
                stderr
            };
            return Err(BackendFailure::NonZeroExit {
                code: output.status.code(),
                tail: tail_chars(noise.trim(), ERROR_TAIL_CHARS),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Err(BackendFailure::EmptyOutput);
        }

        serde_json::from_str(trimmed).map_err(|e| BackendFailure::InvalidJson(e.to_string()))
    }
}

/// Last `limit` characters of `text`
fn tail_chars(text: &str, limit: usize) -> String {
    let total = text.chars().count();
    text.chars().skip(total.saturating_sub(limit)).collect()
}

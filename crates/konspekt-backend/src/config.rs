//! Configuration for the external generation backend

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the claude CLI backend
///
/// All values are externally supplied (CLI flags, environment, or TOML)
/// and consumed only by the backend integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Command line to invoke, whitespace-separated (e.g. "claude" or
    /// "python3 /path/to/fake_cli.py")
    pub command: String,

    /// Model name passed to the backend
    pub model: String,

    /// Reasoning effort level passed to the backend
    pub effort: String,

    /// Per-attempt timeout (seconds)
    pub timeout_secs: u64,

    /// Extra attempts after the first failed one
    pub retries: u32,
}

impl BackendConfig {
    /// The per-attempt timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Split the command string into program and arguments
    ///
    /// Returns `None` when the command is empty or whitespace-only.
    pub fn command_parts(&self) -> Option<(String, Vec<String>)> {
        let mut parts = self.command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some((program, parts.collect()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.command_parts().is_none() {
            return Err("backend command must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            command: "claude".to_string(),
            model: "opus".to_string(),
            effort: "medium".to_string(),
            timeout_secs: 180,
            retries: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BackendConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(180));
    }

    #[test]
    fn test_empty_command_rejected() {
        let mut config = BackendConfig::default();
        config.command = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = BackendConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_command_parts_split() {
        let mut config = BackendConfig::default();
        config.command = "python3 /tmp/fake_cli.py --flag".to_string();
        let (program, args) = config.command_parts().unwrap();
        assert_eq!(program, "python3");
        assert_eq!(args, vec!["/tmp/fake_cli.py", "--flag"]);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BackendConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = BackendConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.command, parsed.command);
        assert_eq!(config.model, parsed.model);
        assert_eq!(config.timeout_secs, parsed.timeout_secs);
        assert_eq!(config.retries, parsed.retries);
    }
}

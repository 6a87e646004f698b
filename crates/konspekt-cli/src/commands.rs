//! Command execution.

use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use konspekt_backend::{BackendConfig, ClaudeCliBackend};
use konspekt_domain::Profile;
use konspekt_pipeline::{PipelineConfig, Runner};
use konspekt_store::JsonFileStore;
use serde_json::json;

/// Resolve the backend configuration for a run.
///
/// The backend surface is consulted only when the profile delegates to an
/// external backend: heuristic profiles run with the defaults, and a
/// broken `--claude-cmd` cannot abort them. Unknown profile names also
/// skip validation here; the runner rejects them itself.
pub fn resolve_backend_config(args: &RunArgs) -> Result<BackendConfig> {
    let delegated = Profile::parse(&args.profile).is_some_and(|p| p.is_delegated());
    if !delegated {
        return Ok(BackendConfig::default());
    }

    let config = BackendConfig {
        command: args.claude_cmd.clone(),
        model: args.model.clone(),
        effort: args.effort.clone(),
        timeout_secs: args.timeout_sec,
        retries: args.retries,
    };
    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

/// Execute the run command.
pub async fn execute_run(args: RunArgs) -> Result<()> {
    let backend_config = resolve_backend_config(&args)?;
    let backend = ClaudeCliBackend::from_config(&backend_config).map_err(CliError::Config)?;

    let pipeline_config = PipelineConfig {
        chunk_size: args.chunk_size,
        backend_retries: args.retries,
        backend_model: args.model,
    };
    let store = JsonFileStore::new(args.artifacts_dir, args.events_file);
    let runner = Runner::new(backend, store, pipeline_config);

    let outcome = runner.run(&args.profile, &args.source).await?;

    let summary = json!({
        "artifact_id": outcome.artifact_id.to_string(),
        "artifact_path": outcome.artifact_path.display().to_string(),
        "request_id": outcome.request_id.to_string(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run_args(profile: &str, claude_cmd: &str) -> RunArgs {
        RunArgs {
            profile: profile.to_string(),
            source: PathBuf::from("lesson.txt"),
            artifacts_dir: PathBuf::from("artifacts"),
            events_file: PathBuf::from("reports/events.jsonl"),
            chunk_size: 1000,
            claude_cmd: claude_cmd.to_string(),
            model: "opus".to_string(),
            effort: "medium".to_string(),
            timeout_sec: 180,
            retries: 2,
        }
    }

    #[test]
    fn test_heuristic_profiles_ignore_backend_command() {
        // An empty backend command must not abort a heuristic run.
        let config = resolve_backend_config(&run_args("digest_topics", "")).unwrap();
        assert_eq!(config.command, "claude");
        assert!(resolve_backend_config(&run_args("mentor_session", "")).is_ok());
    }

    #[test]
    fn test_delegated_profile_validates_backend_command() {
        let err = resolve_backend_config(&run_args("lesson_analysis", "")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_delegated_profile_keeps_supplied_settings() {
        let config =
            resolve_backend_config(&run_args("lesson_analysis", "podman run claude")).unwrap();
        assert_eq!(config.command, "podman run claude");
        assert_eq!(config.model, "opus");
        assert_eq!(config.timeout_secs, 180);
        assert_eq!(config.retries, 2);
    }

    #[test]
    fn test_unknown_profile_skips_backend_validation() {
        // The runner reports the unsupported name; the backend surface is
        // never consulted for a profile it cannot map.
        assert!(resolve_backend_config(&run_args("weekly_report", "")).is_ok());
    }
}

//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Konspekt - Transcript analysis pipeline.
#[derive(Debug, Parser)]
#[command(name = "konspekt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one analysis over a transcript file
    Run(RunArgs),
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Generation profile (digest_topics, mentor_session, lesson_analysis)
    #[arg(short, long)]
    pub profile: String,

    /// Path to the transcript file
    #[arg(short, long)]
    pub source: PathBuf,

    /// Directory artifacts are written to
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Append-only JSONL event log
    #[arg(long, default_value = "reports/events.jsonl")]
    pub events_file: PathBuf,

    /// Fixed chunk width in characters
    #[arg(long, default_value_t = 1000)]
    pub chunk_size: usize,

    /// Backend command line (split on whitespace)
    #[arg(long, env = "KONSPEKT_CLAUDE_CMD", default_value = "claude")]
    pub claude_cmd: String,

    /// Model requested from the backend
    #[arg(long, env = "KONSPEKT_CLAUDE_MODEL", default_value = "opus")]
    pub model: String,

    /// Reasoning effort requested from the backend
    #[arg(long, env = "KONSPEKT_CLAUDE_EFFORT", default_value = "medium")]
    pub effort: String,

    /// Per-attempt backend timeout in seconds
    #[arg(long, env = "KONSPEKT_CLAUDE_TIMEOUT_SEC", default_value_t = 180)]
    pub timeout_sec: u64,

    /// Extra backend attempts after the first failed one
    #[arg(long, env = "KONSPEKT_CLAUDE_RETRIES", default_value_t = 2)]
    pub retries: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args_minimal() {
        let cli = Cli::parse_from([
            "konspekt",
            "run",
            "--profile",
            "digest_topics",
            "--source",
            "lesson.txt",
        ]);
        let Command::Run(args) = cli.command;
        assert_eq!(args.profile, "digest_topics");
        assert_eq!(args.source, PathBuf::from("lesson.txt"));
        assert_eq!(args.artifacts_dir, PathBuf::from("artifacts"));
        assert_eq!(args.events_file, PathBuf::from("reports/events.jsonl"));
        assert_eq!(args.chunk_size, 1000);
        assert_eq!(args.claude_cmd, "claude");
        assert_eq!(args.model, "opus");
        assert_eq!(args.effort, "medium");
        assert_eq!(args.timeout_sec, 180);
        assert_eq!(args.retries, 2);
    }

    #[test]
    fn test_run_args_overrides() {
        let cli = Cli::parse_from([
            "konspekt",
            "run",
            "--profile",
            "lesson_analysis",
            "--source",
            "t.txt",
            "--claude-cmd",
            "podman run claude",
            "--timeout-sec",
            "30",
            "--retries",
            "0",
        ]);
        let Command::Run(args) = cli.command;
        assert_eq!(args.claude_cmd, "podman run claude");
        assert_eq!(args.timeout_sec, 30);
        assert_eq!(args.retries, 0);
    }

    #[test]
    fn test_missing_profile_rejected() {
        assert!(Cli::try_parse_from(["konspekt", "run", "--source", "t.txt"]).is_err());
    }
}

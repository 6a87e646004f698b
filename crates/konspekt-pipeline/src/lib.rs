//! Konspekt Pipeline
//!
//! Converts a raw transcript file into a validated, persisted analysis
//! artifact through a fixed multi-stage pipeline.
//!
//! # Architecture
//!
//! ```text
//! raw text → normalize → chunk → {fast metrics, dedupe}
//!          → generate (heuristic | external backend)
//!          → schema-validate → artifact + audit event
//! ```
//!
//! The heuristic profiles (`digest_topics`, `mentor_session`) are fully
//! deterministic; `lesson_analysis` delegates to a `GenerationBackend`
//! with a bounded retry/timeout protocol. Storage is injected through the
//! `ArtifactStore` trait, so no stage other than the final persistence
//! step touches the filesystem.
//!
//! # Example Usage
//!
//! ```no_run
//! use konspekt_backend::{BackendConfig, ClaudeCliBackend};
//! use konspekt_pipeline::{PipelineConfig, Runner};
//! use konspekt_store::JsonFileStore;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = ClaudeCliBackend::from_config(&BackendConfig::default())?;
//! let store = JsonFileStore::new("artifacts", "reports/events.jsonl");
//! let runner = Runner::new(backend, store, PipelineConfig::default());
//!
//! let outcome = runner.run("digest_topics", Path::new("transcript.txt")).await?;
//! println!("artifact: {}", outcome.artifact_path.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod chunking;
mod config;
mod error;
mod heuristics;
mod normalize;
mod parser;
mod prompt;
mod runner;
mod schema;
mod types;

pub use chunking::{chunk_text, dedupe_chunks, extract_fast, FastMetrics};
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use heuristics::HeuristicGenerator;
pub use normalize::normalize_input;
pub use prompt::build_lesson_prompt;
pub use runner::Runner;
pub use schema::lesson_schema;
pub use types::RunOutcome;

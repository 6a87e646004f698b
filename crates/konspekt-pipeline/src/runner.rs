//! Run orchestration
//!
//! The runner drives one source file through the fixed stage sequence and
//! owns the artifact/event lifecycle. Any stage failure aborts the run
//! before anything is persisted.

use crate::chunking::{chunk_text, dedupe_chunks, extract_fast};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::heuristics::HeuristicGenerator;
use crate::parser;
use crate::prompt::build_lesson_prompt;
use crate::schema::lesson_schema;
use crate::types::RunOutcome;
use chrono::Utc;
use konspekt_domain::{
    ArtifactId, ArtifactStore, BackendFailure, GenerationBackend, Profile, Provenance,
    QualityMetrics, RequestId, StageTimings,
};
use serde_json::{json, Value};
use std::fmt::Display;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Orchestrates pipeline runs against a backend and a store
///
/// Generic over both collaborators so tests can inject a fixture backend
/// and a temp-dir store without touching the production wiring.
pub struct Runner<B, S> {
    backend: B,
    store: S,
    config: PipelineConfig,
    heuristics: HeuristicGenerator,
}

impl<B, S> Runner<B, S>
where
    B: GenerationBackend,
    S: ArtifactStore,
    S::Error: Display,
{
    /// Create a runner with the default heuristic generator
    pub fn new(backend: B, store: S, config: PipelineConfig) -> Self {
        Self {
            backend,
            store,
            config,
            heuristics: HeuristicGenerator::new(),
        }
    }

    /// Replace the heuristic generator (custom lexicon or stopwords)
    pub fn with_heuristics(mut self, heuristics: HeuristicGenerator) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Execute one run: read the source, produce a validated result for
    /// `profile`, persist the artifact and append the audit event
    pub async fn run(&self, profile: &str, source: &Path) -> Result<RunOutcome, PipelineError> {
        self.config
            .validate()
            .map_err(PipelineError::Configuration)?;
        let profile = Profile::parse(profile)
            .ok_or_else(|| PipelineError::UnsupportedProfile(profile.to_string()))?;

        if !source.is_file() {
            return Err(PipelineError::SourceNotFound(
                source.display().to_string(),
            ));
        }
        let raw = std::fs::read_to_string(source)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PipelineError::SourceEmpty(source.display().to_string()));
        }

        info!(profile = %profile, source = %source.display(), "starting pipeline run");
        let mut timings = StageTimings::new();

        let started = Instant::now();
        let normalized = crate::normalize::normalize_input(raw);
        timings.record("normalize", started.elapsed());

        let started = Instant::now();
        let chunks = chunk_text(&normalized, self.config.chunk_size);
        timings.record("chunk", started.elapsed());

        let started = Instant::now();
        let fast = extract_fast(&chunks);
        timings.record("extract_fast", started.elapsed());

        let started = Instant::now();
        let deduped = dedupe_chunks(&chunks);
        timings.record("dedupe", started.elapsed());

        let started = Instant::now();
        let (result, provenance) = match profile {
            Profile::DigestTopics => (
                self.heuristics.digest_topics(&normalized, fast),
                Provenance::deterministic(),
            ),
            Profile::MentorSession => (
                self.heuristics.mentor_session(&normalized, fast),
                Provenance::deterministic(),
            ),
            Profile::LessonAnalysis => self.generate_delegated(&normalized).await?,
        };
        timings.record("generate", started.elapsed());

        let started = Instant::now();
        konspekt_validator::validate_result(profile, &result)?;
        timings.record("schema_validate", started.elapsed());

        let quality = QualityMetrics::compute(
            normalized.chars().count(),
            fast.words,
            fast.chunks,
            deduped.len(),
        );
        debug!(
            chunks = quality.chunk_count,
            deduped = quality.deduped_chunks,
            words = quality.word_count,
            "metrics computed"
        );

        let artifact_id = ArtifactId::new();
        let request_id = RequestId::new();
        let created_at = Utc::now().to_rfc3339();

        let payload = json!({
            "artifact_id": artifact_id.to_string(),
            "request_id": request_id.to_string(),
            "profile": profile.as_str(),
            "status": "success",
            "created_at": created_at,
            "analysis_provider": provenance.provider,
            "analysis_model": provenance.model,
            "quality": quality_json(&quality),
            "timings_ms": timings.to_json(),
            "result": result,
        });
        let artifact_path = self
            .store
            .write_artifact(&artifact_id, &payload)
            .map_err(|e| PipelineError::Store(e.to_string()))?;

        let event = json!({
            "ts": Utc::now().to_rfc3339(),
            "event": "analysis_run_completed",
            "artifact_id": artifact_id.to_string(),
            "profile": profile.as_str(),
            "source": source.display().to_string(),
            "analysis_provider": payload["analysis_provider"],
            "analysis_model": payload["analysis_model"],
            "quality": payload["quality"],
        });
        self.store
            .append_event(&event)
            .map_err(|e| PipelineError::Store(e.to_string()))?;

        info!(
            artifact_id = %artifact_id,
            path = %artifact_path.display(),
            "pipeline run completed"
        );
        Ok(RunOutcome {
            artifact_id,
            artifact_path,
            request_id,
        })
    }

    /// Produce the `lesson_analysis` result through the backend, retrying
    /// transient attempt failures up to `backend_retries` extra times
    async fn generate_delegated(
        &self,
        normalized: &str,
    ) -> Result<(Value, Provenance), PipelineError> {
        let prompt = build_lesson_prompt(normalized);
        let schema = lesson_schema();
        let attempts = self.config.backend_retries + 1;

        let mut last_error = String::from("unknown");
        for attempt in 1..=attempts {
            match self.backend.invoke(&prompt, &schema).await {
                Ok(envelope) => {
                    let structured = parser::extract_structured(&envelope)?;
                    let model =
                        parser::pick_model_name(&envelope, &self.config.backend_model);
                    return Ok((Value::Object(structured), Provenance::claude_code(model)));
                }
                Err(BackendFailure::NotFound(command)) => {
                    return Err(PipelineError::BackendNotFound(command));
                }
                Err(failure) => {
                    last_error = failure.to_string();
                    if attempt < attempts {
                        warn!(attempt, attempts, cause = %last_error, "backend attempt failed");
                    }
                }
            }
        }
        Err(PipelineError::BackendCallFailed(last_error))
    }
}

/// Serialize quality metrics with a stable field order
fn quality_json(quality: &QualityMetrics) -> Value {
    json!({
        "source_chars": quality.source_chars,
        "word_count": quality.word_count,
        "chunk_count": quality.chunk_count,
        "deduped_chunks": quality.deduped_chunks,
        "dedupe_ratio": quality.dedupe_ratio,
    })
}

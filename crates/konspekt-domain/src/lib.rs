//! Konspekt Domain Layer
//!
//! Core concepts and value objects for the transcript analysis pipeline.
//! This crate carries no infrastructure: identifiers, the closed profile
//! union, provenance, quality metrics, stage timings, and the trait seams
//! that infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **Profile**: a named generation mode selecting the result shape and
//!   the generation strategy (heuristic or delegated)
//! - **Provenance**: which backend and model produced a result
//! - **Artifact**: the persisted, immutable record of one pipeline run,
//!   identified by a fresh [`ArtifactId`]
//! - **QualityMetrics**: deterministic aggregates over the source text
//!
//! ## Architecture
//!
//! Infrastructure implementations live in other crates:
//! - `konspekt-backend` implements [`traits::GenerationBackend`]
//! - `konspekt-store` implements [`traits::ArtifactStore`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod failure;
pub mod id;
pub mod profile;
pub mod provenance;
pub mod quality;
pub mod timings;
pub mod traits;

// Re-exports for convenience
pub use failure::BackendFailure;
pub use id::{ArtifactId, RequestId};
pub use profile::Profile;
pub use provenance::Provenance;
pub use quality::QualityMetrics;
pub use timings::StageTimings;
pub use traits::{ArtifactStore, GenerationBackend};

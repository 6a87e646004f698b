//! Quality metrics computed for every run

use serde::{Deserialize, Serialize};

/// Deterministic aggregates describing the processed source
///
/// Identical source text always yields identical metrics, which makes the
/// artifact's `quality` block usable for regression comparisons across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Character count of the normalized source text
    pub source_chars: usize,

    /// Whitespace-delimited token count summed across chunks
    pub word_count: usize,

    /// Number of fixed-size chunks
    pub chunk_count: usize,

    /// Number of chunks remaining after exact-duplicate removal
    pub deduped_chunks: usize,

    /// deduped_chunks / max(1, chunk_count), rounded to 3 decimals
    pub dedupe_ratio: f64,
}

impl QualityMetrics {
    /// Compute metrics from stage outputs
    pub fn compute(
        source_chars: usize,
        word_count: usize,
        chunk_count: usize,
        deduped_chunks: usize,
    ) -> Self {
        let denominator = chunk_count.max(1) as f64;
        let ratio = deduped_chunks as f64 / denominator;
        Self {
            source_chars,
            word_count,
            chunk_count,
            deduped_chunks,
            dedupe_ratio: round3(ratio),
        }
    }
}

/// Round to 3 decimal places
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

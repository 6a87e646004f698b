//! Fixed-size chunking, fast metrics, and exact-duplicate removal

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Cheap aggregate metrics computed from chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastMetrics {
    /// Number of chunks
    pub chunks: usize,
    /// Whitespace-delimited token count summed across chunks
    pub words: usize,
}

/// Split normalized text into fixed-width character slices
///
/// Slices cover the text exactly once in order; the last chunk may be
/// shorter. Empty text yields an empty sequence. Widths are measured in
/// characters, never splitting a UTF-8 code point.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let width = chunk_size.max(1);
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Compute chunk count and total word count in O(total length)
pub fn extract_fast(chunks: &[String]) -> FastMetrics {
    FastMetrics {
        chunks: chunks.len(),
        words: chunks
            .iter()
            .map(|chunk| chunk.split_whitespace().count())
            .sum(),
    }
}

/// Remove chunks that are exact content duplicates
///
/// Each chunk is fingerprinted with SHA-256 over its bytes; the first
/// occurrence of each distinct fingerprint is kept, preserving first-seen
/// order. The fingerprint is used only for equality and never persisted.
pub fn dedupe_chunks(chunks: &[String]) -> Vec<String> {
    let mut seen: HashSet<[u8; 32]> = HashSet::with_capacity(chunks.len());
    let mut kept = Vec::new();
    for chunk in chunks {
        let fingerprint: [u8; 32] = Sha256::digest(chunk.as_bytes()).into();
        if seen.insert(fingerprint) {
            kept.push(chunk.clone());
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(chunk_text("", 1000).is_empty());
    }

    #[test]
    fn test_exact_multiple_of_chunk_size() {
        let chunks = chunk_text(&"a".repeat(2000), 1000);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.chars().count() == 1000));
    }

    #[test]
    fn test_last_chunk_may_be_shorter() {
        let chunks = chunk_text(&"a".repeat(2500), 1000);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].chars().count(), 500);
    }

    #[test]
    fn test_chunking_counts_characters_not_bytes() {
        // Cyrillic characters are two bytes each in UTF-8
        let text = "чанк".repeat(300); // 1200 chars
        let chunks = chunk_text(&text, 1000);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 1000);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_fast_metrics() {
        let chunks = vec!["раз два три".to_string(), "четыре пять".to_string()];
        let fast = extract_fast(&chunks);
        assert_eq!(fast.chunks, 2);
        assert_eq!(fast.words, 5);
    }

    #[test]
    fn test_fast_metrics_empty() {
        let fast = extract_fast(&[]);
        assert_eq!(fast.chunks, 0);
        assert_eq!(fast.words, 0);
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let chunks = vec![
            "alpha".to_string(),
            "beta".to_string(),
            "alpha".to_string(),
            "gamma".to_string(),
            "beta".to_string(),
        ];
        assert_eq!(dedupe_chunks(&chunks), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_dedupe_positions_do_not_matter() {
        let chunks = vec!["x".to_string(), "y".to_string(), "x".to_string()];
        assert_eq!(dedupe_chunks(&chunks).len(), 2);
    }

    proptest::proptest! {
        #[test]
        fn prop_dedupe_is_order_preserving_subsequence(
            chunks in proptest::collection::vec("[ab]{1,3}", 0..30)
        ) {
            let deduped = dedupe_chunks(&chunks);
            proptest::prop_assert!(deduped.len() <= chunks.len());

            // Every kept chunk appears in the input, in the same relative order.
            let mut cursor = chunks.iter();
            for kept in &deduped {
                proptest::prop_assert!(cursor.any(|c| c == kept));
            }
        }

        #[test]
        fn prop_chunks_cover_text_exactly_once(
            text in "\\PC{0,500}",
            width in 1usize..64,
        ) {
            let chunks = chunk_text(&text, width);
            proptest::prop_assert_eq!(chunks.concat(), text);
            for chunk in chunks.iter().take(chunks.len().saturating_sub(1)) {
                proptest::prop_assert_eq!(chunk.chars().count(), width);
            }
        }
    }
}

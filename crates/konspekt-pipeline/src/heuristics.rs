//! Deterministic heuristic profile generators
//!
//! `digest_topics` and `mentor_session` are computed from the normalized
//! text and the fast metrics with no external calls: identical input
//! always produces an identical result.

use crate::chunking::FastMetrics;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Lexicon matches are capped before frequency top-up kicks in
const TOPIC_CAP: usize = 8;

/// Hard cap on the emitted topics list
const TOPIC_LIMIT: usize = 15;

/// Fallback summary length (characters) when no sentence boundary exists
const SUMMARY_FALLBACK_CHARS: usize = 200;

/// Minimum token length considered for frequency-ranked topics
const MIN_TOKEN_CHARS: usize = 7;

/// Known domain phrases, matched as case-insensitive substrings in order
const DEFAULT_LEXICON: &[(&str, &str)] = &[
    ("микросервис", "Микросервисная архитектура"),
    ("event-driven", "Event-driven подход"),
    ("транскрипт", "Анализ транскриптов"),
    ("чанк", "Чанкирование контента"),
    ("дайджест", "Генерация дайджестов"),
    ("github issue", "Управление задачами через GitHub Issues"),
    ("пайплайн", "Пайплайн обработки"),
    ("тест-гейт", "Тест-гейты качества"),
];

/// High-frequency filler words excluded from frequency ranking
const DEFAULT_STOPWORDS: &[&str] = &[
    "сегодня", "уроке", "потом", "как", "чтобы", "всего", "через", "задачи",
];

/// Generator for the heuristic profiles
///
/// The lexicon and stopword set default to the Russian education-content
/// tables but are injectable for other domains.
pub struct HeuristicGenerator {
    lexicon: Vec<(String, String)>,
    stopwords: Vec<String>,
}

impl HeuristicGenerator {
    /// Create a generator with the default domain tables
    pub fn new() -> Self {
        Self {
            lexicon: DEFAULT_LEXICON
                .iter()
                .map(|(needle, label)| (needle.to_string(), label.to_string()))
                .collect(),
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the topic lexicon (matched in the given order)
    pub fn with_lexicon(mut self, lexicon: Vec<(String, String)>) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Replace the stopword set used by frequency ranking
    pub fn with_stopwords(mut self, stopwords: Vec<String>) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Build the `digest_topics` result
    pub fn digest_topics(&self, text: &str, fast: FastMetrics) -> Value {
        let topics: Vec<String> = self
            .extract_topics(text)
            .into_iter()
            .take(TOPIC_LIMIT)
            .collect();
        let sentences = split_sentences(text);
        let summary = sentences
            .first()
            .cloned()
            .unwrap_or_else(|| head_chars(text, SUMMARY_FALLBACK_CHARS));
        json!({
            "topics": topics,
            "summary": summary,
            "metrics": {"word_count": fast.words, "chunk_count": fast.chunks},
        })
    }

    /// Build the `mentor_session` result
    pub fn mentor_session(&self, text: &str, fast: FastMetrics) -> Value {
        let sentences = split_sentences(text);
        let summary = if sentences.is_empty() {
            head_chars(text, SUMMARY_FALLBACK_CHARS)
        } else {
            sentences[..sentences.len().min(2)].join(". ")
        };
        json!({
            "summary": summary,
            "next_actions": [
                "Сформировать список задач на неделю",
                "Зафиксировать риски и допущения",
                "Подготовить артефакты для ретроспективы",
            ],
            "metrics": {"word_count": fast.words, "chunk_count": fast.chunks},
        })
    }

    /// Extract up to 8 topics: lexicon matches first, then frequency-ranked
    /// long tokens
    fn extract_topics(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut topics: Vec<String> = Vec::new();

        for (needle, label) in &self.lexicon {
            if lower.contains(needle.as_str()) && !topics.iter().any(|t| t == label) {
                topics.push(label.clone());
            }
        }
        if topics.len() >= TOPIC_CAP {
            topics.truncate(TOPIC_CAP);
            return topics;
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in tokenize(&lower) {
            if token.chars().count() < MIN_TOKEN_CHARS
                || self.stopwords.iter().any(|s| s == token)
            {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        // Highest count first, ties broken by lexical order of the token
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        for (token, _) in ranked {
            let label = capitalize(token);
            if !topics.iter().any(|t| t == &label) {
                topics.push(label);
            }
            if topics.len() >= TOPIC_CAP {
                break;
            }
        }
        topics
    }
}

impl Default for HeuristicGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text into sentences on `[.!?]` + whitespace or newline runs,
/// trimming boundary punctuation from each part
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            flush_sentence(&mut parts, &mut current);
            while chars.peek() == Some(&'\n') {
                chars.next();
            }
        } else if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            flush_sentence(&mut parts, &mut current);
        } else {
            current.push(c);
        }
    }
    flush_sentence(&mut parts, &mut current);
    parts
}

fn flush_sentence(parts: &mut Vec<String>, current: &mut String) {
    let trimmed = current
        .trim_matches(|c: char| matches!(c, ' ' | '.' | '!' | '?' | ','))
        .to_string();
    if !trimmed.trim().is_empty() {
        parts.push(trimmed);
    }
    current.clear();
}

/// Word-like tokens: runs of alphanumeric characters and hyphens
fn tokenize(lower: &str) -> impl Iterator<Item = &str> {
    lower
        .split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .filter(|token| !token.is_empty())
}

/// Uppercase the first character (Unicode-aware)
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First `limit` characters of `text`
fn head_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

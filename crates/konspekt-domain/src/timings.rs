//! Per-stage wall-clock timings

use serde_json::Value;
use std::time::Duration;

/// Ordered record of stage durations in milliseconds
///
/// Insertion order is preserved so the serialized `timings_ms` block reads
/// in pipeline order.
#[derive(Debug, Clone, Default)]
pub struct StageTimings {
    entries: Vec<(String, u64)>,
}

impl StageTimings {
    /// Create an empty timing record
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the duration of a completed stage
    pub fn record(&mut self, stage: impl Into<String>, elapsed: Duration) {
        self.entries.push((stage.into(), elapsed.as_millis() as u64));
    }

    /// Iterate over recorded (stage, millis) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, ms)| (name.as_str(), *ms))
    }

    /// Number of recorded stages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no stage has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a JSON object keyed by stage name, in insertion order
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (name, ms) in &self.entries {
            map.insert(name.clone(), Value::from(*ms));
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut t = StageTimings::new();
        t.record("normalize", Duration::from_millis(3));
        t.record("chunk", Duration::from_millis(1));
        t.record("generate", Duration::from_millis(250));

        let names: Vec<&str> = t.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["normalize", "chunk", "generate"]);
    }

    #[test]
    fn test_millisecond_truncation() {
        let mut t = StageTimings::new();
        t.record("stage", Duration::from_micros(2500));
        assert_eq!(t.iter().next(), Some(("stage", 2)));
    }

    #[test]
    fn test_json_object_shape() {
        let mut t = StageTimings::new();
        t.record("normalize", Duration::from_millis(5));
        let json = t.to_json();
        assert_eq!(json["normalize"], 5);
    }
}

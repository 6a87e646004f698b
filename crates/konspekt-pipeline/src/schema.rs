//! JSON Schema handed to the generation backend for `lesson_analysis`
//!
//! The schema doubles as the contract the validator enforces after the
//! backend responds; the `required` list is the full 13-field set and
//! `additionalProperties` is false at every level.

use serde_json::{json, Value};

/// Build the lesson-analysis response schema
pub fn lesson_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": [
            "concepts_explained",
            "detailed_summary",
            "homework",
            "improvement_suggestions",
            "interactivity",
            "learning_outcomes_stated",
            "lesson_structure",
            "next_lesson_focus",
            "practical_activities",
            "preparation_for_next",
            "questions_asked",
            "summary",
            "theory_practice_balance",
        ],
        "properties": {
            "summary": {"type": "string"},
            "detailed_summary": {"type": ["string", "null"]},
            "questions_asked": {"type": "array", "items": {"type": "string"}},
            "concepts_explained": {"type": "array", "items": {"type": "string"}},
            "practical_activities": {
                "type": "array",
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "required": ["activity", "duration_estimate", "participation"],
                    "properties": {
                        "activity": {"type": "string"},
                        "duration_estimate": {"type": ["string", "null"]},
                        "participation": {"type": ["string", "null"]},
                    },
                },
            },
            "theory_practice_balance": {
                "type": "object",
                "additionalProperties": false,
                "required": ["theory_percent", "practice_percent", "assessment"],
                "properties": {
                    "theory_percent": {"type": "integer"},
                    "practice_percent": {"type": "integer"},
                    "assessment": {"type": ["string", "null"]},
                },
            },
            "interactivity": {
                "type": "object",
                "additionalProperties": false,
                "required": [
                    "questions_to_students",
                    "polls_or_checks",
                    "breakouts_or_pair_work",
                ],
                "properties": {
                    "questions_to_students": {"type": "integer"},
                    "polls_or_checks": {"type": "array", "items": {"type": "string"}},
                    "breakouts_or_pair_work": {"type": "boolean"},
                },
            },
            "learning_outcomes_stated": {"type": "boolean"},
            "lesson_structure": {
                "type": "object",
                "additionalProperties": false,
                "required": ["has_opening", "has_closing", "transitions_clear"],
                "properties": {
                    "has_opening": {"type": "boolean"},
                    "has_closing": {"type": "boolean"},
                    "transitions_clear": {"type": "boolean"},
                },
            },
            "improvement_suggestions": {"type": "array", "items": {"type": "string"}},
            "homework": {
                "type": "array",
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "required": ["task", "description", "deadline"],
                    "properties": {
                        "task": {"type": "string"},
                        "description": {"type": ["string", "null"]},
                        "deadline": {"type": ["string", "null"]},
                    },
                },
            },
            "preparation_for_next": {"type": "array", "items": {"type": "string"}},
            "next_lesson_focus": {"type": ["string", "null"]},
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use konspekt_validator::LESSON_REQUIRED_FIELDS;

    #[test]
    fn test_required_matches_validator_contract() {
        let schema = lesson_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required.len(), LESSON_REQUIRED_FIELDS.len());
        for field in LESSON_REQUIRED_FIELDS {
            assert!(required.contains(&field), "missing {field}");
        }
    }

    #[test]
    fn test_required_is_sorted() {
        let schema = lesson_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        let mut sorted = required.clone();
        sorted.sort_unstable();
        assert_eq!(required, sorted);
    }

    #[test]
    fn test_closed_object() {
        let schema = lesson_schema();
        assert_eq!(schema["additionalProperties"], false);
        assert_eq!(
            schema["properties"]["theory_practice_balance"]["additionalProperties"],
            false
        );
    }
}

//! Per-profile result validation logic

use crate::ValidationError;
use konspekt_domain::Profile;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// The exact key set of a lesson_analysis result
pub const LESSON_REQUIRED_FIELDS: [&str; 13] = [
    "summary",
    "detailed_summary",
    "questions_asked",
    "concepts_explained",
    "practical_activities",
    "theory_practice_balance",
    "interactivity",
    "learning_outcomes_stated",
    "lesson_structure",
    "improvement_suggestions",
    "homework",
    "preparation_for_next",
    "next_lesson_focus",
];

/// Validate a generated result against its profile's contract
pub fn validate_result(profile: Profile, result: &Value) -> Result<(), ValidationError> {
    match profile {
        Profile::LessonAnalysis => validate_lesson_contract(result),
        Profile::DigestTopics => require_keys(result, &["topics", "summary", "metrics"]),
        Profile::MentorSession => require_keys(result, &["summary", "next_actions", "metrics"]),
    }
}

/// Heuristic profiles: required keys must be present, extras tolerated
fn require_keys(result: &Value, required: &[&str]) -> Result<(), ValidationError> {
    let obj = expect_object("result", result)?;
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|key| !obj.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::new(
            "result",
            format!("missing keys: {}", missing.join(", ")),
        ));
    }
    Ok(())
}

/// lesson_analysis: exact key-set match, then ordered per-field checks
fn validate_lesson_contract(result: &Value) -> Result<(), ValidationError> {
    let obj = expect_object("result", result)?;

    let actual: BTreeSet<&str> = obj.keys().map(String::as_str).collect();
    let required: BTreeSet<&str> = LESSON_REQUIRED_FIELDS.iter().copied().collect();
    let missing: Vec<&str> = required.difference(&actual).copied().collect();
    let extra: Vec<&str> = actual.difference(&required).copied().collect();
    if !missing.is_empty() || !extra.is_empty() {
        let mut parts = Vec::new();
        if !missing.is_empty() {
            parts.push(format!("missing={}", missing.join(",")));
        }
        if !extra.is_empty() {
            parts.push(format!("extra={}", extra.join(",")));
        }
        return Err(ValidationError::new("result", parts.join("; ")));
    }

    expect_string("summary", &obj["summary"])?;
    expect_optional_string("detailed_summary", &obj["detailed_summary"])?;
    expect_string_list("questions_asked", &obj["questions_asked"])?;
    expect_string_list("concepts_explained", &obj["concepts_explained"])?;

    let practical = expect_array("practical_activities", &obj["practical_activities"])?;
    for (idx, item) in practical.iter().enumerate() {
        let field = format!("practical_activities[{}]", idx);
        let item = expect_object(&field, item)?;
        expect_exact_keys(&field, item, &["activity", "duration_estimate", "participation"])?;
        expect_string(&format!("{}.activity", field), &item["activity"])?;
        expect_optional_string(&format!("{}.duration_estimate", field), &item["duration_estimate"])?;
        expect_optional_string(&format!("{}.participation", field), &item["participation"])?;
    }

    let balance = expect_object("theory_practice_balance", &obj["theory_practice_balance"])?;
    expect_exact_keys(
        "theory_practice_balance",
        balance,
        &["theory_percent", "practice_percent", "assessment"],
    )?;
    let theory = expect_int("theory_practice_balance.theory_percent", &balance["theory_percent"])?;
    let practice = expect_int(
        "theory_practice_balance.practice_percent",
        &balance["practice_percent"],
    )?;
    expect_optional_string("theory_practice_balance.assessment", &balance["assessment"])?;
    if !(0..=100).contains(&theory) {
        return Err(ValidationError::new(
            "theory_practice_balance.theory_percent",
            "out of range [0, 100]",
        ));
    }
    if !(0..=100).contains(&practice) {
        return Err(ValidationError::new(
            "theory_practice_balance.practice_percent",
            "out of range [0, 100]",
        ));
    }
    if theory + practice != 100 {
        return Err(ValidationError::new(
            "theory_practice_balance",
            "percentages must sum to 100",
        ));
    }

    let interactivity = expect_object("interactivity", &obj["interactivity"])?;
    expect_exact_keys(
        "interactivity",
        interactivity,
        &["questions_to_students", "polls_or_checks", "breakouts_or_pair_work"],
    )?;
    let questions = expect_int(
        "interactivity.questions_to_students",
        &interactivity["questions_to_students"],
    )?;
    if questions < 0 {
        return Err(ValidationError::new(
            "interactivity.questions_to_students",
            "must be >= 0",
        ));
    }
    expect_string_list("interactivity.polls_or_checks", &interactivity["polls_or_checks"])?;
    expect_bool(
        "interactivity.breakouts_or_pair_work",
        &interactivity["breakouts_or_pair_work"],
    )?;

    expect_bool("learning_outcomes_stated", &obj["learning_outcomes_stated"])?;

    let structure = expect_object("lesson_structure", &obj["lesson_structure"])?;
    expect_exact_keys(
        "lesson_structure",
        structure,
        &["has_opening", "has_closing", "transitions_clear"],
    )?;
    expect_bool("lesson_structure.has_opening", &structure["has_opening"])?;
    expect_bool("lesson_structure.has_closing", &structure["has_closing"])?;
    expect_bool("lesson_structure.transitions_clear", &structure["transitions_clear"])?;

    expect_string_list("improvement_suggestions", &obj["improvement_suggestions"])?;

    let homework = expect_array("homework", &obj["homework"])?;
    for (idx, item) in homework.iter().enumerate() {
        let field = format!("homework[{}]", idx);
        let item = expect_object(&field, item)?;
        expect_exact_keys(&field, item, &["task", "description", "deadline"])?;
        expect_string(&format!("{}.task", field), &item["task"])?;
        expect_optional_string(&format!("{}.description", field), &item["description"])?;
        expect_optional_string(&format!("{}.deadline", field), &item["deadline"])?;
    }

    expect_string_list("preparation_for_next", &obj["preparation_for_next"])?;
    expect_optional_string("next_lesson_focus", &obj["next_lesson_focus"])?;

    Ok(())
}

fn expect_object<'a>(field: &str, value: &'a Value) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new(field, "must be an object"))
}

fn expect_array<'a>(field: &str, value: &'a Value) -> Result<&'a Vec<Value>, ValidationError> {
    value
        .as_array()
        .ok_or_else(|| ValidationError::new(field, "must be a list"))
}

fn expect_string(field: &str, value: &Value) -> Result<(), ValidationError> {
    if value.is_string() {
        Ok(())
    } else {
        Err(ValidationError::new(field, "must be a string"))
    }
}

fn expect_optional_string(field: &str, value: &Value) -> Result<(), ValidationError> {
    if value.is_string() || value.is_null() {
        Ok(())
    } else {
        Err(ValidationError::new(field, "must be a string or null"))
    }
}

fn expect_bool(field: &str, value: &Value) -> Result<(), ValidationError> {
    if value.is_boolean() {
        Ok(())
    } else {
        Err(ValidationError::new(field, "must be a boolean"))
    }
}

fn expect_int(field: &str, value: &Value) -> Result<i64, ValidationError> {
    value
        .as_i64()
        .ok_or_else(|| ValidationError::new(field, "must be an integer"))
}

/// Every item must be a non-empty, non-whitespace-only string
fn expect_string_list(field: &str, value: &Value) -> Result<(), ValidationError> {
    let items = expect_array(field, value)?;
    for item in items {
        match item.as_str() {
            Some(s) if !s.trim().is_empty() => {}
            _ => {
                return Err(ValidationError::new(
                    field,
                    "list must contain non-empty strings",
                ))
            }
        }
    }
    Ok(())
}

fn expect_exact_keys(
    field: &str,
    obj: &Map<String, Value>,
    required: &[&str],
) -> Result<(), ValidationError> {
    let actual: BTreeSet<&str> = obj.keys().map(String::as_str).collect();
    let expected: BTreeSet<&str> = required.iter().copied().collect();
    if actual != expected {
        return Err(ValidationError::new(field, "wrong object keys"));
    }
    Ok(())
}

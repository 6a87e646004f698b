//! Interpretation of the backend's JSON envelope

use crate::error::PipelineError;
use serde_json::{Map, Value};

/// Pull the structured analysis object out of the backend envelope
///
/// Preference order: an explicit `structured_output` object, then the
/// `result` string re-parsed as a JSON object. An `is_error: true`
/// envelope is rejected outright and is never retried by the caller.
pub(crate) fn extract_structured(envelope: &Value) -> Result<Map<String, Value>, PipelineError> {
    if envelope.get("is_error") == Some(&Value::Bool(true)) {
        return Err(PipelineError::BackendOutputInvalid(
            "backend reported is_error=true".to_string(),
        ));
    }

    if let Some(structured) = envelope.get("structured_output").and_then(Value::as_object) {
        return Ok(structured.clone());
    }

    if let Some(text) = envelope.get("result").and_then(Value::as_str) {
        if !text.trim().is_empty() {
            let parsed: Value = serde_json::from_str(text).map_err(|e| {
                PipelineError::BackendOutputInvalid(format!("result is not valid JSON: {e}"))
            })?;
            if let Value::Object(map) = parsed {
                return Ok(map);
            }
        }
    }

    Err(PipelineError::BackendOutputInvalid(
        "no structured JSON payload in backend output".to_string(),
    ))
}

/// Resolve the model name to credit in provenance
///
/// The entry in `modelUsage` with the highest `costUSD` wins; ties keep
/// the first-seen entry. A missing or malformed map falls back to the
/// configured model.
pub(crate) fn pick_model_name(envelope: &Value, configured_model: &str) -> String {
    let Some(usage) = envelope.get("modelUsage").and_then(Value::as_object) else {
        return configured_model.to_string();
    };
    if usage.is_empty() {
        return configured_model.to_string();
    }

    let mut best_name = configured_model.to_string();
    let mut best_cost = -1.0_f64;
    for (name, data) in usage {
        let Some(cost) = data.get("costUSD").and_then(Value::as_f64) else {
            continue;
        };
        if cost > best_cost {
            best_name = name.clone();
            best_cost = cost;
        }
    }
    best_name
}

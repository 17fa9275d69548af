//! Strict parsing of model replies.
//!
//! The original system fed model output to an evaluator; here the reply is
//! schema-parsed with serde and anything that is not a JSON array of records
//! is refused.

use serde_json::Value;

use crate::error::LlmError;

/// Parse a model reply into a list of raw action records.
///
/// Tolerates a Markdown code fence around the payload (models add one
/// despite instructions), but the content itself must be a JSON array.
/// Individual records are left untyped; structural validation happens in
/// the reconciliation engine's validator.
pub fn parse_actions(content: &str) -> Result<Vec<Value>, LlmError> {
    let payload = strip_code_fence(content.trim());

    let value: Value = serde_json::from_str(payload)
        .map_err(|e| LlmError::MalformedResponse(format!("not valid JSON: {e}")))?;

    match value {
        Value::Array(actions) => Ok(actions),
        other => Err(LlmError::MalformedResponse(format!(
            "expected a JSON array of actions, got {other}"
        ))),
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json", ...) up to the first newline, and the
    // closing fence.
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    body.trim().trim_end_matches("```").trim()
}

//! AI Reformat Gateway — sends a resume to the completion model for
//! professional rewording and decodes the reply back into the same shape.
//!
//! One invocation walks `Validating → Requesting → ParsingReply` and ends in
//! success or a terminal failure. Nothing is retried and the caller's
//! resume is never touched on failure; the module holds no state between
//! invocations.

pub mod handlers;
pub mod prompts;

use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::models::resume::ResumeData;

/// Rejects payloads with nothing worth reformatting: no name, no experience,
/// and no education. Runs before any network I/O.
pub fn validate_payload(data: &ResumeData) -> Result<(), AppError> {
    if data.is_empty_for_reformat() {
        return Err(AppError::Validation(
            "resume has no name, experience, or education to reformat".to_string(),
        ));
    }
    Ok(())
}

/// Decodes the model reply into a `ResumeData`.
///
/// The decode is all-or-nothing: either the whole reply parses as a resume
/// object or the invocation fails with a parse error. Markdown code fences
/// around the JSON are tolerated; prose is not. The reply must be a JSON
/// object — serde's derived `Deserialize` would also fill struct fields
/// positionally from an array, so non-objects are rejected up front.
pub fn decode_reply(text: &str) -> Result<ResumeData, AppError> {
    let text = strip_json_fences(text);
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| AppError::Parse(format!("model reply is not valid JSON: {e}")))?;
    if !value.is_object() {
        return Err(AppError::Parse(
            "model reply is not a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| AppError::Parse(format!("model reply is not a valid resume object: {e}")))
}

//! Axum route handlers for the resume API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::format::prompts::{build_format_prompt, format_system};
use crate::format::{decode_reply, validate_payload};
use crate::models::resume::ResumeData;
use crate::render::{render, TemplateVariant};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub resume: ResumeData,
    /// One of "modern", "classic", "minimal".
    pub template: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub html: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/format
///
/// Sends the resume to the completion model for professional rewording and
/// returns the model's version verbatim — replacement is total, never a
/// merge with the input. Exactly one outbound call; every failure is
/// terminal for this invocation.
pub async fn handle_format_resume(
    State(state): State<AppState>,
    Json(resume): Json<ResumeData>,
) -> Result<Json<ResumeData>, AppError> {
    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::Configuration("OPENAI_API_KEY is not set on the server".to_string())
    })?;

    validate_payload(&resume)?;

    let prompt = build_format_prompt(&resume);
    let reply = llm.complete(&prompt, &format_system()).await?;
    let improved = decode_reply(&reply)?;

    info!(
        "Reformatted resume: {} experience entries, {} education entries",
        improved.experience.len(),
        improved.education.len()
    );

    Ok(Json(improved))
}

/// POST /api/v1/resume/preview
///
/// Renders the resume into the requested template and returns the HTML
/// document. Pure over the payload; any resume renders, even an empty one.
pub async fn handle_preview_resume(
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let variant: TemplateVariant = request
        .template
        .parse()
        .map_err(AppError::Validation)?;

    let html = render(&request.resume, variant);
    debug!(
        "Rendered {} preview ({} bytes)",
        variant.as_str(),
        html.len()
    );

    Ok(Json(PreviewResponse { html }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_preview_rejects_unknown_template() {
        let request = PreviewRequest {
            resume: ResumeData::default(),
            template: "brutalist".to_string(),
        };
        let err = handle_preview_resume(Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_preview_renders_each_known_template() {
        for template in ["modern", "classic", "minimal"] {
            let request = PreviewRequest {
                resume: ResumeData {
                    full_name: "Jane Doe".to_string(),
                    ..Default::default()
                },
                template: template.to_string(),
            };
            let Json(response) = handle_preview_resume(Json(request)).await.unwrap();
            assert!(response.html.contains("Jane Doe"), "{template} lost the name");
        }
    }

    #[test]
    fn test_preview_request_deserialization() {
        let json = serde_json::json!({
            "resume": { "fullName": "Jane Doe" },
            "template": "modern"
        });
        let request: PreviewRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.template, "modern");
        assert_eq!(request.resume.full_name, "Jane Doe");
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure of a reformat invocation is terminal: nothing here is
/// retried automatically, and no variant leaves partial state behind.
#[derive(Debug, Error)]
pub enum AppError {
    /// The model credential is missing from the environment. Not recoverable
    /// without operator action.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request payload is empty or insufficient. Recoverable by the
    /// caller supplying more data.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The model reply could not be decoded into the expected resume shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The outbound completion call itself failed.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Http(e) => AppError::Transport(format!("completion request failed: {e}")),
            LlmError::Api { status, message } => {
                AppError::Transport(format!("completion API returned {status}: {message}"))
            }
            LlmError::EmptyContent => AppError::Parse("model reply was empty".to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Configuration(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Parse(msg) => {
                tracing::error!("Reply parse error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Transport(msg) => {
                tracing::error!("Transport error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {e}"))
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_maps_to_400() {
        let response =
            AppError::Configuration("OPENAI_API_KEY is not set".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_maps_to_400() {
        let response = AppError::Validation("nothing to reformat".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_error_maps_to_500() {
        let response = AppError::Parse("not a resume object".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_transport_error_maps_to_500() {
        let response = AppError::Transport("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_llm_api_error_becomes_transport() {
        let err: AppError = LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Transport(_)));
    }

    #[test]
    fn test_llm_empty_content_becomes_parse() {
        let err: AppError = LlmError::EmptyContent.into();
        assert!(matches!(err, AppError::Parse(_)));
    }
}

//! Error types for the Writecheck API

use analysis_engine::error::AnalysisError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Empty text received")]
    EmptyText,

    #[error("Language engine failure: {0}")]
    Engine(String),

    #[error("Failed to produce corrected document: {0}")]
    Artifact(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyInput => ApiError::EmptyText,
            AnalysisError::Engine(e) => ApiError::Engine(e.to_string()),
            AnalysisError::ArtifactWrite(e) => ApiError::Artifact(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::EmptyText => (StatusCode::BAD_REQUEST, "Empty text received".to_string()),
            ApiError::Engine(e) => {
                tracing::error!("Language engine failure: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Language engine failure".to_string(),
                )
            }
            ApiError::Artifact(e) => {
                tracing::error!("Artifact write failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to produce corrected document".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

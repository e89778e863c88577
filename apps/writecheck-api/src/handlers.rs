//! HTTP handlers for the Writecheck API

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use shared_types::Report;

use crate::error::ApiError;
use crate::models::{CheckRequest, CorrectRequest};
use crate::state::AppState;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Run the compliance check over the submitted text.
pub async fn check_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<Report>, ApiError> {
    // Engine calls can be long-running for large documents; keep them off
    // the request loop.
    let report = tokio::task::spawn_blocking(move || {
        state.analyzer.check(&req.file_text, req.include_analysis)
    })
    .await
    .map_err(|e| ApiError::Internal(e.into()))??;

    tracing::info!(
        "Checked document: {} sentences, {} grammar issues",
        report.summary.total_sentences,
        report.summary.num_grammar_issues
    );

    Ok(Json(report))
}

/// Correct the submitted text and return the `.docx` artifact for download.
pub async fn correct_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CorrectRequest>,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let artifact = tokio::task::spawn_blocking(move || {
        state
            .analyzer
            .correct(&req.file_text, req.filename.as_deref())
    })
    .await
    .map_err(|e| ApiError::Internal(e.into()))??;

    tracing::info!(
        "Corrected document: {} bytes as {}",
        artifact.bytes.len(),
        artifact.filename
    );

    Ok((
        StatusCode::OK,
        [
            ("Content-Type".to_string(), DOCX_CONTENT_TYPE.to_string()),
            (
                "Content-Disposition".to_string(),
                format!("attachment; filename=\"{}\"", artifact.filename),
            ),
        ],
        artifact.bytes,
    ))
}

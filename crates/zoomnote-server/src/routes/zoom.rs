//! Zoom resolution routes.
//!
//! - POST /v1/zoom - Resolve one zoom level of a note body
//! - POST /v1/analyze - Run every engine component over a note body
//!
//! Both accept a note as `{"title": ..., "body": ...}`; only the body is
//! analyzed.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde::{Deserialize, Serialize};
use zoomnote_core::{Beat, NoteText, ScriptClass, ZoomLevel};
use zoomnote_engine::{DEFAULT_MAX_KEYWORDS, analyze, classify, resolve};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /v1/zoom.
#[derive(Debug, Deserialize)]
pub struct ZoomRequest {
    #[serde(flatten)]
    pub note: NoteText,
    /// Requested level.
    pub level: ZoomLevel,
    /// Keyword budget for the Keywords level (default: 5).
    pub max_keywords: Option<usize>,
}

/// Response for POST /v1/zoom.
#[derive(Debug, Serialize)]
pub struct ZoomResponse {
    pub level: ZoomLevel,
    pub script: ScriptClass,
    pub output: String,
    /// True if the output came from the summary cache.
    pub cached: bool,
}

/// Request body for POST /v1/analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(flatten)]
    pub note: NoteText,
    pub max_keywords: Option<usize>,
}

/// Response for POST /v1/analyze.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub script: ScriptClass,
    pub content_key: String,
    pub sentence_count: usize,
    pub keywords: Vec<String>,
    pub hashtags: Vec<String>,
    pub beats: Vec<Beat>,
    /// One view per zoom level, keyed by level name.
    pub views: BTreeMap<ZoomLevel, String>,
}

/// Validates the keyword budget. Values above the engine limit are capped
/// by the engine itself.
pub(crate) fn keyword_budget(max_keywords: Option<usize>) -> ApiResult<usize> {
    match max_keywords {
        Some(0) => Err(ApiError::BadRequest(
            "max_keywords must be at least 1".to_string(),
        )),
        Some(n) => Ok(n),
        None => Ok(DEFAULT_MAX_KEYWORDS),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/zoom - Resolve one level, using the summary cache.
async fn zoom(
    State(state): State<AppState>,
    payload: Result<Json<ZoomRequest>, JsonRejection>,
) -> ApiResult<Json<ZoomResponse>> {
    let Json(request) = payload?;
    let max_keywords = keyword_budget(request.max_keywords)?;
    let note = &request.note;
    let key = note.content_key();
    let script = classify(&note.body);

    if let Some(output) = state.cache().get(&key, request.level, max_keywords) {
        tracing::debug!(content = %key, level = %request.level, "summary cache hit");
        return Ok(Json(ZoomResponse {
            level: request.level,
            script,
            output,
            cached: true,
        }));
    }

    let output = resolve(&note.body, request.level, max_keywords);
    state
        .cache()
        .set(key, request.level, max_keywords, output.clone());

    tracing::debug!(content = %key, level = %request.level, "resolved zoom level");

    Ok(Json(ZoomResponse {
        level: request.level,
        script,
        output,
        cached: false,
    }))
}

/// POST /v1/analyze - Run every engine component.
async fn analyze_note(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let Json(request) = payload?;
    let max_keywords = keyword_budget(request.max_keywords)?;
    let note = &request.note;
    let analysis = analyze(&note.body, max_keywords);

    Ok(Json(AnalyzeResponse {
        script: analysis.script,
        content_key: note.content_key().to_hex(),
        sentence_count: analysis.sentence_count,
        keywords: analysis.keywords,
        hashtags: analysis.hashtags,
        beats: analysis.beats,
        views: analysis.views.into_iter().collect(),
    }))
}

/// Build zoom routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/zoom", post(zoom))
        .route("/v1/analyze", post(analyze_note))
}

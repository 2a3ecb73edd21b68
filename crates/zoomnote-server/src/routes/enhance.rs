//! Enhancement routes.
//!
//! - POST /v1/enhance/{feature} - title, summary, tags or keywords
//!
//! These never fail because the remote model failed: the response carries
//! the local result and a diagnostic instead.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::post,
};
use serde::{Deserialize, Serialize};
use zoomnote_core::NoteText;
use zoomnote_enhance::{EnhanceError, Enhanced, Source};

use crate::error::{ApiError, ApiResult};
use crate::routes::zoom::keyword_budget;
use crate::state::AppState;

/// Request body for POST /v1/enhance/{feature}.
#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    #[serde(flatten)]
    pub note: NoteText,
    /// Only used by the keywords feature.
    pub max_keywords: Option<usize>,
}

/// Why the remote result was not used.
#[derive(Debug, Serialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
}

impl From<&EnhanceError> for Diagnostic {
    fn from(error: &EnhanceError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

/// Response for POST /v1/enhance/{feature}.
#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub feature: String,
    /// Feature payload, e.g. `{"title": "..."}`.
    pub result: serde_json::Value,
    pub source: Source,
    pub diagnostic: Option<Diagnostic>,
}

fn respond<T: Serialize>(feature: &str, enhanced: Enhanced<T>) -> ApiResult<Json<EnhanceResponse>> {
    let result = serde_json::to_value(&enhanced.value)
        .map_err(|e| ApiError::Internal(format!("failed to encode {feature} result: {e}")))?;

    Ok(Json(EnhanceResponse {
        feature: feature.to_string(),
        result,
        source: enhanced.source,
        diagnostic: enhanced.diagnostic.as_ref().map(Diagnostic::from),
    }))
}

/// POST /v1/enhance/{feature} - Run one enhancement feature.
async fn enhance(
    State(state): State<AppState>,
    Path(feature): Path<String>,
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> ApiResult<Json<EnhanceResponse>> {
    let Json(request) = payload?;
    let enhancer = state.enhancer();
    if request.note.is_blank() {
        tracing::debug!(feature = %feature, "blank note, enhancement is local only");
    }
    let body = request.note.body.as_str();

    match feature.as_str() {
        "title" => respond(&feature, enhancer.suggest_title(body).await),
        "summary" => respond(&feature, enhancer.summarize(body).await),
        "tags" => respond(&feature, enhancer.suggest_tags(body).await),
        "keywords" => {
            let max_keywords = keyword_budget(request.max_keywords)?;
            respond(&feature, enhancer.extract_keywords(body, max_keywords).await)
        }
        other => Err(ApiError::NotFound(format!("feature {other}"))),
    }
}

/// Build enhancement routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/enhance/{feature}", post(enhance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_from_error() {
        let diagnostic = Diagnostic::from(&EnhanceError::RateLimited);
        assert_eq!(diagnostic.code, "RATE_LIMITED");
        assert_eq!(diagnostic.message, "rate limited");
    }

    #[test]
    fn local_result_encodes() {
        let enhanced = Enhanced {
            value: zoomnote_core::TagList {
                tags: vec!["#timing".to_string()],
            },
            source: Source::Local,
            diagnostic: Some(EnhanceError::NoCredential),
        };
        let Json(response) = respond("tags", enhanced).unwrap();
        assert_eq!(response.result["tags"][0], "#timing");
        assert_eq!(response.source, Source::Local);
        assert_eq!(response.diagnostic.unwrap().code, "NO_CREDENTIAL");
    }
}

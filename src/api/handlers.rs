//! API request handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use tracing::warn;

use crate::analysis::AnalysisResult;
use crate::analysis::NarrativeSummarizer;
use crate::analysis::ReplyAnalyzer;
use crate::analysis::SentimentClassifier;
use crate::analysis::Tone;
use crate::api::types::*;
use crate::config::AppConfig;

/// Error half of a handler result, rendered in the `ApiResponse` envelope
pub type ApiError<T> = (StatusCode, Json<ApiResponse<T>>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<SentimentClassifier>,
    pub max_replies: usize,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            classifier: Arc::new(config.build_classifier()),
            max_replies: config.max_replies(),
        }
    }
}

/// Unwrap a JSON body, turning axum's rejection into an `ApiResponse` error
fn parse_body<T>(
    endpoint: &str,
    payload: Result<Json<RepliesRequest>, JsonRejection>,
) -> Result<RepliesRequest, ApiError<T>> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            warn!("POST {} rejected: {}", endpoint, rejection.body_text());
            Err((
                rejection.status(),
                Json(ApiResponse::error(rejection.body_text())),
            ))
        }
    }
}

/// Health check handler
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Summarize a reply collection into narrative text
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<RepliesRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SummaryResponse>>, ApiError<SummaryResponse>> {
    let mut request = parse_body("/api/summarize", payload)?;
    request.replies.truncate_to(state.max_replies);
    let replies = request.replies;
    info!("POST /api/summarize ({} replies)", replies.len());

    let (summary, analysis) =
        NarrativeSummarizer::new(&state.classifier).summarize_with_analysis(replies.as_slice());
    Ok(Json(ApiResponse::success(SummaryResponse {
        summary,
        tone: analysis.as_ref().map(Tone::from_analysis),
        analysis: analysis.unwrap_or_default(),
        reply_count: replies.len(),
    })))
}

/// Return sentiment counts and top themes without rendering
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<RepliesRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AnalysisResult>>, ApiError<AnalysisResult>> {
    let mut request = parse_body("/api/analyze", payload)?;
    request.replies.truncate_to(state.max_replies);
    info!("POST /api/analyze ({} replies)", request.replies.len());

    let analysis = ReplyAnalyzer::new(&state.classifier).analyze(request.replies.as_slice());
    Ok(Json(ApiResponse::success(analysis)))
}

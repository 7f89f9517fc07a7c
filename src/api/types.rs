//! API request and response types

use serde::Deserialize;
use serde::Serialize;

use crate::analysis::AnalysisResult;
use crate::analysis::Tone;
use crate::models::ReplyCollection;

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Body shared by the summarize and analyze endpoints
#[derive(Debug, Deserialize)]
pub struct RepliesRequest {
    #[serde(default)]
    pub replies: ReplyCollection,
}

/// Summary response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    /// Absent when there were no replies to analyze
    pub tone: Option<Tone>,
    pub analysis: AnalysisResult,
    pub reply_count: usize,
}

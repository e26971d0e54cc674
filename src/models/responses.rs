use serde::{Deserialize, Serialize};
use crate::models::domain::{Profile, ScoredCandidate};

/// Success envelope shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// Error envelope; never carries internal error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Payload for the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileListData {
    pub users: Vec<Profile>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// Payload wrapping a single profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub user: Profile,
}

/// Payload for the matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesData {
    pub matches: Vec<ScoredCandidate>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

use serde::{Deserialize, Serialize};
use crate::models::domain::{Account, MatchResult, ScholarshipSummary};

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub matches: Vec<MatchResult>,
    /// Scholarships that scored above zero, before the display cap
    pub total_matches: usize,
}

/// Response listing the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub scholarships: Vec<ScholarshipSummary>,
    pub count: usize,
}

/// Response for signup and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account: Account,
    /// Page the client should continue to
    pub next: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// None when the account store could not be queried
    pub registered_accounts: Option<i64>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

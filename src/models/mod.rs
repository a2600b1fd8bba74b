// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Account, MatchResult, ProfileField, ScholarshipDefinition, ScholarshipSummary, UserProfile};
pub use requests::{LoginRequest, RecommendRequest, SignupRequest};
pub use responses::{AccountResponse, CatalogResponse, ErrorResponse, HealthResponse, RecommendResponse};

//! ScholarPass - scholarship recommendation service
//!
//! The core of this library is a rule-based matcher that scores free-text
//! questionnaire answers against a fixed scholarship catalog and ranks the
//! results. Around it sit a small actix-web API and a SQLite account store.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, Recommendations, CATALOG};
pub use models::{MatchResult, ProfileField, ScholarshipDefinition, UserProfile};

// Core algorithm exports
pub mod catalog;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use catalog::{find_by_name, CATALOG};
pub use filters::{first_matching_keyword, keyword_matches};
pub use matcher::{Matcher, Recommendations, DEFAULT_MAX_RESULTS};
pub use scoring::{calculate_scholarship_score, format_matched, ScholarshipScore};

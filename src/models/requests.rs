use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::UserProfile;

/// Questionnaire answers; every field may be missing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub school_type: Option<String>,
    #[serde(default)]
    pub average: Option<String>,
    #[serde(default)]
    pub financial_need: Option<String>,
    #[serde(default)]
    pub talent: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
}

impl RecommendRequest {
    pub fn to_profile(&self) -> UserProfile {
        UserProfile::from_answers(
            self.school_type.as_deref(),
            self.average.as_deref(),
            self.financial_need.as_deref(),
            self.talent.as_deref(),
            self.university.as_deref(),
        )
    }
}

/// Request to create a student account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request to sign in
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

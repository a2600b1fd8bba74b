use serde::{Deserialize, Serialize};
use std::fmt;

/// Questionnaire fields, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    SchoolType,
    Average,
    FinancialNeed,
    Talent,
    University,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::SchoolType,
        ProfileField::Average,
        ProfileField::FinancialNeed,
        ProfileField::Talent,
        ProfileField::University,
    ];

    /// Form/JSON key of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::SchoolType => "school_type",
            ProfileField::Average => "average",
            ProfileField::FinancialNeed => "financial_need",
            ProfileField::Talent => "talent",
            ProfileField::University => "university",
        }
    }

    /// Human-readable name shown in the matched column
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::SchoolType => "School Type",
            ProfileField::Average => "Average",
            ProfileField::FinancialNeed => "Financial Need",
            ProfileField::Talent => "Talent",
            ProfileField::University => "University",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized questionnaire answers
///
/// Every value is lower-cased and trimmed; an empty string means the
/// question was left unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub school_type: String,
    pub average: String,
    pub financial_need: String,
    pub talent: String,
    pub university: String,
}

impl UserProfile {
    /// Build a profile from raw answers, normalizing each one
    pub fn from_answers(
        school_type: Option<&str>,
        average: Option<&str>,
        financial_need: Option<&str>,
        talent: Option<&str>,
        university: Option<&str>,
    ) -> Self {
        Self {
            school_type: normalize(school_type),
            average: normalize(average),
            financial_need: normalize(financial_need),
            talent: normalize(talent),
            university: normalize(university),
        }
    }

    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::SchoolType => &self.school_type,
            ProfileField::Average => &self.average,
            ProfileField::FinancialNeed => &self.financial_need,
            ProfileField::Talent => &self.talent,
            ProfileField::University => &self.university,
        }
    }

    /// Answered fields with their values, in canonical order
    pub fn answered(&self) -> impl Iterator<Item = (ProfileField, &str)> + '_ {
        ProfileField::ALL
            .into_iter()
            .map(move |field| (field, self.value(field)))
            .filter(|(_, value)| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.answered().next().is_none()
    }
}

fn normalize(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

/// A compiled-in scholarship record
///
/// `criteria` and `weight` are keyed by field. A field without criteria
/// places no requirement and is never credited; a field without a weight
/// scores 1 when it matches.
#[derive(Debug, Clone, Copy)]
pub struct ScholarshipDefinition {
    pub name: &'static str,
    pub university: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub criteria: &'static [(ProfileField, &'static [&'static str])],
    pub weight: &'static [(ProfileField, u32)],
}

impl ScholarshipDefinition {
    /// Keywords for a field, if the scholarship has criteria on it
    pub fn keywords(&self, field: ProfileField) -> Option<&'static [&'static str]> {
        self.criteria
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, keywords)| *keywords)
    }

    pub fn has_criteria(&self, field: ProfileField) -> bool {
        self.keywords(field).is_some()
    }

    /// Points awarded when `field` matches
    pub fn weight_for(&self, field: ProfileField) -> u32 {
        self.weight
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, w)| *w)
            .unwrap_or(1)
    }
}

/// Catalog entry as listed to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarshipSummary {
    pub name: String,
    pub university: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl From<&ScholarshipDefinition> for ScholarshipSummary {
    fn from(def: &ScholarshipDefinition) -> Self {
        Self {
            name: def.name.to_string(),
            university: def.university.to_string(),
            description: def.description.to_string(),
            tags: def.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Scored recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub university: String,
    pub description: String,
    pub tags: Vec<String>,
    pub score: u32,
    /// Human-readable list of the fields that contributed, e.g. "Average, University"
    pub matched: String,
}

/// Registered student account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

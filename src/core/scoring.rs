use crate::models::{ProfileField, ScholarshipDefinition, UserProfile};
use crate::core::filters::first_matching_keyword;

/// Score of one scholarship against one profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScholarshipScore {
    pub score: u32,
    /// Fields credited by criteria, in canonical order, no duplicates
    pub matched: Vec<ProfileField>,
}

/// Score a scholarship for a profile
///
/// Scoring formula:
/// - every answered field with criteria on it earns its weight (default 1)
///   once, on the first keyword that matches
/// - financial need bonus: +1 when the answer is exactly "yes" and the
///   financial need keywords contain the literal "need"
/// - average bonus: +1 when the answer is exactly "95" or "90" and the
///   scholarship has any average criteria
///
/// The bonuses stack on top of the field credit and do not mark a field
/// as matched.
pub fn calculate_scholarship_score(
    scholarship: &ScholarshipDefinition,
    profile: &UserProfile,
) -> ScholarshipScore {
    let mut result = ScholarshipScore::default();

    for (field, value) in profile.answered() {
        if first_matching_keyword(scholarship, field, value).is_some() {
            result.score += scholarship.weight_for(field);
            result.matched.push(field);
        }
    }

    result.score += financial_need_bonus(scholarship, profile);
    result.score += average_bonus(scholarship, profile);

    result
}

/// Literal membership test on "need", not the containment rule used for fields
#[inline]
fn financial_need_bonus(scholarship: &ScholarshipDefinition, profile: &UserProfile) -> u32 {
    let has_need_keyword = scholarship
        .keywords(ProfileField::FinancialNeed)
        .is_some_and(|keywords| keywords.contains(&"need"));

    u32::from(profile.financial_need == "yes" && has_need_keyword)
}

#[inline]
fn average_bonus(scholarship: &ScholarshipDefinition, profile: &UserProfile) -> u32 {
    let top_average = matches!(profile.average.as_str(), "95" | "90");

    u32::from(top_average && scholarship.has_criteria(ProfileField::Average))
}

/// Render matched fields for display: "financial_need" becomes "Financial Need"
pub fn format_matched(fields: &[ProfileField]) -> String {
    let mut seen: Vec<ProfileField> = Vec::with_capacity(fields.len());
    for field in fields {
        if !seen.contains(field) {
            seen.push(*field);
        }
    }
    seen.sort();

    seen.iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

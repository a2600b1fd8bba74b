use crate::models::{MatchResult, ScholarshipDefinition, UserProfile};
use crate::core::{
    catalog::CATALOG,
    scoring::{calculate_scholarship_score, format_matched},
};

/// Default number of recommendations shown to a student
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Ranked recommendations for one profile
#[derive(Debug)]
pub struct Recommendations {
    pub matches: Vec<MatchResult>,
    /// Scholarships that scored above zero, before truncation
    pub total_matches: usize,
}

/// Recommendation orchestrator - scores the catalog and ranks the results
///
/// # Pipeline Stages
/// 1. Per-scholarship scoring
/// 2. Zero-score filtering
/// 3. Stable ranking by score
/// 4. Truncation to the display cap
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: &'static [ScholarshipDefinition],
    max_results: usize,
}

impl Matcher {
    pub fn new(max_results: usize) -> Self {
        Self::with_catalog(&CATALOG, max_results)
    }

    pub fn with_catalog(catalog: &'static [ScholarshipDefinition], max_results: usize) -> Self {
        Self { catalog, max_results }
    }

    pub fn catalog(&self) -> &'static [ScholarshipDefinition] {
        self.catalog
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Recommend scholarships for a profile
    ///
    /// Never fails: an empty or non-matching profile yields no matches.
    pub fn find_matches(&self, profile: &UserProfile) -> Recommendations {
        let mut matches: Vec<MatchResult> = self
            .catalog
            .iter()
            .filter_map(|scholarship| {
                let scored = calculate_scholarship_score(scholarship, profile);

                if scored.score > 0 {
                    Some(MatchResult {
                        name: scholarship.name.to_string(),
                        university: scholarship.university.to_string(),
                        description: scholarship.description.to_string(),
                        tags: scholarship.tags.iter().map(|t| t.to_string()).collect(),
                        score: scored.score,
                        matched: format_matched(&scored.matched),
                    })
                } else {
                    None
                }
            })
            .collect();

        let total_matches = matches.len();

        // sort_by is stable: equal scores keep catalog order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(self.max_results);

        Recommendations {
            matches,
            total_matches,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}

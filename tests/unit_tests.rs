// Unit tests for ScholarPass scoring and ranking

use scholarpass::core::{
    calculate_scholarship_score, find_by_name, keyword_matches, Matcher, CATALOG,
};
use scholarpass::models::{ProfileField, ScholarshipDefinition, UserProfile};

fn profile(
    school_type: &str,
    average: &str,
    financial_need: &str,
    talent: &str,
    university: &str,
) -> UserProfile {
    UserProfile::from_answers(
        Some(school_type),
        Some(average),
        Some(financial_need),
        Some(talent),
        Some(university),
    )
}

fn score_of(name: &str, profile: &UserProfile) -> u32 {
    calculate_scholarship_score(find_by_name(name).unwrap(), profile).score
}

const OPEN_TALENT: ScholarshipDefinition = ScholarshipDefinition {
    name: "Open Talent Award",
    university: "Test University",
    description: "Anyone with a talent",
    tags: &["Test"],
    criteria: &[(ProfileField::Talent, &["music", "musician", "music lessons"])],
    weight: &[(ProfileField::Talent, 2)],
};

static WIDE_CATALOG: [ScholarshipDefinition; 12] = [OPEN_TALENT; 12];

static TIE_CATALOG: [ScholarshipDefinition; 3] = [
    ScholarshipDefinition {
        name: "First",
        university: "A",
        description: "",
        tags: &[],
        criteria: &[(ProfileField::Talent, &["music"])],
        weight: &[],
    },
    ScholarshipDefinition {
        name: "Second",
        university: "B",
        description: "",
        tags: &[],
        criteria: &[(ProfileField::Talent, &["music"])],
        weight: &[(ProfileField::Talent, 5)],
    },
    ScholarshipDefinition {
        name: "Third",
        university: "C",
        description: "",
        tags: &[],
        criteria: &[(ProfileField::Talent, &["music"])],
        weight: &[],
    },
];

#[test]
fn test_all_empty_profile_yields_nothing() {
    let result = Matcher::default().find_matches(&profile("", "", "", "", ""));
    assert!(result.matches.is_empty());
}

#[test]
fn test_missing_fields_are_unanswered() {
    let p = UserProfile::from_answers(None, None, None, None, None);
    assert_eq!(p, UserProfile::default());
    assert!(Matcher::default().find_matches(&p).matches.is_empty());
}

#[test]
fn test_no_matching_criteria_yields_nothing() {
    let result = Matcher::default().find_matches(&profile("homeschool", "zz", "maybe", "chess", "harvard"));
    assert!(result.matches.is_empty(), "unexpected matches: {:?}", result.matches);
}

#[test]
fn test_arbitrary_strings_never_panic() {
    let long = "a very long answer ".repeat(100);
    let inputs = ["", " ", "ñ", "₱100,000", "\u{0}", "9", long.as_str(), "🎓"];
    let matcher = Matcher::default();

    for a in inputs.iter() {
        for b in inputs.iter() {
            let result = matcher.find_matches(&profile(a, b, a, b, a));
            assert!(result.matches.len() <= 10);
            assert!(result.matches.iter().all(|m| m.score > 0));
        }
    }
}

#[test]
fn test_sorted_descending() {
    let result = Matcher::default().find_matches(&profile("public", "95", "yes", "sports", "ust"));

    assert!(!result.matches.is_empty());
    for pair in result.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score, "not sorted: {:?}", result.matches);
    }
}

#[test]
fn test_ties_preserve_catalog_order() {
    let matcher = Matcher::with_catalog(&TIE_CATALOG, 10);
    let result = matcher.find_matches(&profile("", "", "", "music", ""));

    let names: Vec<&str> = result.matches.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Second", "First", "Third"]);
    assert_eq!(result.matches[1].score, 1);
}

#[test]
fn test_output_capped_at_ten() {
    let matcher = Matcher::with_catalog(&WIDE_CATALOG, 10);
    let result = matcher.find_matches(&profile("", "", "", "music", ""));

    assert_eq!(result.total_matches, 12);
    assert_eq!(result.matches.len(), 10);
}

#[test]
fn test_substring_both_directions() {
    assert!(keyword_matches("ateneo", "ateneo"));
    assert!(keyword_matches("ateneo", "i go to ateneo"));
    assert!(keyword_matches("ateneo", "at"));
    assert!(!keyword_matches("ateneo", "atenea"));

    let name = "Ateneo Freshmen Merit Scholarship";
    assert_eq!(score_of(name, &profile("", "", "", "", "ateneo")), 3);
    assert_eq!(score_of(name, &profile("", "", "", "", "i go to ateneo")), 3);
    assert_eq!(score_of(name, &profile("", "", "", "", "at")), 3);
}

#[test]
fn test_single_credit_per_field() {
    // "music", "musician" and "music lessons" all match, weight 2 is paid once
    let result = calculate_scholarship_score(&OPEN_TALENT, &profile("", "", "", "musician", ""));
    assert_eq!(result.score, 2);
    assert_eq!(result.matched, vec![ProfileField::Talent]);

    // Same for the catalog: "top excellent 95" hits all three average keywords
    let name = "Ateneo Freshmen Merit Scholarship";
    assert_eq!(score_of(name, &profile("", "top excellent 95", "", "", "")), 2);
}

#[test]
fn test_need_bonus_is_independent_of_field_credit() {
    let yes = profile("", "", "yes", "", "");
    let need = profile("", "", "need", "", "");

    // field credit 3, plus 1 only for the exact answer "yes"
    assert_eq!(score_of("Financial Aid Grant", &yes), 4);
    assert_eq!(score_of("Financial Aid Grant", &need), 3);
    assert_eq!(score_of("Vaugirard Scholarship Program", &yes), 4);
}

#[test]
fn test_average_bonus_needs_exact_value() {
    let name = "UST Santo Tomas College Scholarship";

    assert_eq!(score_of(name, &profile("", "90", "", "", "")), 3);
    assert_eq!(score_of(name, &profile("", "95", "", "", "")), 3);
    // "9" still matches "90" by containment but earns no bonus
    assert_eq!(score_of(name, &profile("", "9", "", "", "")), 2);
    // No average criteria, no bonus
    assert_eq!(score_of("Athletic or Arts Scholarship", &profile("", "95", "", "", "")), 0);
}

#[test]
fn test_ateneo_top_student() {
    let result = Matcher::default().find_matches(&profile("", "95", "", "", "ateneo"));

    let top = &result.matches[0];
    assert_eq!(top.name, "Ateneo Freshmen Merit Scholarship");
    // university 3 + average 2 + average bonus 1
    assert_eq!(top.score, 6);
    assert!(top.matched.contains("University"));
    assert!(top.matched.contains("Average"));
}

#[test]
fn test_financial_need_without_need_keyword() {
    let result = Matcher::default().find_matches(&profile("", "", "yes", "", ""));

    let san_lorenzo = result
        .matches
        .iter()
        .find(|m| m.name == "San Lorenzo Ruiz Student Assistance")
        .unwrap();
    assert_eq!(san_lorenzo.score, 3);
    assert_eq!(san_lorenzo.matched, "Financial Need");

    let star = result.matches.iter().find(|m| m.name == "Star Scholars Program");
    assert!(star.is_none());
}

#[test]
fn test_catalog_order_is_display_order() {
    assert_eq!(CATALOG[0].name, "Ateneo Freshmen Merit Scholarship");
    assert_eq!(CATALOG[9].name, "Athletic or Arts Scholarship");
}

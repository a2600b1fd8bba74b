use crate::models::{ProfileField, ScholarshipDefinition};

/// Check whether a catalog keyword and a user answer match
///
/// Containment is tested in both directions, so a short answer such as
/// "at" matches "ateneo" and a long answer such as "i go to ateneo" does too.
/// Empty answers are filtered out before this is called.
#[inline]
pub fn keyword_matches(keyword: &str, value: &str) -> bool {
    value.contains(keyword) || keyword.contains(value)
}

/// Return the first keyword for `field` that matches `value`
///
/// Keywords are tried in catalog order. `None` when the scholarship has no
/// criteria on the field or no keyword matches.
#[inline]
pub fn first_matching_keyword(
    scholarship: &ScholarshipDefinition,
    field: ProfileField,
    value: &str,
) -> Option<&'static str> {
    scholarship
        .keywords(field)?
        .iter()
        .copied()
        .find(|keyword| keyword_matches(keyword, value))
}

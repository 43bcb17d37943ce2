//! Skill Finder: detects catalog skills in a blob of text.

use std::collections::BTreeSet;

use crate::catalog::SkillMatcher;

/// Deduplicated set of catalog skill names found in one text.
pub type SkillSet = BTreeSet<String>;

/// Returns the names of every catalog skill whose pattern occurs in `text`.
/// Empty or absent text yields an empty set.
pub fn find_skills(matcher: &SkillMatcher, text: Option<&str>) -> SkillSet {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return SkillSet::new();
    };

    let normalized = text.to_lowercase();
    matcher
        .matching_names(&normalized)
        .into_iter()
        .map(str::to_string)
        .collect()
}

//! Pattern Compiler: turns the catalog into case-insensitive regexes.
//!
//! Each pattern is compiled on its own first so a single bad entry can be
//! reported and dropped. The survivors are then combined into one `RegexSet`,
//! which tests every skill in a single pass over the text. If the combined set
//! cannot be built (e.g. it exceeds the regex size limit) matching falls back
//! to testing each regex in turn.

use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use tracing::{debug, warn};

use crate::catalog::SkillCatalog;

/// A catalog entry that was skipped because its pattern is unusable.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidPattern {
    pub skill: String,
    pub reason: String,
}

/// The compiled, immutable form of a `SkillCatalog`.
#[derive(Debug)]
pub struct SkillMatcher {
    /// Skill names, index-aligned with `regexes` and the members of `combined`.
    names: Vec<String>,
    regexes: Vec<Regex>,
    combined: Option<RegexSet>,
    invalid: Vec<InvalidPattern>,
}

impl SkillMatcher {
    /// Compiles every pattern in the catalog. Invalid patterns are logged and
    /// skipped; this never fails.
    pub fn compile(catalog: &SkillCatalog) -> Self {
        let mut names = Vec::with_capacity(catalog.patterns.len());
        let mut regexes = Vec::with_capacity(catalog.patterns.len());
        let mut invalid = catalog.rejected.clone();

        for (name, pattern) in &catalog.patterns {
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(re) => {
                    names.push(name.clone());
                    regexes.push(re);
                }
                Err(e) => invalid.push(InvalidPattern {
                    skill: name.clone(),
                    reason: e.to_string(),
                }),
            }
        }

        for bad in &invalid {
            warn!("Skipping invalid pattern for skill '{}': {}", bad.skill, bad.reason);
        }

        let combined = match RegexSetBuilder::new(regexes.iter().map(Regex::as_str))
            .case_insensitive(true)
            .build()
        {
            Ok(set) => Some(set),
            Err(e) => {
                debug!("Combined skill pattern unavailable, testing skills one by one: {e}");
                None
            }
        };

        SkillMatcher {
            names,
            regexes,
            combined,
            invalid,
        }
    }

    /// Names of every skill whose pattern occurs somewhere in `text`.
    /// Order follows the catalog's name order.
    pub fn matching_names<'a>(&'a self, text: &str) -> Vec<&'a str> {
        match &self.combined {
            Some(set) => set
                .matches(text)
                .into_iter()
                .map(|idx| self.names[idx].as_str())
                .collect(),
            None => self
                .names
                .iter()
                .zip(&self.regexes)
                .filter(|(_, re)| re.is_match(text))
                .map(|(name, _)| name.as_str())
                .collect(),
        }
    }

    /// Number of usable skills.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn invalid(&self) -> &[InvalidPattern] {
        &self.invalid
    }

    pub fn uses_combined_pattern(&self) -> bool {
        self.combined.is_some()
    }
}

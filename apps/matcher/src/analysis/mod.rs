pub mod finder;
pub mod outcome;
pub mod scorer;

use std::path::Path;

use tracing::{info, warn};

use crate::catalog::SkillMatcher;
use crate::extraction::DocumentLoader;
use finder::find_skills;
use outcome::MatchOutcome;
use scorer::MatchScorer;

/// Everything needed to analyze one (document, job description) pair.
/// Built once at startup; read-only afterwards.
pub struct Analyzer {
    pub matcher: SkillMatcher,
    pub loader: DocumentLoader,
    /// Pluggable scorer. Default: `OverlapScorer`.
    pub scorer: Box<dyn MatchScorer>,
}

impl Analyzer {
    /// Extracts the document, detects skills in it and in `job_description`
    /// (literal text, never a path), then scores the overlap.
    /// Never fails: extraction errors become a `Failure` outcome.
    pub fn analyze(&self, document: &Path, job_description: &str) -> MatchOutcome {
        let resume_text = match self.loader.load_text(document) {
            Ok(text) => text,
            Err(e) => {
                warn!("[{}] {e}", e.code());
                return MatchOutcome::from_error(&e);
            }
        };

        let resume_skills = find_skills(&self.matcher, Some(&resume_text));
        let jd_skills = find_skills(&self.matcher, Some(job_description));
        info!(
            "Detected {} JD skills, {} resume skills",
            jd_skills.len(),
            resume_skills.len()
        );

        self.scorer.score(&jd_skills, &resume_skills)
    }
}

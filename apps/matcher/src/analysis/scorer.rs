//! Match Scoring: compares the skills a job description asks for with the
//! skills a resume shows.
//!
//! Default: `OverlapScorer` (set intersection, deterministic, no weighting).
//! Other backends plug in through the `MatchScorer` trait without touching the
//! orchestration in `analysis::Analyzer`.

use crate::analysis::finder::SkillSet;
use crate::analysis::outcome::MatchOutcome;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume skill set against a job description skill set.
pub trait MatchScorer: Send + Sync {
    fn score(&self, jd_skills: &SkillSet, resume_skills: &SkillSet) -> MatchOutcome;
}

// ────────────────────────────────────────────────────────────────────────────
// OverlapScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Plain set-overlap scorer.
///
/// Algorithm:
/// 1. JD empty → soft "no skills" outcome, score 0
/// 2. found = JD ∩ resume, missing = JD − resume, both sorted by name
/// 3. score = round(100 × |found| / |JD|), clamped to 0–100
pub struct OverlapScorer;

impl MatchScorer for OverlapScorer {
    fn score(&self, jd_skills: &SkillSet, resume_skills: &SkillSet) -> MatchOutcome {
        compute_overlap(jd_skills, resume_skills)
    }
}

fn compute_overlap(jd_skills: &SkillSet, resume_skills: &SkillSet) -> MatchOutcome {
    if jd_skills.is_empty() {
        return MatchOutcome::no_skills();
    }

    // BTreeSet iterates in byte order of the names, so both lists come out sorted.
    let found: Vec<String> = jd_skills.intersection(resume_skills).cloned().collect();
    let missing: Vec<String> = jd_skills.difference(resume_skills).cloned().collect();

    MatchOutcome::Success {
        score: score_percentage(found.len(), jd_skills.len()),
        found,
        missing,
    }
}

/// Percentage of `total` covered by `found`, rounded half away from zero.
fn score_percentage(found: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = (found as f64 / total as f64) * 100.0;
    pct.clamp(0.0, 100.0).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

//! Result Formatter: the tagged outcome of a run and its JSON shape.

use std::process::ExitCode;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// Message reported when the job description contains no catalog skills.
pub const NO_SKILLS_MESSAGE: &str = "No recognizable skills found in the job description.";

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Success {
        score: u32,
        found: Vec<String>,
        missing: Vec<String>,
    },
    /// Reported to the caller but still a successful run.
    SoftEmpty { message: String },
    Failure { code: &'static str, message: String },
}

/// The JSON object written to stdout. Exactly one per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub error: Option<String>,
}

impl MatchOutcome {
    pub fn no_skills() -> Self {
        MatchOutcome::SoftEmpty {
            message: NO_SKILLS_MESSAGE.to_string(),
        }
    }

    pub fn from_error(err: &MatchError) -> Self {
        MatchOutcome::Failure {
            code: err.code(),
            message: err.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, MatchOutcome::Failure { .. })
    }

    /// 0 for `Success` and `SoftEmpty`, 1 for `Failure`.
    pub fn exit_status(&self) -> u8 {
        u8::from(self.is_failure())
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn to_result(&self) -> MatchResult {
        match self {
            MatchOutcome::Success {
                score,
                found,
                missing,
            } => MatchResult {
                score: *score,
                found: found.clone(),
                missing: missing.clone(),
                error: None,
            },
            MatchOutcome::SoftEmpty { message } | MatchOutcome::Failure { message, .. } => {
                MatchResult {
                    score: 0,
                    found: vec![],
                    missing: vec![],
                    error: Some(message.clone()),
                }
            }
        }
    }

    /// Single-line JSON rendering of the result.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.to_result()).unwrap_or_else(|e| {
            // MatchResult has no fallible fields; this branch is not expected to run.
            serde_json::json!({
                "score": 0,
                "found": [],
                "missing": [],
                "error": format!("Failed to serialize result: {e}"),
            })
            .to_string()
        })
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Failures that end an analysis run.
///
/// Every variant is rendered into the error-shaped JSON result by
/// `MatchOutcome::from_error`; none of them ever escape as a panic or a
/// stack trace. Invalid skill patterns are not represented here because they
/// never abort a run (see `catalog::compiler::InvalidPattern`).
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Skill catalog not found at {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Skill catalog at {} is not valid JSON: {reason}", path.display())]
    ConfigParse { path: PathBuf, reason: String },

    #[error("No skills found in skill catalog at {}", path.display())]
    EmptyCatalog { path: PathBuf },

    #[error("Document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("Error reading document {}: {reason}", path.display())]
    DocumentUnreadable { path: PathBuf, reason: String },

    #[error("Document {} is {size} bytes, above the {limit} byte limit", path.display())]
    DocumentTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("No text could be extracted from document {}", .0.display())]
    DocumentEmptyText(PathBuf),
}

impl MatchError {
    /// Stable machine-readable code, used in diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::InvalidArguments(_) => "INVALID_ARGUMENTS",
            MatchError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            MatchError::ConfigParse { .. } => "CONFIG_PARSE_ERROR",
            MatchError::EmptyCatalog { .. } => "EMPTY_CATALOG",
            MatchError::DocumentNotFound(_) => "DOCUMENT_NOT_FOUND",
            MatchError::DocumentUnreadable { .. } => "DOCUMENT_UNREADABLE",
            MatchError::DocumentTooLarge { .. } => "DOCUMENT_TOO_LARGE",
            MatchError::DocumentEmptyText(_) => "DOCUMENT_EMPTY_TEXT",
        }
    }
}

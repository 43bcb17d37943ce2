//! Catalog Loader: reads `skills.json` and flattens its category groupings.
//!
//! The file groups skills under arbitrary category labels:
//!
//! ```json
//! {
//!   "programming_languages": { "python": "\\bpython\\b", "java": "\\bjava\\b" },
//!   "databases": { "sql": "\\bsql\\b" }
//! }
//! ```
//!
//! Categories only exist for authoring convenience. They are discarded here and
//! the result is a single name → pattern mapping.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::catalog::InvalidPattern;
use crate::errors::MatchError;

/// The flattened catalog. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    pub source: PathBuf,
    /// skill name → regex pattern
    pub patterns: BTreeMap<String, String>,
    /// Entries whose pattern was not a string. They count as catalog entries
    /// but never match anything.
    pub rejected: Vec<InvalidPattern>,
}

impl SkillCatalog {
    pub fn len(&self) -> usize {
        self.patterns.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loads and flattens the catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<SkillCatalog, MatchError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MatchError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => MatchError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    let catalog = parse_catalog(&raw, path)?;
    info!(
        "Loaded {} skills from {}",
        catalog.len(),
        catalog.source.display()
    );
    Ok(catalog)
}

/// Parses catalog JSON. `source` is only used for error messages.
pub fn parse_catalog(raw: &str, source: &Path) -> Result<SkillCatalog, MatchError> {
    let grouped: Map<String, Value> =
        serde_json::from_str(raw).map_err(|e| MatchError::ConfigParse {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut patterns = BTreeMap::new();
    let mut rejected: BTreeMap<String, InvalidPattern> = BTreeMap::new();

    for (category, skills) in grouped {
        let Value::Object(skills) = skills else {
            debug!("Ignoring category '{category}': value is not a mapping");
            continue;
        };

        // Later categories override earlier ones for the same skill name.
        for (name, pattern) in skills {
            match pattern {
                Value::String(pattern) => {
                    rejected.remove(&name);
                    patterns.insert(name, pattern);
                }
                other => {
                    warn!("Skill '{name}' in category '{category}' has a non-string pattern");
                    patterns.remove(&name);
                    rejected.insert(
                        name.clone(),
                        InvalidPattern {
                            skill: name,
                            reason: format!("pattern must be a string, got {other}"),
                        },
                    );
                }
            }
        }
    }

    let catalog = SkillCatalog {
        source: source.to_path_buf(),
        patterns,
        rejected: rejected.into_values().collect(),
    };

    if catalog.is_empty() {
        return Err(MatchError::EmptyCatalog {
            path: source.to_path_buf(),
        });
    }
    Ok(catalog)
}

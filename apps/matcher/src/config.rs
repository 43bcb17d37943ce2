use std::path::PathBuf;

use anyhow::{Context, Result};

/// Catalog file looked up next to the executable when nothing else is set.
pub const DEFAULT_CATALOG_FILE: &str = "skills.json";

/// 10 MiB, the upload ceiling of the original web front-end.
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Runtime configuration loaded from environment variables.
/// Every field has a default; nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub skills_path: Option<PathBuf>,
    pub max_document_bytes: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            skills_path: optional_env("SKILLS_PATH").map(PathBuf::from),
            max_document_bytes: match optional_env("MAX_DOCUMENT_BYTES") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("MAX_DOCUMENT_BYTES must be a non-negative integer")?,
                None => DEFAULT_MAX_DOCUMENT_BYTES,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        })
    }

    /// Resolves the catalog path: explicit override first, then `SKILLS_PATH`,
    /// then `skills.json` beside the running executable.
    pub fn catalog_path(&self, cli_override: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = cli_override.or_else(|| self.skills_path.clone()) {
            return Ok(path);
        }
        let exe = std::env::current_exe().context("Cannot locate the running executable")?;
        let dir = exe
            .parent()
            .context("Executable path has no parent directory")?;
        Ok(dir.join(DEFAULT_CATALOG_FILE))
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

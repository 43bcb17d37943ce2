mod analysis;
mod catalog;
mod cli;
mod config;
mod errors;
mod extraction;

use std::process::ExitCode;

use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::outcome::MatchOutcome;
use crate::analysis::scorer::OverlapScorer;
use crate::analysis::Analyzer;
use crate::catalog::{load_catalog, SkillMatcher};
use crate::cli::{parse_args, ParsedArgs};
use crate::config::Config;
use crate::errors::MatchError;
use crate::extraction::DocumentLoader;

fn main() -> ExitCode {
    // Load configuration first; a bad environment still gets a JSON answer.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            return emit(MatchOutcome::Failure {
                code: "CONFIG_ERROR",
                message: format!("{e:#}"),
            })
        }
    };

    // Structured logging goes to stderr; stdout carries only the result.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Starting resume-matcher v{}", env!("CARGO_PKG_VERSION"));

    let cli = match parse_args(std::env::args_os()) {
        Ok(ParsedArgs::Run(cli)) => cli,
        Ok(ParsedArgs::Info(info)) => {
            return match info.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("Failed to print help: {e}");
                    ExitCode::FAILURE
                }
            };
        }
        Err(e) => return emit(MatchOutcome::from_error(&e)),
    };

    let analyzer = match build_analyzer(&config, cli.skills.clone()) {
        Ok(analyzer) => analyzer,
        Err(e) => return emit(e),
    };

    emit(analyzer.analyze(&cli.document, &cli.job_description))
}

/// Loads and compiles the skill catalog. Any failure here ends the run before
/// a document is opened.
fn build_analyzer(
    config: &Config,
    skills_override: Option<std::path::PathBuf>,
) -> Result<Analyzer, MatchOutcome> {
    let catalog_path = config
        .catalog_path(skills_override)
        .map_err(|e| MatchOutcome::Failure {
            code: "CONFIG_ERROR",
            message: format!("{e:#}"),
        })?;

    let catalog = load_catalog(&catalog_path).map_err(|e: MatchError| {
        error!("[{}] {e}", e.code());
        MatchOutcome::from_error(&e)
    })?;

    let matcher = SkillMatcher::compile(&catalog);
    if matcher.is_empty() {
        warn!("No usable skill patterns in {}", catalog.source.display());
    }
    info!(
        "Skill matcher ready: {} usable, {} skipped, combined pattern: {}",
        matcher.len(),
        matcher.invalid().len(),
        matcher.uses_combined_pattern()
    );

    Ok(Analyzer {
        matcher,
        loader: DocumentLoader::new(config.max_document_bytes),
        scorer: Box::new(OverlapScorer),
    })
}

/// Prints the single JSON result line and maps the outcome to an exit code.
fn emit(outcome: MatchOutcome) -> ExitCode {
    println!("{}", outcome.to_json());
    outcome.exit_code()
}

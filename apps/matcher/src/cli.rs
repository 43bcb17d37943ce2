use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::errors::MatchError;

#[derive(Parser, Debug)]
#[command(name = "resume-matcher")]
#[command(about = "Score a resume against the skills named in a job description")]
#[command(version)]
pub struct Cli {
    /// Resume document (PDF, or .txt/.md)
    pub document: PathBuf,

    /// Job description text (literal text, not a file path)
    #[arg(allow_hyphen_values = true)]
    pub job_description: String,

    /// Skill catalog JSON, patterns in Rust regex syntax (no look-around or
    /// backreferences; such entries are skipped with a warning).
    /// Default: $SKILLS_PATH, then skills.json installed beside the executable
    /// (copy apps/matcher/skills.json next to the binary when deploying).
    #[arg(long, value_name = "PATH")]
    pub skills: Option<PathBuf>,
}

/// What argument parsing decided.
#[derive(Debug)]
pub enum ParsedArgs {
    Run(Cli),
    /// `--help` or `--version`: print and exit successfully.
    Info(clap::Error),
}

/// Parses `args` (program name first). Anything that is not exactly two
/// positionals plus known options is `InvalidArguments`.
pub fn parse_args<I, T>(args: I) -> Result<ParsedArgs, MatchError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(ParsedArgs::Run(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(ParsedArgs::Info(e))
        }
        Err(e) => {
            let rendered = e.to_string();
            let summary = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            Err(MatchError::InvalidArguments(format!(
                "{summary} (expected: <DOCUMENT> <JOB_DESCRIPTION>)"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Cli {
        match parse_args(args).unwrap() {
            ParsedArgs::Run(cli) => cli,
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn test_two_positionals() {
        let cli = run(&["resume-matcher", "cv.pdf", "Rust and SQL"]);
        assert_eq!(cli.document, PathBuf::from("cv.pdf"));
        assert_eq!(cli.job_description, "Rust and SQL");
        assert!(cli.skills.is_none());
    }

    #[test]
    fn test_skills_override() {
        let cli = run(&["resume-matcher", "--skills", "/tmp/s.json", "cv.pdf", "Rust"]);
        assert_eq!(cli.skills, Some(PathBuf::from("/tmp/s.json")));
    }

    #[test]
    fn test_job_description_may_start_with_hyphen() {
        let cli = run(&["resume-matcher", "cv.pdf", "- Python\n- SQL"]);
        assert!(cli.job_description.starts_with("- Python"));
    }

    #[test]
    fn test_missing_argument_is_invalid() {
        let err = parse_args(["resume-matcher", "cv.pdf"]).unwrap_err();
        assert!(matches!(err, MatchError::InvalidArguments(_)));
    }

    #[test]
    fn test_extra_argument_is_invalid() {
        let err = parse_args(["resume-matcher", "cv.pdf", "jd", "extra"]).unwrap_err();
        assert!(matches!(err, MatchError::InvalidArguments(_)));
    }

    #[test]
    fn test_help_is_info() {
        assert!(matches!(
            parse_args(["resume-matcher", "--help"]).unwrap(),
            ParsedArgs::Info(_)
        ));
    }

    #[test]
    fn test_skills_help_documents_lookup_and_syntax() {
        let ParsedArgs::Info(help) = parse_args(["resume-matcher", "--help"]).unwrap() else {
            panic!("expected help");
        };
        let text = help.to_string();
        assert!(text.contains("beside the executable"), "{text}");
        assert!(text.contains("Rust regex syntax"), "{text}");
    }
}

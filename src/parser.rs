//! TOML quiz file parser.
//!
//! Loads quiz files from TOML files and directories, and validates them.
//! Loading is a one-shot validate-and-return: given a source record, produce
//! an immutable [`QuizFile`] or fail with a descriptive [`LoadError`].

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::LoadError;
use crate::model::{Case, Prompt, QuizFile, Suite, SuiteKind};

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    name: String,
    points: u32,
    #[serde(default)]
    suites: Vec<TomlSuite>,
}

#[derive(Debug, Deserialize)]
struct TomlSuite {
    scored: bool,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    cases: Vec<TomlCase>,
}

#[derive(Debug, Deserialize)]
struct TomlCase {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    choices: Vec<String>,
    #[serde(default)]
    answer: Option<String>,
    hidden: bool,
    locked: bool,
}

/// Parse a single TOML file into a `QuizFile`.
///
/// Adds path context around the typed [`LoadError`], which stays
/// downcastable in the error chain.
pub fn parse_quiz(path: &Path) -> Result<QuizFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content).with_context(|| format!("failed to load quiz: {}", path.display()))
}

/// Parse a TOML string into a validated `QuizFile`.
pub fn parse_quiz_str(content: &str) -> Result<QuizFile, LoadError> {
    let parsed: TomlQuizFile = toml::from_str(content)?;

    if parsed.suites.is_empty() {
        return Err(LoadError::Schema(format!(
            "quiz `{}` has no suites",
            parsed.name
        )));
    }

    let suites = parsed
        .suites
        .into_iter()
        .enumerate()
        .map(|(si, suite)| {
            let kind: SuiteKind = suite
                .kind
                .parse()
                .map_err(|_| LoadError::UnknownSuiteType(suite.kind.clone()))?;

            let cases = suite
                .cases
                .into_iter()
                .enumerate()
                .map(|(ci, case)| convert_case(case, si + 1, ci + 1))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Suite {
                scored: suite.scored,
                kind,
                cases,
            })
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    tracing::debug!(name = %parsed.name, suites = suites.len(), "loaded quiz");

    Ok(QuizFile {
        name: parsed.name,
        points: parsed.points,
        suites,
    })
}

fn convert_case(case: TomlCase, suite_no: usize, case_no: usize) -> Result<Case, LoadError> {
    let at = format!("suite {suite_no}, case {case_no}");

    let prompt = match (case.question, case.code) {
        (Some(q), None) => Prompt::Question(q),
        (None, Some(c)) => Prompt::Code(c),
        (Some(_), Some(_)) => {
            return Err(LoadError::Schema(format!(
                "{at}: has both `question` and `code`"
            )))
        }
        (None, None) => {
            return Err(LoadError::Schema(format!(
                "{at}: needs either `question` or `code`"
            )))
        }
    };

    // Authored wwpp transcripts carry the expected-answer digest inline, as
    // a bare hex line replacing the printed output, with no `answer` key.
    let answer = match case.answer {
        Some(a) => a,
        None => match &prompt {
            Prompt::Code(transcript) => extract_embedded_digest(transcript)
                .map(str::to_owned)
                .ok_or_else(|| {
                    LoadError::Schema(format!("{at}: transcript has no embedded answer digest"))
                })?,
            Prompt::Question(_) => {
                return Err(LoadError::Schema(format!("{at}: missing `answer`")))
            }
        },
    };

    if answer.trim().is_empty() {
        return Err(LoadError::Schema(format!("{at}: `answer` is blank")));
    }

    if !case.choices.is_empty() && case.choices.len() < 2 {
        return Err(LoadError::Schema(format!(
            "{at}: multiple-choice case needs at least 2 choices, got {}",
            case.choices.len()
        )));
    }

    Ok(Case {
        prompt,
        choices: case.choices,
        answer,
        hidden: case.hidden,
        locked: case.locked,
    })
}

/// Find the last bare 32-hex-char line in a transcript, if any.
///
/// Digests are opaque to this crate; only their shape is recognized here.
pub fn extract_embedded_digest(transcript: &str) -> Option<&str> {
    transcript
        .lines()
        .map(str::trim)
        .filter(|line| line.len() == 32 && line.bytes().all(|b| b.is_ascii_hexdigit()))
        .next_back()
}

/// Recursively load all `.toml` quiz files from a directory.
pub fn load_quiz_dir(dir: &Path) -> Result<Vec<QuizFile>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            quizzes.extend(load_quiz_dir(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Where in the file ("suite 2, case 1"), if applicable.
    pub location: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a loaded quiz for common authoring issues.
///
/// These are soft lints on data that already passed the hard checks in
/// [`parse_quiz_str`].
pub fn validate_quiz(quiz: &QuizFile) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // A scored suite inside a zero-point file can never award anything.
    if quiz.points == 0 {
        for (si, suite) in quiz.suites.iter().enumerate() {
            if suite.scored {
                warnings.push(ValidationWarning {
                    location: Some(format!("suite {}", si + 1)),
                    message: "suite is scored but the quiz is worth 0 points".into(),
                });
            }
        }
    }

    for (si, suite) in quiz.suites.iter().enumerate() {
        // Duplicate digests within a suite usually mean a copy-pasted case.
        let mut seen = std::collections::HashSet::new();
        for (ci, case) in suite.cases.iter().enumerate() {
            if !seen.insert(&case.answer) {
                warnings.push(ValidationWarning {
                    location: Some(format!("suite {}, case {}", si + 1, ci + 1)),
                    message: format!("duplicate answer digest: {}", case.answer),
                });
            }
        }

        for (ci, case) in suite.cases.iter().enumerate() {
            let mut choice_set = std::collections::HashSet::new();
            for choice in &case.choices {
                if !choice_set.insert(choice) {
                    warnings.push(ValidationWarning {
                        location: Some(format!("suite {}, case {}", si + 1, ci + 1)),
                        message: format!("duplicate choice: {choice}"),
                    });
                }
            }
        }
    }

    warnings
}

//! Core data model types for quizbank.
//!
//! These are the records an authored quiz file loads into: a named file
//! holding ordered suites, each suite holding ordered cases. Everything is
//! plain immutable data; after loading, the structure is never mutated and
//! can be shared freely across threads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One authored quiz file: a name, a point weight, and its suites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizFile {
    /// Human-readable quiz name (e.g. "Building Monster Class").
    pub name: String,
    /// Author-supplied point weight for the whole file. Static: it has no
    /// computed relationship to the number of cases.
    pub points: u32,
    /// Ordered suites. Case numbering is presentation-order dependent, so
    /// insertion order is preserved everywhere.
    pub suites: Vec<Suite>,
}

impl QuizFile {
    /// Total number of cases across all suites.
    pub fn case_count(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }
}

/// A grouped set of related cases sharing a scoring policy and kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    /// Whether this suite counts toward the learner's score.
    pub scored: bool,
    /// What kind of cases this suite holds.
    #[serde(rename = "type")]
    pub kind: SuiteKind,
    /// Ordered cases.
    pub cases: Vec<Case>,
}

/// Recognized suite kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteKind {
    /// Conceptual multiple-choice questions.
    Concept,
    /// "What would Python print": interpreter transcripts whose output the
    /// learner must predict.
    Wwpp,
}

impl fmt::Display for SuiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuiteKind::Concept => write!(f, "concept"),
            SuiteKind::Wwpp => write!(f, "wwpp"),
        }
    }
}

impl FromStr for SuiteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concept" => Ok(SuiteKind::Concept),
            "wwpp" => Ok(SuiteKind::Wwpp),
            other => Err(format!("unknown suite type: {other}")),
        }
    }
}

/// What a case shows the learner: a free-text question or a code transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prompt {
    /// A free-text question, possibly embedding a class listing.
    Question(String),
    /// An interpreter transcript (wwpp-style).
    Code(String),
}

impl Prompt {
    /// The prompt text, whichever form it takes.
    pub fn text(&self) -> &str {
        match self {
            Prompt::Question(s) | Prompt::Code(s) => s,
        }
    }
}

/// A single question or code-transcript item with an expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// The question or transcript shown to the learner. Serialized flattened
    /// so the wire form carries a `question` or `code` key.
    #[serde(flatten)]
    pub prompt: Prompt,
    /// Multiple-choice options; empty for free-response cases.
    #[serde(default)]
    pub choices: Vec<String>,
    /// Expected answer as an opaque digest. The hashing scheme (algorithm,
    /// salt) lives in the grading harness; never treat this as a plain
    /// digest of the literal expected output.
    pub answer: String,
    /// Excluded from learner-visible feedback until a later disclosure step.
    pub hidden: bool,
    /// The answer is stored hashed rather than revealed in plain text.
    pub locked: bool,
}

impl Case {
    /// Returns `true` if this case offers multiple-choice options.
    pub fn is_multiple_choice(&self) -> bool {
        !self.choices.is_empty()
    }
}

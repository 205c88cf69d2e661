//! In-memory quiz registry.
//!
//! The grading harness addresses quiz files by name. The registry holds the
//! loaded files and serves lookups; it is populated once and read-only
//! afterwards, so it can be shared across threads without locking.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use crate::model::QuizFile;
use crate::parser;

/// A collection of loaded quiz files, keyed by quiz name.
#[derive(Debug, Clone, Default)]
pub struct QuizRegistry {
    quizzes: BTreeMap<String, QuizFile>,
}

impl QuizRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `.toml` quiz under `dir` into a new registry.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut registry = Self::new();
        for quiz in parser::load_quiz_dir(dir)? {
            registry.insert(quiz)?;
        }
        Ok(registry)
    }

    /// Add a quiz. Names must be unique within the registry.
    pub fn insert(&mut self, quiz: QuizFile) -> Result<()> {
        if self.quizzes.contains_key(&quiz.name) {
            anyhow::bail!("duplicate quiz name: {}", quiz.name);
        }
        tracing::debug!(name = %quiz.name, "registered quiz");
        self.quizzes.insert(quiz.name.clone(), quiz);
        Ok(())
    }

    /// Look up a quiz by name.
    pub fn get(&self, name: &str) -> Option<&QuizFile> {
        self.quizzes.get(name)
    }

    /// All registered quiz names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.quizzes.keys().map(String::as_str)
    }

    /// Number of registered quizzes.
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    /// Returns `true` if the registry holds no quizzes.
    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Suite, SuiteKind};

    fn quiz(name: &str) -> QuizFile {
        QuizFile {
            name: name.into(),
            points: 0,
            suites: vec![Suite {
                scored: false,
                kind: SuiteKind::Concept,
                cases: vec![],
            }],
        }
    }

    #[test]
    fn insert_and_lookup() {
        let mut registry = QuizRegistry::new();
        registry.insert(quiz("Recap Lists and Dictionaries")).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.get("Recap Lists and Dictionaries").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut registry = QuizRegistry::new();
        registry.insert(quiz("Dup")).unwrap();
        let err = registry.insert(quiz("Dup")).unwrap_err();
        assert!(err.to_string().contains("duplicate quiz name"));
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = QuizRegistry::new();
        registry.insert(quiz("b")).unwrap();
        registry.insert(quiz("a")).unwrap();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn load_dir_registers_parsed_quizzes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tiny.toml"),
            r#"
name = "Tiny"
points = 0

[[suites]]
scored = false
type = "wwpp"

[[suites.cases]]
hidden = false
locked = true
code = """
>>> 1 + 1
4c6983d5f50ec727a8c698b81146ec40
"""
"#,
        )
        .unwrap();

        let registry = QuizRegistry::load_dir(dir.path()).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        assert_eq!(registry.get("Tiny").unwrap().case_count(), 1);
    }
}

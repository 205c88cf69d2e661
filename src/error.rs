//! Load error types.
//!
//! Defined as a typed enum so callers can distinguish schema problems from
//! unrecognized suite types without string matching. Loading is idempotent
//! and deterministic, so there is no retry path: every error is terminal
//! for the file that produced it.

use thiserror::Error;

/// Errors that can occur when loading a quiz file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A required field is missing, blank, or of the wrong kind.
    /// The message carries location context ("suite 2, case 1: ...").
    #[error("schema error: {0}")]
    Schema(String),

    /// The suite `type` value is outside the recognized set.
    #[error("unknown suite type `{0}`")]
    UnknownSuiteType(String),
}

impl LoadError {
    /// Returns `true` if this is a schema error.
    pub fn is_schema(&self) -> bool {
        matches!(self, LoadError::Schema(_))
    }

    /// Returns `true` if this is an unknown-suite-type error.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, LoadError::UnknownSuiteType(_))
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(e: toml::de::Error) -> Self {
        LoadError::Schema(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_helpers() {
        let schema = LoadError::Schema("points: expected integer".into());
        assert!(schema.is_schema());
        assert!(!schema.is_unknown_type());

        let unknown = LoadError::UnknownSuiteType("doctest".into());
        assert!(unknown.is_unknown_type());
        assert!(!unknown.is_schema());
    }

    #[test]
    fn display_includes_offending_type() {
        let e = LoadError::UnknownSuiteType("doctest".into());
        assert_eq!(e.to_string(), "unknown suite type `doctest`");
    }
}

//! quizbank - Typed quiz/test-case data for automated grading harnesses.
//!
//! This crate defines the data model for authored quiz files (suites of
//! multiple-choice questions and "what would Python print" transcripts),
//! a validating TOML loader, and an in-memory registry keyed by quiz name.
//! Answer digests are opaque: hashing and comparison belong to the grading
//! harness that consumes these records, not to this crate.

pub mod error;
pub mod model;
pub mod parser;
pub mod registry;

//! Error types and handling for Skillcheck
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`corpus`]: Corpus discovery errors
//! - [`skill`]: Skill bundle errors
//! - [`check`]: Check run errors
//! - [`fs`]: File system errors

#![allow(dead_code, unused_assignments)]

// Declare submodules
pub mod check;
pub mod corpus;
pub mod fs;
pub mod skill;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use check::{failed as checks_failed, invalid_glob};
#[allow(unused_imports)]
pub use corpus::not_found as corpus_not_found;
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed};
#[allow(unused_imports)]
pub use skill::{
    index_parse_failed as skill_index_parse_failed, not_found as skill_not_found,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Skillcheck operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillcheckError {
    // Corpus errors
    #[error("No skill corpus found at: {path}")]
    #[diagnostic(
        code(skillcheck::corpus::not_found),
        help(
            "Skillcheck expects a .claude/skills directory at the corpus root. Pass --root or set SKILLCHECK_ROOT to point at the repository."
        )
    )]
    CorpusNotFound { path: String },

    // Skill errors
    #[error("Skill '{name}' not found")]
    #[diagnostic(
        code(skillcheck::skill::not_found),
        help("Run 'skillcheck list' to see the discovered skills")
    )]
    SkillNotFound { name: String },

    #[error("Failed to parse skill index: {path}")]
    #[diagnostic(code(skillcheck::skill::index_parse_failed))]
    SkillIndexParseFailed { path: String, reason: String },

    // Check errors
    #[error("Found {errors} error(s) and {warnings} warning(s)")]
    #[diagnostic(
        code(skillcheck::check::failed),
        help("Fix the reported paths, or narrow the run with --skill")
    )]
    ChecksFailed { errors: usize, warnings: usize },

    #[error("Invalid skill pattern: {pattern}")]
    #[diagnostic(
        code(skillcheck::check::invalid_glob),
        help("Patterns use glob syntax, e.g. 'postgres-*' or '*-patterns'")
    )]
    InvalidGlobPattern { pattern: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(skillcheck::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skillcheck::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SkillcheckError {
    fn from(err: std::io::Error) -> Self {
        SkillcheckError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SkillcheckError {
    fn from(err: serde_yaml::Error) -> Self {
        SkillcheckError::SkillIndexParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SkillcheckError {
    fn from(err: serde_json::Error) -> Self {
        SkillcheckError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SkillcheckError {
    fn from(err: inquire::InquireError) -> Self {
        SkillcheckError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillcheckError>;

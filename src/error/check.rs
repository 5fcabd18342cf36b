//! Check run errors

use super::SkillcheckError;

/// Creates a checks failed error
pub fn failed(errors: usize, warnings: usize) -> SkillcheckError {
    SkillcheckError::ChecksFailed { errors, warnings }
}

/// Creates an invalid glob pattern error
pub fn invalid_glob(pattern: impl Into<String>) -> SkillcheckError {
    SkillcheckError::InvalidGlobPattern {
        pattern: pattern.into(),
    }
}

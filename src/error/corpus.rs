//! Corpus discovery errors

use super::SkillcheckError;

/// Creates a corpus not found error
pub fn not_found(path: impl Into<String>) -> SkillcheckError {
    SkillcheckError::CorpusNotFound { path: path.into() }
}

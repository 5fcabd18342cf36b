//! Skill bundle errors

use super::SkillcheckError;

/// Creates a skill not found error
pub fn not_found(name: impl Into<String>) -> SkillcheckError {
    SkillcheckError::SkillNotFound { name: name.into() }
}

/// Creates a skill index parse failed error
pub fn index_parse_failed(
    path: impl Into<String>,
    reason: impl Into<String>,
) -> SkillcheckError {
    SkillcheckError::SkillIndexParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

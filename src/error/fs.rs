//! File system errors

use super::SkillcheckError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SkillcheckError {
    SkillcheckError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SkillcheckError {
    SkillcheckError::IoError {
        message: message.into(),
    }
}

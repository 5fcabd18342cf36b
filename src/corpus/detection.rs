//! Corpus root detection
//!
//! The corpus root is the nearest ancestor directory containing
//! `.claude/skills/`. No git repository is required; documentation corpora
//! are frequently checked independently of version control.

use std::path::{Path, PathBuf};

use normpath::PathExt;

use super::SKILLS_DIR;

/// Detect if a corpus exists at the given path
pub fn exists(root: &Path) -> bool {
    root.join(SKILLS_DIR).is_dir()
}

/// Find the corpus root by walking up from a starting directory.
///
/// Returns `None` when no ancestor contains `.claude/skills/`.
pub fn find_from(start: &Path) -> Option<PathBuf> {
    let start = start
        .normalize()
        .map(normpath::BasePathBuf::into_path_buf)
        .unwrap_or_else(|_| start.to_path_buf());

    start
        .ancestors()
        .find(|candidate| exists(candidate))
        .map(Path::to_path_buf)
}

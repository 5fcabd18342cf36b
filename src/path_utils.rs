//! Cross-platform path utilities for Skillcheck
//!
//! Link targets in the corpus are written with forward slashes; these helpers
//! keep resolution and display consistent across Windows, macOS, and Linux.

use std::path::{Component, Path, PathBuf};

/// Convert a path to a forward-slash string for platform-independent
/// comparison and display.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve a relative link target against a base directory, lexically.
///
/// `..` components pop, `.` components are skipped. The target is not
/// required to exist; existence checks happen at the call site. Resolution
/// never consults the file system, so symlinks are not followed.
pub fn resolve_relative(base: &Path, target: &str) -> PathBuf {
    let mut resolved = base.to_path_buf();
    for component in Path::new(target).components() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir => {}
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// Format a path relative to the corpus root with forward slashes.
///
/// Falls back to the full path when it is not under the root.
pub fn root_relative(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    to_forward_slashes(relative)
}

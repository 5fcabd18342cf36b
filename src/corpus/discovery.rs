//! Bundle and prompt discovery
//!
//! This module handles:
//! - Finding skill bundle directories (directories holding a SKILL.md)
//! - Filtering bundles to leaf directories only
//! - Finding slash-command prompt files under `.claude/commands/`

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::{PromptFile, PromptKind};
use crate::error::Result;
use crate::path_utils;

use super::{COMMANDS_DIR, SKILL_INDEX};

/// Discover skill bundle directories under the skills root.
///
/// A bundle is a directory containing a SKILL.md. Only leaf skill
/// directories count: when both `web/` and `web/nextjs/` carry a SKILL.md,
/// `web/` is a grouping, not a bundle. Names are forward-slash paths
/// relative to the skills root, sorted.
pub fn discover_bundle_dirs(skills_dir: &Path) -> Vec<(String, PathBuf)> {
    if !skills_dir.is_dir() {
        return Vec::new();
    }

    let all_dirs: HashSet<String> = WalkDir::new(skills_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_str() == Some(SKILL_INDEX))
        .filter_map(|e| {
            let parent = e.path().parent()?;
            let rel = parent.strip_prefix(skills_dir).ok()?;
            if rel.as_os_str().is_empty() {
                // A SKILL.md directly under .claude/skills/ belongs to no bundle
                return None;
            }
            Some(path_utils::to_forward_slashes(rel))
        })
        .collect();

    let mut names: Vec<String> = find_leaf_dirs(&all_dirs).into_iter().collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let path = skills_dir.join(name.replace('/', std::path::MAIN_SEPARATOR_STR));
            (name, path)
        })
        .collect()
}

/// Find leaf directories (no other directory is a subdirectory of these)
fn find_leaf_dirs(all_dirs: &HashSet<String>) -> HashSet<String> {
    all_dirs
        .iter()
        .filter(|dir| {
            !all_dirs
                .iter()
                .any(|other| *other != **dir && other.starts_with(&format!("{dir}/")))
        })
        .cloned()
        .collect()
}

/// Discover slash-command prompt files under `.claude/commands/`
pub fn discover_command_prompts(root: &Path) -> Result<Vec<PromptFile>> {
    let commands_dir = root.join(COMMANDS_DIR);
    if !commands_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(&commands_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("md"))
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    paths
        .iter()
        .map(|path| PromptFile::load(PromptKind::Command, path))
        .collect()
}

//! Orphan detection: every resource document should be reachable from its
//! bundle's SKILL.md. Unreferenced resources are invisible to readers who
//! follow the progressive-disclosure index.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::SkillBundle;
use crate::markdown::links::strip_fragment;
use crate::path_utils::{resolve_relative, root_relative};

use super::Diagnostic;

pub const ORPHANED_RESOURCE: &str = "resource::orphaned";

pub fn check(root: &Path, bundle: &SkillBundle, out: &mut Vec<Diagnostic>) {
    let referenced: HashSet<PathBuf> = bundle
        .links
        .iter()
        .map(|link| resolve_relative(&bundle.path, strip_fragment(&link.target)))
        .collect();

    for resource in &bundle.resources {
        let absolute = resolve_relative(&bundle.path, &crate::path_utils::to_forward_slashes(&resource.rel_path));
        if !referenced.contains(&absolute) {
            out.push(
                Diagnostic::warning(
                    ORPHANED_RESOURCE,
                    "Resource is not referenced by the skill index",
                )
                .with_skill(&bundle.name)
                .with_path(root_relative(root, &resource.absolute_path)),
            );
        }
    }
}

//! Resource link integrity: every relative link in a resource document
//! (including its "Related Files" list) must resolve to an existing file.

use std::path::Path;

use crate::domain::SkillBundle;
use crate::markdown::links::strip_fragment;
use crate::path_utils::{resolve_relative, root_relative};

use super::Diagnostic;

pub const BROKEN_LINK: &str = "resource::broken_link";

pub fn check(root: &Path, bundle: &SkillBundle, out: &mut Vec<Diagnostic>) {
    for resource in &bundle.resources {
        let resource_path = root_relative(root, &resource.absolute_path);

        for link in &resource.links {
            let target = strip_fragment(&link.target);
            if target.is_empty() {
                continue;
            }
            let resolved = resolve_relative(resource.base_dir(), target);
            if !resolved.exists() {
                out.push(
                    Diagnostic::error(
                        BROKEN_LINK,
                        format!("Link target '{}' does not exist", target),
                    )
                    .with_skill(&bundle.name)
                    .with_path(&resource_path)
                    .with_line(link.line),
                );
            }
        }
    }
}

//! Index frontmatter checks: the frontmatter must parse as a YAML mapping
//! and declare a non-empty `name` and `description`.
//!
//! Several corpora carry skill files with no frontmatter block at all;
//! that inconsistency is reported as a warning, never repaired.

use std::path::Path;

use crate::domain::{IndexFrontmatter, SkillBundle};
use crate::path_utils::root_relative;

use super::Diagnostic;

pub const FRONTMATTER_MISSING: &str = "skill::frontmatter_missing";
pub const FRONTMATTER_MALFORMED: &str = "skill::frontmatter_malformed";
pub const MISSING_NAME: &str = "skill::missing_name";
pub const MISSING_DESCRIPTION: &str = "skill::missing_description";
pub const NAME_MISMATCH: &str = "skill::name_mismatch";

pub fn check(root: &Path, bundle: &SkillBundle, out: &mut Vec<Diagnostic>) {
    let index_path = root_relative(root, &bundle.index_path);
    let tag = |d: Diagnostic| d.with_skill(&bundle.name).with_path(&index_path);

    match &bundle.frontmatter {
        IndexFrontmatter::Absent => {
            out.push(tag(Diagnostic::warning(
                FRONTMATTER_MISSING,
                "SKILL.md has no frontmatter block",
            )));
        }
        IndexFrontmatter::Malformed { reason } => {
            out.push(tag(Diagnostic::error(
                FRONTMATTER_MALFORMED,
                format!("Frontmatter is not a valid YAML mapping: {reason}"),
            )));
        }
        IndexFrontmatter::Parsed(meta) => {
            match meta.name.as_deref().map(str::trim) {
                None | Some("") => {
                    out.push(tag(Diagnostic::error(
                        MISSING_NAME,
                        "Frontmatter is missing a non-empty 'name' field",
                    )));
                }
                Some(name) if name != bundle.dir_name() => {
                    out.push(tag(Diagnostic::warning(
                        NAME_MISMATCH,
                        format!(
                            "Frontmatter name '{}' does not match directory name '{}'",
                            name,
                            bundle.dir_name()
                        ),
                    )));
                }
                Some(_) => {}
            }

            if meta
                .description
                .as_deref()
                .map(str::trim)
                .is_none_or(str::is_empty)
            {
                out.push(tag(Diagnostic::error(
                    MISSING_DESCRIPTION,
                    "Frontmatter is missing a non-empty 'description' field",
                )));
            }
        }
    }
}

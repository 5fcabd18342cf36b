//! Name uniqueness: no two bundles may declare the same frontmatter
//! `name`. The host runtime activates skills by declared name, so a
//! collision makes activation ambiguous.

use std::collections::BTreeMap;

use crate::domain::SkillBundle;

use super::Diagnostic;

pub const DUPLICATE_NAME: &str = "corpus::duplicate_name";

pub fn check(bundles: &[&SkillBundle], out: &mut Vec<Diagnostic>) {
    let mut by_declared_name: BTreeMap<&str, Vec<&SkillBundle>> = BTreeMap::new();
    for bundle in bundles {
        if let Some(name) = bundle.declared_name() {
            by_declared_name.entry(name).or_default().push(bundle);
        }
    }

    for (name, holders) in by_declared_name {
        if holders.len() < 2 {
            continue;
        }
        for bundle in &holders {
            let others: Vec<&str> = holders
                .iter()
                .filter(|b| b.name != bundle.name)
                .map(|b| b.name.as_str())
                .collect();
            out.push(
                Diagnostic::error(
                    DUPLICATE_NAME,
                    format!(
                        "Frontmatter name '{}' is also declared by: {}",
                        name,
                        others.join(", ")
                    ),
                )
                .with_skill(&bundle.name)
                .with_path(format!("{}/{}/SKILL.md", crate::corpus::SKILLS_DIR, bundle.name)),
            );
        }
    }
}

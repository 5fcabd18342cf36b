//! Index link integrity: every relative link in a SKILL.md (navigation
//! table rows and prose alike) must resolve to an existing file inside the
//! bundle.

use std::path::Path;

use crate::domain::SkillBundle;
use crate::markdown::links::strip_fragment;
use crate::path_utils::{resolve_relative, root_relative};

use super::Diagnostic;

pub const BROKEN_LINK: &str = "skill::broken_link";
pub const LINK_ESCAPES_BUNDLE: &str = "skill::link_escapes_bundle";

pub fn check(root: &Path, bundle: &SkillBundle, out: &mut Vec<Diagnostic>) {
    let index_path = root_relative(root, &bundle.index_path);

    for link in &bundle.links {
        let target = strip_fragment(&link.target);
        if target.is_empty() {
            continue;
        }
        let resolved = resolve_relative(&bundle.path, target);

        if !resolved.exists() {
            out.push(
                Diagnostic::error(
                    BROKEN_LINK,
                    format!("Link target '{}' does not exist", target),
                )
                .with_skill(&bundle.name)
                .with_path(&index_path)
                .with_line(link.line),
            );
        } else if !resolved.starts_with(&bundle.path) {
            // Bundles are self-contained; an index reaching outside its own
            // directory still resolves but breaks the convention.
            out.push(
                Diagnostic::warning(
                    LINK_ESCAPES_BUNDLE,
                    format!("Link target '{}' is outside the skill bundle", target),
                )
                .with_skill(&bundle.name)
                .with_path(&index_path)
                .with_line(link.line),
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::SkillBundle;
    use crate::test_fixtures::TestCorpus;

    fn check_skill(corpus_dir: &TestCorpus, name: &str) -> Vec<Diagnostic> {
        let bundle = SkillBundle::load(name, &corpus_dir.skill_dir(name))
            .expect("Should load bundle");
        let mut out = Vec::new();
        check(corpus_dir.root(), &bundle, &mut out);
        out
    }

    #[test]
    fn test_valid_links_pass() {
        let corpus_dir = TestCorpus::new();
        corpus_dir.add_skill("redis-patterns");
        assert!(check_skill(&corpus_dir, "redis-patterns").is_empty());
    }

    #[test]
    fn test_broken_link_reported_with_line() {
        let corpus_dir = TestCorpus::new();
        corpus_dir.write_skill_index(
            "broken",
            "---\nname: broken\ndescription: d\n---\n\nSee [gone](resources/gone.md).\n",
        );

        let diagnostics = check_skill(&corpus_dir, "broken");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, BROKEN_LINK);
        assert_eq!(diagnostics[0].line, Some(6));
        assert!(diagnostics[0].message.contains("resources/gone.md"));
    }

    #[test]
    fn test_fragment_only_difference_still_resolves() {
        let corpus_dir = TestCorpus::new();
        corpus_dir.add_skill("redis-patterns");
        corpus_dir.write_skill_index(
            "fragments",
            "---\nname: fragments\ndescription: d\n---\n\n\
             [deep](resources/topic.md#usage)\n",
        );
        corpus_dir.write_file(
            ".claude/skills/fragments/resources/topic.md",
            "# Topic\n\n## Usage\n",
        );

        assert!(check_skill(&corpus_dir, "fragments").is_empty());
    }

    #[test]
    fn test_link_escaping_bundle_warns() {
        let corpus_dir = TestCorpus::new();
        corpus_dir.add_skill("redis-patterns");
        corpus_dir.write_skill_index(
            "escapes",
            "---\nname: escapes\ndescription: d\n---\n\n\
             [other](../redis-patterns/SKILL.md)\n",
        );

        let diagnostics = check_skill(&corpus_dir, "escapes");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, LINK_ESCAPES_BUNDLE);
        assert_eq!(diagnostics[0].severity, crate::checks::Severity::Warning);
    }
}

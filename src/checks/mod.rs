//! Structural checks over a skill corpus
//!
//! The checks verify the documentation conventions the corpus relies on:
//! - [`nav_links`]: index links resolve inside the bundle
//! - [`related_files`]: resource document links resolve
//! - [`metadata`]: index frontmatter parses and carries name + description
//! - [`unique_names`]: no two bundles declare the same name
//! - [`orphans`]: every resource is reachable from its index
//! - [`prompts`]: prompt files carry a description for the host runtime
//!
//! Checks never modify the corpus; problems become [`Diagnostic`]s.

pub mod diagnostics;
pub mod metadata;
pub mod nav_links;
pub mod orphans;
pub mod prompts;
pub mod related_files;
pub mod unique_names;

pub use diagnostics::{Diagnostic, Report, Severity};

use crate::corpus::Corpus;
use crate::domain::SkillBundle;
use crate::progress::ScanProgress;

/// Run the per-bundle checks for one skill
pub fn check_bundle(root: &std::path::Path, bundle: &SkillBundle, out: &mut Vec<Diagnostic>) {
    metadata::check(root, bundle, out);
    nav_links::check(root, bundle, out);
    related_files::check(root, bundle, out);
    orphans::check(root, bundle, out);
}

/// Run all checks over the selected bundles and the corpus-level
/// conventions (name uniqueness, command prompts).
pub fn check_corpus(
    corpus: &Corpus,
    bundles: &[&SkillBundle],
    progress: Option<&ScanProgress>,
) -> Report {
    let mut report = Report {
        skills_checked: bundles.len(),
        resources_checked: bundles.iter().map(|b| b.resources.len()).sum(),
        diagnostics: Vec::new(),
    };

    for (i, bundle) in bundles.iter().enumerate() {
        if let Some(progress) = progress {
            progress.update_skill(&bundle.name, i + 1, bundles.len());
        }
        check_bundle(&corpus.root, bundle, &mut report.diagnostics);
        if let Some(progress) = progress {
            progress.inc();
        }
    }

    unique_names::check(bundles, &mut report.diagnostics);
    prompts::check(&corpus.root, &corpus.commands, &mut report.diagnostics);

    report.sort();
    report
}

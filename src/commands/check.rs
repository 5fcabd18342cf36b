//! Check command implementation
//!
//! Runs the structural checks over the corpus (or a glob-selected subset
//! of skills) and renders the resulting report. The command fails when
//! any error is found, or when warnings are found under --strict.

use std::path::PathBuf;

use wax::{CandidatePath, Glob, Pattern};

use crate::checks;
use crate::cli::CheckArgs;
use crate::commands::helpers;
use crate::corpus::Corpus;
use crate::domain::SkillBundle;
use crate::error::{Result, checks_failed, invalid_glob, skill_not_found};
use crate::progress::ScanProgress;
use crate::report::{JsonFormatter, ReportFormatter, TextFormatter};

/// Run check command
pub fn run(root: Option<PathBuf>, args: CheckArgs) -> Result<()> {
    let corpus = helpers::open_corpus(root)?;
    let bundles = select_bundles(&corpus, args.skill.as_deref())?;

    // No progress bar in JSON mode, the report must be the only output
    let progress = if args.json {
        None
    } else {
        Some(ScanProgress::new(bundles.len() as u64))
    };

    let report = checks::check_corpus(&corpus, &bundles, progress.as_ref());

    if let Some(progress) = progress {
        progress.finish();
    }

    let formatter: Box<dyn ReportFormatter> = if args.json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TextFormatter)
    };
    formatter.format(&report)?;

    let errors = report.error_count();
    let warnings = report.warning_count();
    if errors > 0 || (args.strict && warnings > 0) {
        return Err(checks_failed(errors, warnings));
    }

    Ok(())
}

/// Select bundles by glob pattern, or all bundles when no pattern given
fn select_bundles<'a>(corpus: &'a Corpus, pattern: Option<&str>) -> Result<Vec<&'a SkillBundle>> {
    let Some(pattern) = pattern else {
        return Ok(corpus.bundles.iter().collect());
    };

    let glob = Glob::new(pattern).map_err(|_| invalid_glob(pattern))?;
    let selected: Vec<&SkillBundle> = corpus
        .bundles
        .iter()
        .filter(|b| glob.is_match(CandidatePath::from(b.name.as_str())))
        .collect();

    if selected.is_empty() {
        return Err(skill_not_found(pattern));
    }

    Ok(selected)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_fixtures::TestCorpus;

    #[test]
    fn test_select_all_bundles() {
        let corpus_dir = TestCorpus::new();
        corpus_dir.add_skill("postgres-optimization");
        corpus_dir.add_skill("redis-patterns");

        let corpus = Corpus::open(corpus_dir.root()).expect("Should open corpus");
        let selected = select_bundles(&corpus, None).expect("Should select bundles");
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_select_bundles_by_glob() {
        let corpus_dir = TestCorpus::new();
        corpus_dir.add_skill("postgres-optimization");
        corpus_dir.add_skill("redis-patterns");

        let corpus = Corpus::open(corpus_dir.root()).expect("Should open corpus");
        let selected = select_bundles(&corpus, Some("postgres-*")).expect("Should select bundles");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "postgres-optimization");
    }

    #[test]
    fn test_select_bundles_no_match() {
        let corpus_dir = TestCorpus::new();
        corpus_dir.add_skill("redis-patterns");

        let corpus = Corpus::open(corpus_dir.root()).expect("Should open corpus");
        let result = select_bundles(&corpus, Some("mongo-*"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let corpus_dir = TestCorpus::new();
        corpus_dir.add_skill("redis-patterns");

        let corpus = Corpus::open(corpus_dir.root()).expect("Should open corpus");
        let result = select_bundles(&corpus, Some("[unclosed"));
        assert!(result.is_err());
    }

    #[test]
    fn test_run_clean_corpus() {
        let corpus_dir = TestCorpus::new();
        corpus_dir.add_skill("redis-patterns");

        let args = CheckArgs {
            skill: None,
            strict: false,
            json: true,
        };
        run(Some(corpus_dir.root().to_path_buf()), args).expect("Check should pass");
    }

    #[test]
    fn test_run_strict_fails_on_warning() {
        let corpus_dir = TestCorpus::new();
        // No frontmatter: a warning, not an error
        corpus_dir.write_skill_index("framer-motion", "# Framer Motion\n");

        let lenient = CheckArgs {
            skill: None,
            strict: false,
            json: true,
        };
        run(Some(corpus_dir.root().to_path_buf()), lenient).expect("Warnings alone should pass");

        let strict = CheckArgs {
            skill: None,
            strict: true,
            json: true,
        };
        let result = run(Some(corpus_dir.root().to_path_buf()), strict);
        assert!(result.is_err());
    }
}

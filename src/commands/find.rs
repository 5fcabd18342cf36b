//! Find command implementation
//!
//! Answers "which document covers X?" without opening every file: the
//! query is matched against navigation table intents and skill
//! descriptions, case-insensitively.

use console::Style;

use std::path::PathBuf;

use crate::cli::FindArgs;
use crate::commands::helpers;
use crate::error::Result;

/// Run find command
pub fn run(root: Option<PathBuf>, args: FindArgs) -> Result<()> {
    let corpus = helpers::open_corpus(root)?;
    let needle = args.query.to_lowercase();

    let mut matches = 0;
    for bundle in &corpus.bundles {
        for row in bundle.nav.lookup(&args.query) {
            matches += 1;
            println!(
                "  {} {}",
                Style::new().bold().yellow().apply_to(&bundle.name),
                Style::new().dim().apply_to(format!("({})", row.target))
            );
            println!("    {}", row.intent);
        }

        if bundle
            .description()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
        {
            matches += 1;
            println!(
                "  {} {}",
                Style::new().bold().yellow().apply_to(&bundle.name),
                Style::new().dim().apply_to("(SKILL.md)")
            );
            if let Some(description) = bundle.description() {
                println!("    {}", description);
            }
        }
    }

    if matches == 0 {
        println!("No matches for '{}'.", args.query);
    }

    Ok(())
}

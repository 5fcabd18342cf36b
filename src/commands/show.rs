//! Show command implementation

use console::Style;
use inquire::Select;

use std::path::PathBuf;

use crate::cli::ShowArgs;
use crate::commands::helpers;
use crate::corpus::Corpus;
use crate::domain::SkillBundle;
use crate::error::{Result, skill_not_found};

pub fn run(root: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let corpus = helpers::open_corpus(root)?;

    let name = match args.name {
        Some(name) => name,
        None => select_skill_interactively(&corpus)?,
    };

    if name.is_empty() {
        return Ok(());
    }

    let bundle = corpus
        .find_bundle(&name)
        .ok_or_else(|| skill_not_found(name.as_str()))?;

    println!();
    display_bundle(bundle);

    Ok(())
}

/// Select a skill interactively from the discovered bundles
fn select_skill_interactively(corpus: &Corpus) -> Result<String> {
    if corpus.bundles.is_empty() {
        println!("No skills found.");
        return Ok(String::new());
    }

    let items = corpus.bundle_names();

    let selection = match Select::new("Select skill to show", items)
        .with_starting_cursor(0)
        .with_page_size(10)
        .without_filtering()
        .with_help_message("↑↓ to move, ENTER to select, ESC/q to cancel")
        .prompt_skippable()?
    {
        Some(name) => name,
        None => return Ok(String::new()),
    };

    Ok(selection)
}

fn display_bundle(bundle: &SkillBundle) {
    println!("  {}", Style::new().bold().yellow().apply_to(&bundle.name));
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Path:"),
        dunce::simplified(&bundle.path).display()
    );

    if let Some(description) = bundle.description() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Description:"),
            description
        );
    }
    if let Some(meta) = bundle.metadata() {
        if let Some(ref version) = meta.version {
            println!("    {} {}", Style::new().bold().apply_to("Version:"), version);
        }
        if let Some(ref updated) = meta.last_updated {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Last updated:"),
                updated
            );
        }
        if !meta.framework_versions.is_empty() {
            println!("    {}", Style::new().bold().apply_to("Framework versions:"));
            for (framework, version) in &meta.framework_versions {
                println!(
                    "      {} {}",
                    Style::new().cyan().apply_to(framework),
                    version
                );
            }
        }
    }

    if !bundle.nav.is_empty() {
        println!("    {}", Style::new().bold().apply_to("Navigation:"));
        for row in &bundle.nav.rows {
            println!(
                "      {} {}",
                Style::new().cyan().apply_to(&row.intent),
                Style::new().dim().apply_to(format!("-> {}", row.target))
            );
        }
    }

    if !bundle.resources.is_empty() {
        println!("    {}", Style::new().bold().apply_to("Resources:"));
        for resource in &bundle.resources {
            let rel = crate::path_utils::to_forward_slashes(&resource.rel_path);
            let title = resource.title.as_deref().unwrap_or("(untitled)");
            match resource.languages() {
                Some(languages) => println!(
                    "      {}  {} {}",
                    Style::new().dim().apply_to(rel),
                    title,
                    Style::new().dim().apply_to(format!("({})", languages))
                ),
                None => println!("      {}  {}", Style::new().dim().apply_to(rel), title),
            }
        }
    }

    if !bundle.agents.is_empty() {
        println!("    {}", Style::new().bold().apply_to("Agents:"));
        for agent in &bundle.agents {
            match agent.description {
                Some(ref description) => println!(
                    "      {}  {}",
                    Style::new().cyan().apply_to(&agent.name),
                    description
                ),
                None => println!("      {}", Style::new().cyan().apply_to(&agent.name)),
            }
        }
    }
}

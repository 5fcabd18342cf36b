//! List command implementation
//!
//! Lists every discovered skill with its description and document
//! counts, and the slash-command prompts at the corpus level.

use console::Style;

use std::path::PathBuf;

use crate::cli::ListArgs;
use crate::commands::helpers;
use crate::corpus::Corpus;
use crate::domain::{PromptFile, SkillBundle};
use crate::error::Result;

/// Run list command
pub fn run(root: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let corpus = helpers::open_corpus(root)?;

    if args.json {
        return print_json(&corpus);
    }

    if corpus.bundles.is_empty() {
        println!("No skills found.");
        return Ok(());
    }

    println!("Discovered skills ({}):", corpus.bundles.len());
    println!();

    for bundle in &corpus.bundles {
        if args.detailed {
            display_bundle_detailed(bundle);
        } else {
            display_bundle_simple(bundle);
        }
        println!();
    }

    if !corpus.commands.is_empty() {
        display_command_prompts(&corpus.commands);
    }

    Ok(())
}

/// Display skill in simple format
fn display_bundle_simple(bundle: &SkillBundle) {
    println!("  {}", Style::new().bold().yellow().apply_to(&bundle.name));
    if let Some(description) = bundle.description() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Description:"),
            description
        );
    }
    if let Some(counts) = bundle.resource_counts().format() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Contents:"),
            counts
        );
    }
}

/// Display skill in detailed format
fn display_bundle_detailed(bundle: &SkillBundle) {
    display_bundle_simple(bundle);

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

    if !bundle.resources.is_empty() {
        println!("    {}", Style::new().bold().apply_to("Resources:"));
        for resource in &bundle.resources {
            let rel = crate::path_utils::to_forward_slashes(&resource.rel_path);
            match resource.languages() {
                Some(languages) => println!(
                    "      {} {}",
                    Style::new().dim().apply_to(rel),
                    Style::new().dim().apply_to(format!("({})", languages))
                ),
                None => println!("      {}", Style::new().dim().apply_to(rel)),
            }
        }
    }

    if !bundle.agents.is_empty() {
        println!("    {}", Style::new().bold().apply_to("Agents:"));
        for agent in &bundle.agents {
            println!("      {}", Style::new().dim().apply_to(&agent.name));
        }
    }
}

/// Display the corpus-level slash-command prompts
fn display_command_prompts(commands: &[PromptFile]) {
    println!("Command prompts ({}):", commands.len());
    println!();
    for prompt in commands {
        println!("  {}", Style::new().bold().yellow().apply_to(&prompt.name));
        if let Some(ref description) = prompt.description {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Description:"),
                description
            );
        }
        if let Some(ref hint) = prompt.argument_hint {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Arguments:"),
                hint
            );
        }
    }
}

/// Emit the skill list as JSON
fn print_json(corpus: &Corpus) -> Result<()> {
    let skills: Vec<serde_json::Value> = corpus
        .bundles
        .iter()
        .map(|bundle| {
            let counts = bundle.resource_counts();
            let mut entry = serde_json::json!({
                "name": bundle.name,
                "resources": counts.resources,
                "agents": counts.agents,
                "snippets": counts.snippets,
            });
            if let Some(description) = bundle.description() {
                entry["description"] = serde_json::json!(description);
            }
            if let Some(meta) = bundle.metadata() {
                if let Some(ref version) = meta.version {
                    entry["version"] = serde_json::json!(version);
                }
                if let Some(ref updated) = meta.last_updated {
                    entry["lastUpdated"] = serde_json::json!(updated);
                }
                if !meta.framework_versions.is_empty() {
                    entry["frameworkVersions"] = serde_json::json!(meta.framework_versions);
                }
            }
            entry
        })
        .collect();

    let commands: Vec<serde_json::Value> = corpus
        .commands
        .iter()
        .map(|prompt| {
            let mut entry = serde_json::json!({ "name": prompt.name });
            if let Some(ref description) = prompt.description {
                entry["description"] = serde_json::json!(description);
            }
            entry
        })
        .collect();

    let output = serde_json::json!({
        "skills": skills,
        "commands": commands,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

//! Skill corpus loading
//!
//! A corpus is a repository that keeps skill documentation under
//! `.claude/skills/` and, optionally, slash-command prompts under
//! `.claude/commands/`. This module finds the corpus root and loads every
//! bundle in it.

pub mod detection;
pub mod discovery;

use std::path::{Path, PathBuf};

use crate::domain::{PromptFile, SkillBundle};
use crate::error::{Result, corpus_not_found};

/// Skill bundles live here, one directory per skill
pub const SKILLS_DIR: &str = ".claude/skills";
/// Slash-command prompts live here
pub const COMMANDS_DIR: &str = ".claude/commands";
/// Index file of a skill bundle
pub const SKILL_INDEX: &str = "SKILL.md";
/// Deep-dive documents of a skill bundle
pub const RESOURCES_DIR: &str = "resources";
/// Agent prompts of a skill bundle
pub const AGENTS_DIR: &str = "agents";

/// A loaded skill corpus
#[derive(Debug)]
pub struct Corpus {
    pub root: PathBuf,
    /// Bundles sorted by name
    pub bundles: Vec<SkillBundle>,
    /// Command prompts sorted by name
    pub commands: Vec<PromptFile>,
}

impl Corpus {
    /// Open the corpus at a root directory.
    ///
    /// The root must contain `.claude/skills/`. Every bundle is loaded
    /// eagerly; metadata problems are recorded on the bundles for the
    /// checks, not raised here.
    pub fn open(root: &Path) -> Result<Self> {
        if !detection::exists(root) {
            return Err(corpus_not_found(root.display().to_string()));
        }

        let skills_dir = root.join(SKILLS_DIR);
        let mut bundles = Vec::new();
        for (name, path) in discovery::discover_bundle_dirs(&skills_dir) {
            bundles.push(SkillBundle::load(&name, &path)?);
        }
        bundles.sort_by(|a, b| a.name.cmp(&b.name));

        let mut commands = discovery::discover_command_prompts(root)?;
        commands.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Corpus {
            root: root.to_path_buf(),
            bundles,
            commands,
        })
    }

    pub fn find_bundle(&self, name: &str) -> Option<&SkillBundle> {
        self.bundles.iter().find(|b| b.name == name)
    }

    pub fn bundle_names(&self) -> Vec<String> {
        self.bundles.iter().map(|b| b.name.clone()).collect()
    }
}

//! Agent and command prompt domain types
//!
//! Prompt files are instruction text for an AI assistant host: command
//! prompts under `.claude/commands/` and per-bundle agent prompts under
//! `agents/`. Their frontmatter (`description`, `argument-hint`) is a
//! contract consumed by the host runtime.

use std::path::{Path, PathBuf};

use crate::error::{Result, file_read_failed};
use crate::markdown::frontmatter::{Frontmatter, get_str, split_document};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Command,
    Agent,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Command => "command",
            PromptKind::Agent => "agent",
        }
    }
}

/// A loaded prompt file
#[derive(Debug, Clone)]
pub struct PromptFile {
    /// File stem (e.g. "sprint-plan")
    pub name: String,
    pub kind: PromptKind,
    pub path: PathBuf,
    pub description: Option<String>,
    /// Slash-command argument hint (command prompts only by convention)
    pub argument_hint: Option<String>,
    pub has_frontmatter: bool,
}

impl PromptFile {
    pub fn load(kind: PromptKind, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();

        let doc = split_document(&content);
        let (description, argument_hint, has_frontmatter) = match &doc.frontmatter {
            Frontmatter::Parsed(value) => (
                get_str(value, "description"),
                get_str(value, "argument-hint"),
                true,
            ),
            _ => (None, None, false),
        };

        Ok(PromptFile {
            name,
            kind,
            path: path.to_path_buf(),
            description,
            argument_hint,
            has_frontmatter,
        })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_fixtures::write_file;
    use tempfile::TempDir;

    #[test]
    fn test_load_command_prompt() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("sprint-plan.md");
        write_file(
            &path,
            "---\ndescription: Plan the next sprint\nargument-hint: \"[sprint-number]\"\n---\n\nYou are a sprint planner.\n",
        );

        let prompt = PromptFile::load(PromptKind::Command, &path).expect("Should load prompt");
        assert_eq!(prompt.name, "sprint-plan");
        assert_eq!(prompt.kind.label(), "command");
        assert_eq!(prompt.description.as_deref(), Some("Plan the next sprint"));
        assert_eq!(prompt.argument_hint.as_deref(), Some("[sprint-number]"));
        assert!(prompt.has_frontmatter);
    }

    #[test]
    fn test_load_prompt_without_frontmatter() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("code-review.md");
        write_file(&path, "You are a code reviewer. Read the diff and report.\n");

        let prompt = PromptFile::load(PromptKind::Agent, &path).expect("Should load prompt");
        assert_eq!(prompt.name, "code-review");
        assert!(!prompt.has_frontmatter);
        assert!(prompt.description.is_none());
    }
}

//! Prompt frontmatter checks: command prompts are invoked by the host
//! runtime through their frontmatter `description`, so a prompt without
//! one cannot be surfaced to the user.

use std::path::Path;

use crate::domain::PromptFile;
use crate::path_utils::root_relative;

use super::Diagnostic;

pub const MISSING_DESCRIPTION: &str = "prompt::missing_description";

pub fn check(root: &Path, prompts: &[PromptFile], out: &mut Vec<Diagnostic>) {
    for prompt in prompts {
        if prompt
            .description
            .as_deref()
            .map(str::trim)
            .is_none_or(str::is_empty)
        {
            out.push(
                Diagnostic::warning(
                    MISSING_DESCRIPTION,
                    format!(
                        "{} prompt '{}' has no frontmatter description",
                        capitalize(prompt.kind.label()),
                        prompt.name
                    ),
                )
                .with_path(root_relative(root, &prompt.path)),
            );
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

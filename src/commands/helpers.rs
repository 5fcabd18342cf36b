//! Shared helpers for command implementations

use std::path::PathBuf;

use crate::corpus::{Corpus, detection};
use crate::error::{Result, corpus_not_found, io_error};

/// Resolve the corpus root from the CLI argument or by walking up from
/// the current directory.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(path),
        None => {
            let current_dir = std::env::current_dir()
                .map_err(|e| io_error(format!("Failed to get current directory: {}", e)))?;
            detection::find_from(&current_dir)
                .ok_or_else(|| corpus_not_found(current_dir.display().to_string()))
        }
    }
}

/// Resolve the root and load the corpus at it
pub fn open_corpus(root: Option<PathBuf>) -> Result<Corpus> {
    let root = resolve_root(root)?;
    Corpus::open(&root)
}

//! Resource document domain types
//!
//! A resource document is one deep-dive Markdown file under a bundle's
//! `resources/` directory, referenced from the bundle's navigation table.

use std::path::{Path, PathBuf};

use crate::error::{Result, file_read_failed};
use crate::markdown::frontmatter::split_document;
use crate::markdown::links::{MarkdownLink, relative_links};
use crate::markdown::snippets::{CodeSnippet, extract_snippets, language_summary};

/// A loaded resource document
#[derive(Debug, Clone)]
pub struct ResourceDoc {
    /// Path relative to the bundle directory (e.g. "resources/caching.md")
    pub rel_path: PathBuf,
    /// Absolute path to the file
    pub absolute_path: PathBuf,
    /// First `#` heading, if any
    pub title: Option<String>,
    /// Relative links, including the trailing "Related Files" list
    pub links: Vec<MarkdownLink>,
    /// Fenced code snippets with their language tags
    pub snippets: Vec<CodeSnippet>,
}

impl ResourceDoc {
    pub fn load(bundle_path: &Path, rel_path: PathBuf) -> Result<Self> {
        let absolute_path = bundle_path.join(&rel_path);
        let content = std::fs::read_to_string(&absolute_path)
            .map_err(|e| file_read_failed(absolute_path.display().to_string(), e.to_string()))?;

        let doc = split_document(&content);

        Ok(ResourceDoc {
            rel_path,
            absolute_path,
            title: extract_title(&doc.body),
            links: relative_links(&doc.body, doc.body_line),
            snippets: extract_snippets(&doc.body, doc.body_line),
        })
    }

    /// Directory the document's relative links resolve against
    pub fn base_dir(&self) -> &Path {
        self.absolute_path.parent().unwrap_or(&self.absolute_path)
    }

    /// Snippet language summary for display (e.g. "sql, typescript")
    pub fn languages(&self) -> Option<String> {
        language_summary(&self.snippets)
    }
}

fn extract_title(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches('#').trim().to_string())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_fixtures::write_file;
    use tempfile::TempDir;

    const RESOURCE: &str = "\
# Window Functions

Rank rows without collapsing groups.

```sql
SELECT rank() OVER (PARTITION BY dept ORDER BY salary DESC) FROM emp;
```

## Related Files

- [query-tuning.md](query-tuning.md)
- [SKILL.md](../SKILL.md)
";

    #[test]
    fn test_load_resource() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let rel = PathBuf::from("resources/window-functions.md");
        write_file(&temp.path().join(&rel), RESOURCE);

        let doc = ResourceDoc::load(temp.path(), rel.clone()).expect("Should load resource");

        assert_eq!(doc.rel_path, rel);
        assert_eq!(doc.title.as_deref(), Some("Window Functions"));
        assert_eq!(doc.links.len(), 2);
        assert_eq!(doc.links[1].target, "../SKILL.md");
        assert_eq!(doc.snippets.len(), 1);
        assert_eq!(doc.languages().as_deref(), Some("sql"));
    }

    #[test]
    fn test_load_resource_without_heading() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let rel = PathBuf::from("resources/notes.md");
        write_file(&temp.path().join(&rel), "Just prose, no heading.\n");

        let doc = ResourceDoc::load(temp.path(), rel).expect("Should load resource");
        assert!(doc.title.is_none());
        assert!(doc.links.is_empty());
    }

    #[test]
    fn test_base_dir() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let rel = PathBuf::from("resources/caching.md");
        write_file(&temp.path().join(&rel), "# Caching\n");

        let doc = ResourceDoc::load(temp.path(), rel).expect("Should load resource");
        assert_eq!(doc.base_dir(), temp.path().join("resources"));
    }
}

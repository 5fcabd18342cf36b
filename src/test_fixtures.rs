//! Shared fixtures for unit tests

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A self-consistent SKILL.md index used across unit tests
pub const SAMPLE_INDEX: &str = "\
---
name: postgres-optimization
description: PostgreSQL query optimization patterns
version: 1.2.0
lastUpdated: 2024-05-01
frameworkVersions:
  postgres: \"16\"
---

# PostgreSQL Optimization

| Need to... | Read this... |
|------------|--------------|
| Rank rows within groups | [window-functions.md](resources/window-functions.md) |
";

/// Write a file, creating parent directories
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// A temporary corpus rooted in a temp directory
pub struct TestCorpus {
    temp: TempDir,
}

impl TestCorpus {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir_all(temp.path().join(crate::corpus::SKILLS_DIR))
            .expect("Failed to create skills directory");
        TestCorpus { temp }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn skill_dir(&self, name: &str) -> PathBuf {
        self.root().join(crate::corpus::SKILLS_DIR).join(name)
    }

    /// Write a file at a root-relative path
    pub fn write_file(&self, rel_path: &str, content: &str) {
        write_file(&self.root().join(rel_path), content);
    }

    /// Write only a SKILL.md for a bundle
    pub fn write_skill_index(&self, name: &str, content: &str) {
        write_file(&self.skill_dir(name).join(crate::corpus::SKILL_INDEX), content);
    }

    /// Add a complete, check-clean skill bundle: a frontmattered index
    /// whose navigation table references the bundle's one resource.
    pub fn add_skill(&self, name: &str) {
        let index = format!(
            "---\nname: {name}\ndescription: Patterns and guidance for {name}\nversion: 1.0.0\nlastUpdated: 2024-06-15\n---\n\n\
             # {name}\n\n\
             | Need to... | Read this... |\n\
             |------------|--------------|\n\
             | Get started | [caching.md](resources/caching.md) |\n"
        );
        self.write_skill_index(name, &index);
        self.write_file(
            &format!("{}/{}/resources/caching.md", crate::corpus::SKILLS_DIR, name),
            "# Caching\n\n```sql\nSELECT 1;\n```\n",
        );
    }
}

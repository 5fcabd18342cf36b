//! Common test utilities for Skillcheck integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test corpus rooted in a temp directory
#[allow(dead_code)]
pub struct TestCorpus {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the corpus root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestCorpus {
    /// Create a new corpus with an empty .claude/skills directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join(".claude/skills"))
            .expect("Failed to create skills directory");
        Self { temp, path }
    }

    /// Path to the corpus root as a string argument for --root
    pub fn root_arg(&self) -> String {
        self.path.display().to_string()
    }

    /// Write a file at a root-relative path
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write only the SKILL.md index of a bundle
    pub fn write_skill_index(&self, name: &str, content: &str) {
        self.write_file(&format!(".claude/skills/{}/SKILL.md", name), content);
    }

    /// Add a complete, check-clean skill: a frontmattered index whose
    /// navigation table references the bundle's one resource.
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
            &format!(".claude/skills/{}/resources/caching.md", name),
            "# Caching\n\n```sql\nSELECT 1;\n```\n",
        );
    }
}

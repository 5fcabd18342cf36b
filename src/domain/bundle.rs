//! Skill bundle domain types
//!
//! A skill bundle is one directory under `.claude/skills/` with a SKILL.md
//! index, deep-dive documents under `resources/`, and optionally agent
//! prompts under `agents/`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, file_read_failed};
use crate::markdown::frontmatter::{Frontmatter, SkillFrontmatter, split_document};
use crate::markdown::links::{MarkdownLink, relative_links};
use crate::markdown::nav::NavTable;
use crate::domain::prompt::{PromptFile, PromptKind};
use crate::domain::resource::ResourceDoc;

/// Frontmatter state of a skill index.
///
/// Some skills in real corpora ship without a frontmatter block; that is
/// recorded, not repaired.
#[derive(Debug, Clone)]
pub enum IndexFrontmatter {
    Absent,
    Malformed { reason: String },
    Parsed(SkillFrontmatter),
}

/// Count of documents attached to a bundle
#[derive(Debug, Clone, Default)]
pub struct ResourceCounts {
    pub resources: usize,
    pub agents: usize,
    pub snippets: usize,
}

impl ResourceCounts {
    pub fn format(&self) -> Option<String> {
        let parts = [
            ("resource doc", self.resources),
            ("agent", self.agents),
            ("snippet", self.snippets),
        ];

        let non_zero: Vec<String> = parts
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(name, count)| match *count {
                1 => format!("1 {name}"),
                _ => format!("{count} {name}s"),
            })
            .collect();

        if non_zero.is_empty() {
            None
        } else {
            Some(non_zero.join(", "))
        }
    }
}

/// A loaded skill bundle
#[derive(Debug, Clone)]
pub struct SkillBundle {
    /// Bundle identifier: directory path relative to `.claude/skills/`,
    /// forward slashes (e.g. "redis-patterns" or "web/nextjs")
    pub name: String,
    /// Absolute path to the bundle directory
    pub path: PathBuf,
    /// Absolute path to the SKILL.md index
    pub index_path: PathBuf,
    pub frontmatter: IndexFrontmatter,
    /// Navigation table parsed from the index body
    pub nav: NavTable,
    /// Relative links in the index body (navigation rows included)
    pub links: Vec<MarkdownLink>,
    pub resources: Vec<ResourceDoc>,
    pub agents: Vec<PromptFile>,
}

impl SkillBundle {
    /// Load a bundle from its directory.
    ///
    /// The index is read and parsed; resource documents are loaded from
    /// `resources/` and agent prompts from `agents/`. Metadata problems are
    /// recorded on the bundle for the checks, never raised as errors here.
    pub fn load(name: &str, path: &Path) -> Result<Self> {
        let index_path = path.join(crate::corpus::SKILL_INDEX);
        let content = std::fs::read_to_string(&index_path)
            .map_err(|e| file_read_failed(index_path.display().to_string(), e.to_string()))?;

        let doc = split_document(&content);
        let frontmatter = match doc.frontmatter {
            Frontmatter::Absent => IndexFrontmatter::Absent,
            Frontmatter::Malformed { reason } => IndexFrontmatter::Malformed { reason },
            Frontmatter::Parsed(value) => {
                IndexFrontmatter::Parsed(SkillFrontmatter::from_value(&value))
            }
        };

        Ok(SkillBundle {
            name: name.to_string(),
            path: path.to_path_buf(),
            index_path,
            frontmatter,
            nav: NavTable::parse(&doc.body, doc.body_line),
            links: relative_links(&doc.body, doc.body_line),
            resources: load_resources(path)?,
            agents: load_agents(path)?,
        })
    }

    pub fn metadata(&self) -> Option<&SkillFrontmatter> {
        match &self.frontmatter {
            IndexFrontmatter::Parsed(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata().and_then(|m| m.description.as_deref())
    }

    /// Name declared in frontmatter (may differ from the directory name)
    pub fn declared_name(&self) -> Option<&str> {
        self.metadata().and_then(|m| m.name.as_deref())
    }

    /// Final path component of the bundle identifier
    pub fn dir_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    pub fn resource_counts(&self) -> ResourceCounts {
        ResourceCounts {
            resources: self.resources.len(),
            agents: self.agents.len(),
            snippets: self.resources.iter().map(|r| r.snippets.len()).sum(),
        }
    }
}

/// Load resource documents under `resources/`, sorted by path
fn load_resources(bundle_path: &Path) -> Result<Vec<ResourceDoc>> {
    let resources_dir = bundle_path.join(crate::corpus::RESOURCES_DIR);
    if !resources_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut rel_paths: Vec<PathBuf> = WalkDir::new(&resources_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("md"))
        .filter_map(|e| {
            e.path()
                .strip_prefix(bundle_path)
                .ok()
                .map(Path::to_path_buf)
        })
        .collect();
    rel_paths.sort();

    rel_paths
        .into_iter()
        .map(|rel| ResourceDoc::load(bundle_path, rel))
        .collect()
}

/// Load agent prompts under `agents/`, sorted by file name
fn load_agents(bundle_path: &Path) -> Result<Vec<PromptFile>> {
    let agents_dir = bundle_path.join(crate::corpus::AGENTS_DIR);
    if !agents_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(&agents_dir)?
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().and_then(|x| x.to_str()) == Some("md"))
        .collect();
    paths.sort();

    paths
        .into_iter()
        .map(|path| PromptFile::load(PromptKind::Agent, &path))
        .collect()
}

//! Diagnostic and report types for check runs.

use serde::Serialize;

/// Severity of a structural problem.
///
/// Errors are integrity violations (broken links, invalid metadata);
/// warnings are corpus inconsistencies worth surfacing but tolerated
/// (missing frontmatter, orphaned resources).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One structural problem found in the corpus
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable machine-readable code, e.g. "skill::broken_link"
    pub code: &'static str,
    /// Skill the problem belongs to; `None` for corpus-level problems
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    /// Root-relative path with forward slashes
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    fn new(severity: Severity, code: &'static str, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            code,
            skill: None,
            path: String::new(),
            line: None,
            message: message.into(),
        }
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Result of a check run
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub skills_checked: usize,
    pub resources_checked: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Stable ordering for display and JSON output: by skill, then path,
    /// then line.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by(|a, b| (&a.skill, &a.path, a.line).cmp(&(&b.skill, &b.path, b.line)));
    }
}

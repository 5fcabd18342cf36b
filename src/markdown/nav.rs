//! Navigation table parsing for skill indexes.
//!
//! Skill indexes keep a progressive-disclosure table mapping a task intent
//! to the resource document covering it ("Need to... / Read this..."). A
//! navigation row is any table row carrying a relative link; the intent is
//! the text of the first cell.

use super::links;

/// One row of a navigation table
#[derive(Debug, Clone)]
pub struct NavRow {
    /// Task intent, e.g. "Paginate large result sets"
    pub intent: String,
    /// Relative document path, e.g. "resources/pagination.md"
    pub target: String,
    /// 1-based line number in the original file
    pub line: usize,
}

/// Parsed navigation table of a skill index
#[derive(Debug, Clone, Default)]
pub struct NavTable {
    pub rows: Vec<NavRow>,
}

impl NavTable {
    /// Parse navigation rows from a Markdown body.
    ///
    /// `first_line` is the file line number of the first body line. Rows in
    /// fenced code blocks, header separator rows, and rows without a
    /// relative link are ignored.
    pub fn parse(body: &str, first_line: usize) -> Self {
        let mut rows = Vec::new();
        let mut in_fence = false;

        for (offset, line) in body.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                in_fence = !in_fence;
                continue;
            }
            if in_fence || !trimmed.starts_with('|') {
                continue;
            }
            if is_separator_row(trimmed) {
                continue;
            }
            let line_number = first_line + offset;
            if let Some(row) = parse_row(trimmed, line_number) {
                rows.push(row);
            }
        }

        NavTable { rows }
    }

    /// Rows whose intent contains the query, case-insensitively.
    pub fn lookup(&self, query: &str) -> Vec<&NavRow> {
        let needle = query.to_lowercase();
        self.rows
            .iter()
            .filter(|row| row.intent.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

fn is_separator_row(line: &str) -> bool {
    line.chars().all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

fn parse_row(line: &str, line_number: usize) -> Option<NavRow> {
    let link = links::extract_links(line, line_number)
        .into_iter()
        .find(|l| links::is_relative_target(&l.target))?;

    let first_cell = line
        .split('|')
        .map(str::trim)
        .find(|cell| !cell.is_empty())?;

    // When the link sits in the first cell, the link text is the intent
    let intent = if first_cell.contains(&format!("({})", link.target)) {
        link.text.clone()
    } else {
        strip_emphasis(first_cell)
    };

    Some(NavRow {
        intent,
        target: link.target,
        line: line_number,
    })
}

fn strip_emphasis(cell: &str) -> String {
    cell.trim_matches(|c| c == '*' || c == '_').trim().to_string()
}

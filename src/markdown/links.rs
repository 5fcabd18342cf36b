//! Inline link extraction from Markdown text.
//!
//! Only inline `[text](target)` links are extracted; the corpus convention
//! does not use reference-style links. Fenced code blocks and inline code
//! spans are skipped so link-shaped snippet content is not reported.

/// An inline Markdown link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownLink {
    pub text: String,
    pub target: String,
    /// 1-based line number in the original file
    pub line: usize,
}

/// Extract all inline links from Markdown text.
///
/// `first_line` is the 1-based file line number of the first line of `text`,
/// so callers passing a body split off from frontmatter keep file-accurate
/// line numbers.
pub fn extract_links(text: &str, first_line: usize) -> Vec<MarkdownLink> {
    let mut links = Vec::new();
    let mut in_fence = false;

    for (offset, line) in text.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        let line_number = first_line + offset;
        // Inline code spans are skipped: only even-indexed segments between
        // backticks are scanned.
        for (i, segment) in line.split('`').enumerate() {
            if i % 2 == 0 {
                scan_segment(segment, line_number, &mut links);
            }
        }
    }

    links
}

/// Extract only links whose target points at another corpus document.
pub fn relative_links(text: &str, first_line: usize) -> Vec<MarkdownLink> {
    extract_links(text, first_line)
        .into_iter()
        .filter(|link| is_relative_target(&link.target))
        .collect()
}

/// Whether a link target is a relative path into the corpus.
///
/// External URLs, mail links, absolute paths, and pure fragment anchors are
/// not corpus links.
pub fn is_relative_target(target: &str) -> bool {
    let path = strip_fragment(target);
    if path.is_empty() {
        return false;
    }
    if path.contains("://") || path.starts_with("mailto:") {
        return false;
    }
    !path.starts_with('/')
}

/// Strip a `#fragment` suffix from a link target.
pub fn strip_fragment(target: &str) -> &str {
    match target.find('#') {
        Some(idx) => &target[..idx],
        None => target,
    }
}

fn scan_segment(segment: &str, line: usize, links: &mut Vec<MarkdownLink>) {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'[' {
            i += 1;
            continue;
        }
        let Some(close_bracket) = find_byte(bytes, i + 1, b']') else {
            return;
        };
        if close_bracket + 1 >= bytes.len() || bytes[close_bracket + 1] != b'(' {
            i = close_bracket + 1;
            continue;
        }
        let Some(close_paren) = find_byte(bytes, close_bracket + 2, b')') else {
            return;
        };
        let text = segment[i + 1..close_bracket].to_string();
        let target = clean_target(&segment[close_bracket + 2..close_paren]);
        if !target.is_empty() {
            links.push(MarkdownLink { text, target, line });
        }
        i = close_paren + 1;
    }
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes[from..].iter().position(|&b| b == needle).map(|p| p + from)
}

/// Normalize a raw link destination: strip angle brackets and a trailing
/// `"title"` part.
fn clean_target(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw.strip_prefix('<').and_then(|r| r.strip_suffix('>')).unwrap_or(raw);
    match raw.find(" \"") {
        Some(idx) => raw[..idx].trim().to_string(),
        None => raw.to_string(),
    }
}

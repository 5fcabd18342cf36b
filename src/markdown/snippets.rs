//! Fenced code snippet extraction.
//!
//! Snippets in skill documents are illustrative, never executed. Only the
//! language tag and size are recorded, for display and coverage summaries.

/// A fenced code block in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnippet {
    /// Language tag from the fence info string, lowercased
    pub language: Option<String>,
    /// 1-based line number of the opening fence
    pub line: usize,
    /// Number of lines between the fences
    pub lines: usize,
}

/// Extract fenced code snippets from Markdown text.
pub fn extract_snippets(text: &str, first_line: usize) -> Vec<CodeSnippet> {
    let mut snippets = Vec::new();
    let mut open: Option<(usize, Option<String>, usize)> = None;

    for (offset, line) in text.lines().enumerate() {
        let trimmed = line.trim_start();
        let is_fence = trimmed.starts_with("```") || trimmed.starts_with("~~~");

        if is_fence {
            if let Some((line_number, language, lines)) = open.take() {
                snippets.push(CodeSnippet {
                    language,
                    line: line_number,
                    lines,
                });
            } else {
                let info = trimmed.trim_start_matches(['`', '~']).trim();
                let language = info
                    .split_whitespace()
                    .next()
                    .map(str::to_lowercase)
                    .filter(|l| !l.is_empty());
                open = Some((first_line + offset, language, 0));
            }
        } else if let Some((_, _, lines)) = &mut open {
            *lines += 1;
        }
    }

    snippets
}

/// Summarize snippet languages, e.g. `"sql, typescript"`.
pub fn language_summary(snippets: &[CodeSnippet]) -> Option<String> {
    let mut languages: Vec<&str> = snippets
        .iter()
        .filter_map(|s| s.language.as_deref())
        .collect();
    languages.sort_unstable();
    languages.dedup();

    if languages.is_empty() {
        None
    } else {
        Some(languages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_snippets() {
        let text = "intro\n```sql\nSELECT 1;\nSELECT 2;\n```\nmiddle\n```ts\nlet x = 1;\n```\n";
        let snippets = extract_snippets(text, 1);
        assert_eq!(snippets.len(), 2);
        assert_eq!(snippets[0].language.as_deref(), Some("sql"));
        assert_eq!(snippets[0].line, 2);
        assert_eq!(snippets[0].lines, 2);
        assert_eq!(snippets[1].language.as_deref(), Some("ts"));
    }

    #[test]
    fn test_untagged_fence() {
        let snippets = extract_snippets("```\nplain\n```\n", 1);
        assert_eq!(snippets.len(), 1);
        assert!(snippets[0].language.is_none());
    }

    #[test]
    fn test_unclosed_fence_dropped() {
        let snippets = extract_snippets("```sql\nSELECT 1;\n", 1);
        assert!(snippets.is_empty());
    }

    #[test]
    fn test_language_summary_sorted_unique() {
        let text = "```ts\na\n```\n```sql\nb\n```\n```ts\nc\n```\n";
        let snippets = extract_snippets(text, 1);
        assert_eq!(language_summary(&snippets).as_deref(), Some("sql, ts"));
    }

    #[test]
    fn test_language_summary_empty() {
        assert!(language_summary(&[]).is_none());
        let untagged = extract_snippets("```\nx\n```\n", 1);
        assert!(language_summary(&untagged).is_none());
    }
}

//! Parse YAML frontmatter blocks from skill documents.

use std::collections::BTreeMap;

use serde_yaml::Value;

/// Frontmatter state of a document.
///
/// Absence and malformed YAML are kept distinct: several corpora ship skill
/// files without any frontmatter block, and checks report that differently
/// from YAML that fails to parse.
#[derive(Debug, Clone)]
pub enum Frontmatter {
    /// No frontmatter block (no leading `---` delimiter pair)
    Absent,
    /// Delimiters present but the content is not a valid YAML mapping
    Malformed { reason: String },
    /// Parsed YAML value (a mapping, or null for an empty block)
    Parsed(Value),
}

/// A document split into frontmatter and body
#[derive(Debug, Clone)]
pub struct SplitDocument {
    pub frontmatter: Frontmatter,
    pub body: String,
    /// 1-based line number of the first body line in the original file
    pub body_line: usize,
}

/// Split content into optional YAML frontmatter (between the first `---`
/// line and the next `---` line) and body. Content without a leading
/// delimiter pair is all body.
pub fn split_document(content: &str) -> SplitDocument {
    let lines: Vec<&str> = content.lines().collect();
    let absent = || SplitDocument {
        frontmatter: Frontmatter::Absent,
        body: content.to_string(),
        body_line: 1,
    };

    if lines.len() < 2 || lines[0].trim() != "---" {
        return absent();
    }
    let Some(end_idx) = lines[1..].iter().position(|l| l.trim() == "---") else {
        // Opening delimiter without a closing one reads as a horizontal rule
        return absent();
    };
    let end_idx = end_idx + 1;
    let frontmatter_str = lines[1..end_idx].join("\n");
    let body = lines[end_idx + 1..].join("\n");
    let body_line = end_idx + 2;

    let frontmatter = match serde_yaml::from_str::<Value>(&frontmatter_str) {
        Err(e) => Frontmatter::Malformed {
            reason: e.to_string(),
        },
        Ok(value) if value.as_mapping().is_none() && !value.is_null() => Frontmatter::Malformed {
            reason: "frontmatter is not a key-value mapping".to_string(),
        },
        Ok(value) => Frontmatter::Parsed(value),
    };

    SplitDocument {
        frontmatter,
        body,
        body_line,
    }
}

/// Get a string value from a frontmatter Value by key (top-level).
pub fn get_str(value: &Value, key: &str) -> Option<String> {
    let mapping = value.as_mapping()?;
    let v = mapping.get(Value::String(key.to_string()))?;
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Metadata keys observed in SKILL.md frontmatter.
///
/// All fields are optional at parse time; checks decide what absence means.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct SkillFrontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
    #[serde(rename = "frameworkVersions")]
    pub framework_versions: BTreeMap<String, String>,
}

impl SkillFrontmatter {
    /// Extract known metadata keys from a parsed frontmatter value.
    ///
    /// Unknown keys are ignored. Scalar values are coerced to strings so
    /// unquoted versions (`version: 1.0`) and dates survive.
    pub fn from_value(value: &Value) -> Self {
        let framework_versions = value
            .as_mapping()
            .and_then(|m| m.get(Value::String("frameworkVersions".to_string())))
            .and_then(Value::as_mapping)
            .map(|versions| {
                versions
                    .iter()
                    .filter_map(|(k, v)| {
                        let key = k.as_str()?.to_string();
                        let version = match v {
                            Value::String(s) => s.clone(),
                            Value::Number(n) => n.to_string(),
                            _ => return None,
                        };
                        Some((key, version))
                    })
                    .collect()
            })
            .unwrap_or_default();

        SkillFrontmatter {
            name: get_str(value, "name"),
            description: get_str(value, "description"),
            version: get_str(value, "version"),
            last_updated: get_str(value, "lastUpdated"),
            framework_versions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_no_frontmatter() {
        let content = "just body\nno delimiters";
        let doc = split_document(content);
        assert!(matches!(doc.frontmatter, Frontmatter::Absent));
        assert_eq!(doc.body, content);
        assert_eq!(doc.body_line, 1);
    }

    #[test]
    fn split_unclosed_delimiter_is_absent() {
        let doc = split_document("---\nname: dangling");
        assert!(matches!(doc.frontmatter, Frontmatter::Absent));
    }

    #[test]
    fn test_split_frontmatter_and_body() {
        let content = "---\ndescription: hello\n---\n\nbody here";
        let doc = split_document(content);
        let Frontmatter::Parsed(value) = &doc.frontmatter else {
            panic!("Should parse frontmatter");
        };
        assert_eq!(get_str(value, "description").as_deref(), Some("hello"));
        assert_eq!(doc.body.trim(), "body here");
        assert_eq!(doc.body_line, 4);
    }

    #[test]
    fn split_malformed_yaml() {
        let content = "---\nname: [unclosed\n---\nbody";
        let doc = split_document(content);
        assert!(matches!(doc.frontmatter, Frontmatter::Malformed { .. }));
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn split_non_mapping_frontmatter() {
        let content = "---\n- a\n- b\n---\nbody";
        let doc = split_document(content);
        let Frontmatter::Malformed { reason } = &doc.frontmatter else {
            panic!("Should flag non-mapping frontmatter");
        };
        assert!(reason.contains("key-value"));
    }

    #[test]
    fn test_skill_frontmatter_from_value() {
        let content = "---\nname: redis-patterns\ndescription: Redis usage patterns\nversion: 1.2.0\nlastUpdated: 2024-05-01\nframeworkVersions:\n  redis: \"7.2\"\n  node: 20\n---\n";
        let doc = split_document(content);
        let Frontmatter::Parsed(value) = &doc.frontmatter else {
            panic!("Should parse frontmatter");
        };
        let meta = SkillFrontmatter::from_value(value);
        assert_eq!(meta.name.as_deref(), Some("redis-patterns"));
        assert_eq!(meta.description.as_deref(), Some("Redis usage patterns"));
        assert_eq!(meta.version.as_deref(), Some("1.2.0"));
        assert_eq!(meta.last_updated.as_deref(), Some("2024-05-01"));
        assert_eq!(meta.framework_versions.get("redis").map(String::as_str), Some("7.2"));
        assert_eq!(meta.framework_versions.get("node").map(String::as_str), Some("20"));
    }

    #[test]
    fn test_skill_frontmatter_unquoted_version() {
        // Unquoted numeric scalars must not drop out of the metadata
        let content = "---\nname: s\nversion: 2\n---\n";
        let doc = split_document(content);
        let Frontmatter::Parsed(value) = &doc.frontmatter else {
            panic!("Should parse frontmatter");
        };
        let meta = SkillFrontmatter::from_value(value);
        assert_eq!(meta.version.as_deref(), Some("2"));
    }

    #[test]
    fn test_empty_frontmatter_block() {
        let doc = split_document("---\n---\nbody");
        let Frontmatter::Parsed(value) = &doc.frontmatter else {
            panic!("Empty block should parse as null");
        };
        let meta = SkillFrontmatter::from_value(value);
        assert!(meta.name.is_none());
        assert!(meta.description.is_none());
    }
}

//! Markdown conventions used by skill corpora
//!
//! Skill documents are plain Markdown with three lightweight conventions on
//! top: YAML frontmatter, relative links between documents, and a navigation
//! table in the skill index. Parsing here is line-oriented and lossless;
//! nothing is rendered.

pub mod frontmatter;
pub mod links;
pub mod nav;
pub mod snippets;

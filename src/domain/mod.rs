//! Skill corpus domain types
//!
//! Contains domain objects for skill bundles, their resource documents,
//! and agent/command prompt files.

pub mod bundle;
pub mod prompt;
pub mod resource;

pub use bundle::{IndexFrontmatter, ResourceCounts, SkillBundle};
pub use prompt::{PromptFile, PromptKind};
pub use resource::ResourceDoc;

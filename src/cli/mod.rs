//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - check: Check command arguments
//! - list: List command arguments
//! - show: Show command arguments
//! - find: Find command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod find;
pub mod list;
pub mod show;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use find::FindArgs;
pub use list::ListArgs;
pub use show::ShowArgs;

/// Skillcheck - skill documentation checker
///
/// Discover, navigate, and structurally validate AI assistant skill documentation.
#[derive(Parser, Debug)]
#[command(
    name = "skillcheck",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Structural checker and navigator for AI assistant skill documentation",
    long_about = "Skillcheck operates on repositories that keep AI assistant skill documentation \
                  under .claude/skills/ (one SKILL.md index plus resources/ per skill). It verifies \
                  link integrity, frontmatter metadata, and name uniqueness, and answers navigation \
                  queries against the skill index tables.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skillcheck check                        \x1b[90m# Verify link and metadata integrity\x1b[0m\n   \
                  skillcheck check --skill 'postgres-*'  \x1b[90m# Check matching skills only\x1b[0m\n   \
                  skillcheck list --detailed              \x1b[90m# List skills with resources\x1b[0m\n   \
                  skillcheck show redis-patterns          \x1b[90m# Show one skill bundle\x1b[0m\n   \
                  skillcheck find \"window functions\"      \x1b[90m# Query navigation tables\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Corpus root directory (defaults to the nearest ancestor containing .claude/skills)
    #[arg(long, short = 'r', global = true, env = "SKILLCHECK_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify link integrity and frontmatter metadata
    Check(CheckArgs),

    /// List discovered skill bundles
    List(ListArgs),

    /// Show skill bundle information
    Show(ShowArgs),

    /// Query the navigation tables across skills
    Find(FindArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

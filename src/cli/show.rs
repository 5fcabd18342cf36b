use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a skill bundle:\n    skillcheck show redis-patterns\n\n\
                  Pick a skill interactively:\n    skillcheck show")]
pub struct ShowArgs {
    /// Skill name (interactive selection when omitted)
    pub name: Option<String>,
}

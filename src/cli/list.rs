use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all discovered skills:\n    skillcheck list\n\n\
                  Show resources and framework versions:\n    skillcheck list --detailed\n\n\
                  Emit machine-readable output:\n    skillcheck list --json")]
pub struct ListArgs {
    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,

    /// Output the skill list as JSON
    #[arg(long)]
    pub json: bool,
}

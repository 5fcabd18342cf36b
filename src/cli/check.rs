use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check the whole corpus:\n    skillcheck check\n\n\
                  Treat warnings as failures:\n    skillcheck check --strict\n\n\
                  Check matching skills only:\n    skillcheck check --skill 'postgres-*'\n\n\
                  Emit a machine-readable report:\n    skillcheck check --json")]
pub struct CheckArgs {
    /// Only check skills whose name matches this glob pattern
    #[arg(long)]
    pub skill: Option<String>,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

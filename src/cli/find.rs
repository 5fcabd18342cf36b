use clap::Parser;

/// Arguments for the find command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Find documents about window functions:\n    skillcheck find 'window functions'\n\n\
                  Queries match navigation table intents and skill descriptions,\n  \
                  case-insensitively.")]
pub struct FindArgs {
    /// Query text matched against navigation intents and descriptions
    pub query: String,
}

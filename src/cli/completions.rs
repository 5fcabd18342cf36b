use clap::Parser;

/// Arguments for the completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    skillcheck completions bash\n\n\
                  Supported shells: bash, elvish, fish, powershell, zsh")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: String,
}

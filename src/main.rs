//! Skillcheck - skill documentation checker
//!
//! A command line tool for discovering, navigating, and structurally
//! validating corpora of AI assistant skill documentation
//! (`.claude/skills/<skill>/SKILL.md` bundles and their resource files).

use clap::Parser;

mod checks;
mod cli;
mod commands;
mod corpus;
mod domain;
mod error;
mod markdown;
mod path_utils;
mod progress;
mod report;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(cli.root, args),
        Commands::List(args) => commands::list::run(cli.root, args),
        Commands::Show(args) => commands::show::run(cli.root, args),
        Commands::Find(args) => commands::find::run(cli.root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! dirsense CLI - Describe folders with a language model

use anyhow::Result;
use clap::Parser;
use dirsense_cli::commands;
use dirsense_cli::logging::setup_logging;
use dirsense_cli::{Cli, Commands, MemoryCommands};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        None => commands::describe::run(&cli.settings, None, false, true).await,
        Some(Commands::Describe {
            path,
            refresh,
            reason,
        }) => commands::describe::run(&cli.settings, path, refresh, reason).await,
        Some(Commands::Memory { command }) => match command {
            MemoryCommands::List => commands::memory::list(&cli.settings),
            MemoryCommands::Show { path } => commands::memory::show(&cli.settings, &path),
        },
    }
}

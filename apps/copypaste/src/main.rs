//! CopyPastePro shell.
//!
//! The `copypaste` command removes the injected integrity notice from pasted
//! text and can ask Gemini to answer what remains.

use anyhow::Result;
use clap::{Parser, Subcommand};
use copypaste_config::LoadedCopyPasteConfig;

mod commands;
mod input;
mod interactive;
mod logging;
mod pipeline;
mod web;

#[derive(Parser)]
#[command(name = "copypaste")]
#[command(about = "Clean pasted questions and get answers from Gemini")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove the injected notice and print the cleaned text
    Clean(commands::clean::CleanArgs),

    /// Clean the text, then ask Gemini to answer it
    Answer(commands::answer::AnswerArgs),

    /// List Gemini models available to your key
    Models(commands::models::ModelsArgs),

    /// Serve the paste form over HTTP
    Serve(commands::serve::ServeArgs),

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = copypaste_config::load_merged(&std::env::current_dir()?);
    logging::init(
        cli.verbose,
        loaded.as_ref().ok().map(|l| &l.config.logging),
    );

    match cli.command {
        Commands::Config { command } => commands::config::execute(command),
        Commands::Clean(args) => commands::clean::execute(&args, &ready(loaded)?),
        Commands::Answer(args) => commands::answer::execute(args, &ready(loaded)?).await,
        Commands::Models(args) => commands::models::execute(args, &ready(loaded)?).await,
        Commands::Serve(args) => commands::serve::execute(args, &ready(loaded)?).await,
    }
}

/// Surface the load error or the advisory warnings before running a command.
fn ready(loaded: Result<LoadedCopyPasteConfig>) -> Result<LoadedCopyPasteConfig> {
    let loaded = loaded?;
    for warning in &loaded.warnings {
        tracing::warn!("{warning}");
    }
    Ok(loaded)
}

//! Configuration management commands.
//!
//! Provides init, show, schema, and validate subcommands for managing
//! `copypaste.json` configuration files.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use copypaste_config::{
    CopyPasteConfig, CredentialContext, LoadedCopyPasteConfig,
    loader::{global_config_path, load_merged, local_config_path},
    writer::write_pretty_json_atomic,
};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init {
        /// Create global config instead of local
        #[arg(long)]
        global: bool,

        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the merged configuration
    Show {
        /// Output as raw JSON (no formatting)
        #[arg(long)]
        json: bool,

        /// Path to use as local directory (defaults to current dir)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Output the JSON Schema for copypaste.json
    Schema,

    /// Validate configuration and show warnings
    Validate {
        /// Path to use as local directory (defaults to current dir)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

pub fn execute(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Init { global, force } => cmd_init(global, force),
        ConfigCommands::Show { json, path } => cmd_show(json, path),
        ConfigCommands::Schema => cmd_schema(),
        ConfigCommands::Validate { path } => cmd_validate(path),
    }
}

fn cmd_init(global: bool, force: bool) -> Result<()> {
    let path = if global {
        global_config_path()?
    } else {
        local_config_path(&std::env::current_dir()?)
    };

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}\nUse --force to overwrite",
            path.display()
        );
    }

    write_pretty_json_atomic(&path, &serde_json::to_value(CopyPasteConfig::default())?)?;

    println!(
        "{} Created {}",
        "OK".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}

fn cmd_show(json_output: bool, path: Option<PathBuf>) -> Result<()> {
    let dir = path.map_or_else(std::env::current_dir, Ok)?;
    let loaded = load_merged(&dir)?;

    for warning in &loaded.warnings {
        eprintln!("{} {}", "WARN".yellow(), warning);
    }
    eprintln!("{} {}", "KEY".blue(), key_status(&loaded));

    if json_output {
        println!("{}", serde_json::to_string(&loaded.config)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&loaded.config)?);
    }

    Ok(())
}

fn cmd_schema() -> Result<()> {
    println!("{}", copypaste_config::schema_json_pretty()?);
    Ok(())
}

fn cmd_validate(path: Option<PathBuf>) -> Result<()> {
    let dir = path.map_or_else(std::env::current_dir, Ok)?;
    let loaded = load_merged(&dir)?;

    if loaded.warnings.is_empty() {
        println!("{} Configuration is valid", "OK".green());
    } else {
        println!(
            "{} Configuration has {} warning(s):",
            "WARN".yellow(),
            loaded.warnings.len()
        );
        for w in &loaded.warnings {
            println!("  - {w}");
        }
    }

    println!("\nConfig files:");
    println!("  Global:  {}", loaded.paths.global.display());
    println!("  Local:   {}", loaded.paths.local.display());
    println!("  Secrets: {}", loaded.paths.secrets.display());
    println!("\nAPI key: {}", key_status(&loaded));

    Ok(())
}

fn key_status(loaded: &LoadedCopyPasteConfig) -> String {
    CredentialContext::new(&loaded.paths.secrets)
        .resolve_non_interactive()
        .map_or_else(
            || "not found (you will be prompted)".to_string(),
            |cred| format!("found in {}", cred.source),
        )
}

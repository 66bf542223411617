//! Where pasted text comes from.

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Read text from a file (`-` for stdin)
    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Use this text directly
    #[arg(short, long)]
    pub text: Option<String>,
}

impl InputArgs {
    /// Read the pasted text. Defaults to stdin.
    pub fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        match self.input.as_deref() {
            Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            _ => read_stdin(),
        }
    }

    /// Whether the text is coming from stdin, which rules out prompting on it.
    pub fn uses_stdin(&self) -> bool {
        self.text.is_none()
            && self
                .input
                .as_deref()
                .is_none_or(|p| p == Path::new("-"))
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

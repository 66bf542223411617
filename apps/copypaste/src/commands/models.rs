use anyhow::Result;
use clap::Args;
use copypaste_config::{KeyPrompt, LoadedCopyPasteConfig, NoPrompt};
use gemini_async::types::Model;

use crate::interactive::TerminalPrompt;
use crate::pipeline::gemini_client;

#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Include models that cannot generate content
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Never prompt for an API key
    #[arg(long)]
    pub no_prompt: bool,
}

pub async fn execute(args: ModelsArgs, loaded: &LoadedCopyPasteConfig) -> Result<()> {
    let mut prompt: Box<dyn KeyPrompt> = if args.no_prompt {
        Box::new(NoPrompt)
    } else {
        Box::new(TerminalPrompt)
    };
    let cred = super::require_key(loaded, prompt.as_mut())?;
    let client = gemini_client(&loaded.config, &cred.key);

    let models: Vec<Model> = client
        .models()
        .list_all()
        .await?
        .into_iter()
        .filter(|m| args.all || m.supports_generate_content())
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    for m in &models {
        match &m.display_name {
            Some(name) => println!("{}\t{name}", m.id()),
            None => println!("{}", m.id()),
        }
    }
    Ok(())
}

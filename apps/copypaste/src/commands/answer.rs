use anyhow::Result;
use clap::Args;
use colored::Colorize;
use copypaste_config::{KeyPrompt, LoadedCopyPasteConfig, NoPrompt};

use crate::input::InputArgs;
use crate::interactive::{TerminalPrompt, pick_model};
use crate::pipeline::{PipelineError, build_scrubber, clean_input, gemini_client, generate_answer};

#[derive(Args, Debug)]
pub struct AnswerArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Gemini model (defaults to models.default_model)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Never prompt for an API key
    #[arg(long)]
    pub no_prompt: bool,

    /// Choose the model interactively
    #[arg(long, conflicts_with = "model")]
    pub pick_model: bool,
}

pub async fn execute(args: AnswerArgs, loaded: &LoadedCopyPasteConfig) -> Result<()> {
    let raw = args.input.read()?;
    let scrubber = build_scrubber(&loaded.config)?;
    let report = clean_input(&scrubber, &raw)?;

    println!("{}", "Cleaned Text".bold());
    println!("{}\n", report.text);

    let mut prompt: Box<dyn KeyPrompt> = if args.no_prompt || args.input.uses_stdin() {
        Box::new(NoPrompt)
    } else {
        Box::new(TerminalPrompt)
    };
    let cred = super::require_key(loaded, prompt.as_mut())?;
    let client = gemini_client(&loaded.config, &cred.key);

    let model = if args.pick_model {
        let models: Vec<_> = client
            .models()
            .list_all()
            .await?
            .into_iter()
            .filter(gemini_async::types::Model::supports_generate_content)
            .collect();
        pick_model(&models, &loaded.config.models.default_model)?
    } else {
        args.model
            .unwrap_or_else(|| loaded.config.models.default_model.clone())
    };

    let answer = generate_answer(&client, &model, &loaded.config.prompt.template, &report.text)
        .await
        .map_err(|e| match e {
            PipelineError::Gemini(g) if g.is_auth_error() => anyhow::anyhow!(
                "Gemini rejected the API key from the {}: {g}",
                cred.source
            ),
            PipelineError::Gemini(g) => anyhow::anyhow!("Error generating answer: {g}"),
            other => other.into(),
        })?;

    println!("{}", "Answer".bold());
    println!("{answer}");
    Ok(())
}

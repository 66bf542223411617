use anyhow::Result;
use clap::Args;
use copypaste_config::LoadedCopyPasteConfig;

use crate::input::InputArgs;
use crate::pipeline::{build_scrubber, clean_input};

#[derive(Args, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn execute(args: &CleanArgs, loaded: &LoadedCopyPasteConfig) -> Result<()> {
    let raw = args.input.read()?;
    let scrubber = build_scrubber(&loaded.config)?;
    let report = clean_input(&scrubber, &raw)?;
    println!("{}", report.text);
    Ok(())
}

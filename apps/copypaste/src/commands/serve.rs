use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use copypaste_config::{CredentialContext, LoadedCopyPasteConfig};
use std::net::SocketAddr;

use crate::pipeline::build_scrubber;
use crate::web::{AppState, router};

/// Serve the paste form.
///
/// The server keeps one key session for the whole process. A key entered in
/// the form is used for every client until another key replaces it, so bind
/// to a loopback address unless everyone who can reach the server may share
/// that key.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "COPYPASTE_ADDR", default_value = "127.0.0.1:8501")]
    pub addr: SocketAddr,
}

pub async fn execute(args: ServeArgs, loaded: &LoadedCopyPasteConfig) -> Result<()> {
    let state = AppState::new(
        build_scrubber(&loaded.config)?,
        loaded.config.clone(),
        CredentialContext::new(&loaded.paths.secrets),
    );

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("Failed to bind {}", args.addr))?;
    let local = listener.local_addr()?;
    eprintln!("{} Listening on {}", "OK".green(), format!("http://{local}").cyan());

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

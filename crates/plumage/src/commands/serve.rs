//! Serve command — HTTP report API.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::{info, instrument};

use plumage_core::config::Config;

use super::build_analyzer;
use crate::api;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides config).
    #[arg(long)]
    pub port: Option<u16>,
}

/// Serve the report API until interrupted.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    args: ServeArgs,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let port = args
        .port
        .or(config.port)
        .unwrap_or(plumage_core::DEFAULT_PORT);

    let analyzer = Arc::new(build_analyzer(config)?);
    let router = api::router(analyzer, max_input_bytes);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;
    info!(port, "serving report API");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

/// Resolve on ctrl-c so axum can drain in-flight requests.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown requested");
}

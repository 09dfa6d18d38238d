// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use std::sync::Arc;
use the_asset_forge::api;
use the_asset_forge::backends::stub::StubEngine;
use the_asset_forge::config::{load_and_validate_config, Config, RuntimeBuilder};
use the_asset_forge::engine::RequestLifecycle;
use the_asset_forge::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 || args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [config.yaml|config.toml]", args[0]);
        eprintln!("Example: {} configs/forge.yaml", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => Config::default(),
    };

    init_tracing(&config.logging)
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    let engine = Arc::new(StubEngine::new());
    let registry = RuntimeBuilder::from_config(&config, engine)?;
    let lifecycle = RequestLifecycle::new(Arc::new(registry), &config.server.upload_dir)
        .await
        .context("preparing upload directory")?;

    let app = api::router(lifecycle, config.server.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("binding {}", config.server.bind))?;
    tracing::info!(
        bind = %config.server.bind,
        upload_dir = %config.server.upload_dir.display(),
        max_upload_bytes = config.server.max_upload_bytes,
        "Server ready and accepting connections"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down gracefully"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C"),
    }
}

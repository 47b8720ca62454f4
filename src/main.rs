// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use meshctl::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the per-namespace report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    cli.run(&mut stdout).await?;

    Ok(())
}

//! Heatmaps service CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use heatmap_config::load_config;
use heatmap_monitor::setup_logging;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::InitConfig = cli.command {
        return cli::commands::init::run().await;
    }

    let config = load_config(&cli.config)
        .with_context(|| format!("Configuration error in {:?}", cli.config))?;

    // Setup logging
    let log_level = cli
        .log_level
        .map(|level| level.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let json = cli.json_logs || config.logging.is_json();
    let _log_guard = setup_logging(&log_level, json, config.logging.file.as_deref().map(Path::new));

    // Execute command
    match cli.command {
        Commands::Serve(args) => cli::commands::serve::run(args, &config).await,
        Commands::Dates(args) => cli::commands::dates::run(args, &config).await,
        Commands::Periods => cli::commands::periods::run(&config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&config, &cli.config).await,
        Commands::InitConfig => cli::commands::init::run().await,
    }
}

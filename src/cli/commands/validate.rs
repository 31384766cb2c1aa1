//! Validate configuration command.

use anyhow::Result;
use heatmap_config::AppConfig;
use std::path::Path;

pub async fn run(config: &AppConfig, config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Bind address: {}", config.server.bind_address());
    println!("Time periods: {}", config.heatmaps.time_periods.len());
    println!("Indexes: {}", config.heatmaps.indexes.len());
    println!("Refresh interval: {}s", config.heatmaps.refresh_interval_secs);

    match &config.heatmaps.snapshot_file {
        Some(path) if !path.exists() => {
            println!("Warning: snapshot file {:?} does not exist yet", path)
        }
        Some(path) => println!("Snapshot file: {:?}", path),
        None => println!("Warning: no snapshot file configured, /heatmaps will report missing data"),
    }
    if let Some(path) = &config.heatmaps.tickers_file {
        println!("Tickers file: {:?}", path);
    }

    Ok(())
}

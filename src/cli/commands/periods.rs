//! List supported time periods and indexes command.

use anyhow::Result;
use heatmap_config::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let catalog = config.heatmaps.catalog();

    println!("Supported Time Periods");
    println!("═══════════════════════════════════════════════════════════");
    for (token, days) in catalog.time_periods() {
        println!("  {:<12} {:>5} days", token, days);
    }
    println!();

    println!("Supported Indexes");
    println!("═══════════════════════════════════════════════════════════");
    for index in catalog.indexes() {
        println!("  {}", index);
    }
    println!();
    println!("Request a snapshot with GET /heatmaps/<period>.");

    Ok(())
}

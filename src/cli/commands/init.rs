//! Print default configuration command.

use anyhow::Result;
use heatmap_config::{to_toml, AppConfig};

pub async fn run() -> Result<()> {
    let rendered = to_toml(&AppConfig::default())?;
    print!("{}", rendered);
    Ok(())
}

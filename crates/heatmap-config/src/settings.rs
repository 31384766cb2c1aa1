//! Configuration structures.

use heatmap_core::types::{Catalog, DEFAULT_INDEXES, DEFAULT_TIME_PERIODS};
use heatmap_data::{PopulationConfig, DEFAULT_REFRESH_INTERVAL_SECS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub heatmaps: HeatmapSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "heatmaps".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Check if JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// One supported time period.
///
/// Tokens live in values rather than table keys so their case survives the
/// config loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriodSetting {
    pub token: String,
    pub days: u32,
}

/// Supported enumerations and snapshot sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapSettings {
    /// Supported market index tokens.
    pub indexes: Vec<String>,
    /// Seconds between snapshot refreshes.
    pub refresh_interval_secs: u64,
    /// JSON file holding the heatmap table.
    pub snapshot_file: Option<PathBuf>,
    /// JSON file holding the tickers table.
    pub tickers_file: Option<PathBuf>,
    /// Time period tokens with their lookback in days.
    pub time_periods: Vec<TimePeriodSetting>,
}

impl Default for HeatmapSettings {
    fn default() -> Self {
        Self {
            indexes: DEFAULT_INDEXES.iter().map(|i| i.to_string()).collect(),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            snapshot_file: None,
            tickers_file: None,
            time_periods: DEFAULT_TIME_PERIODS
                .iter()
                .map(|(token, days)| TimePeriodSetting {
                    token: token.to_string(),
                    days: *days,
                })
                .collect(),
        }
    }
}

impl HeatmapSettings {
    /// Build the immutable catalog.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(
            self.time_periods
                .iter()
                .map(|period| (period.token.clone(), period.days)),
            self.indexes.iter().cloned(),
        )
    }

    /// Scheduler settings.
    pub fn population_config(&self) -> PopulationConfig {
        PopulationConfig {
            refresh_interval: Duration::from_secs(self.refresh_interval_secs),
        }
    }
}

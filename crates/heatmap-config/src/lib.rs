//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, HeatmapSettings, LoggingConfig, ServerSettings, TimePeriodSetting,
};

use config::{Config, ConfigError, Environment, File};
use std::collections::HashSet;
use std::path::Path;

/// Load configuration from file and environment.
///
/// Scalar keys and `heatmaps.indexes` can be overridden from the environment
/// with the `HEATMAP` prefix and `__` between levels, e.g.
/// `HEATMAP__SERVER__PORT=9000` or `HEATMAP__HEATMAPS__INDEXES=SP500,DAX`.
/// Time periods are only read from the file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    load_with_env(path, env_source())
}

fn env_source() -> Environment {
    Environment::with_prefix("HEATMAP")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("heatmaps.indexes")
}

fn load_with_env(path: &Path, env: Environment) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(env)
        .build()?;

    let config: AppConfig = config.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

/// Check settings the deserializer cannot.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let heatmaps = &config.heatmaps;

    if heatmaps.time_periods.is_empty() {
        return Err(ConfigError::Message(
            "heatmaps.time_periods must not be empty".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for period in &heatmaps.time_periods {
        if period.token.is_empty() {
            return Err(ConfigError::Message(
                "heatmaps.time_periods contains an empty token".to_string(),
            ));
        }
        if !seen.insert(period.token.as_str()) {
            return Err(ConfigError::Message(format!(
                "heatmaps.time_periods lists {} twice",
                period.token
            )));
        }
    }
    if heatmaps.indexes.iter().any(|index| index.is_empty()) {
        return Err(ConfigError::Message(
            "heatmaps.indexes contains an empty token".to_string(),
        ));
    }
    if heatmaps.refresh_interval_secs == 0 {
        return Err(ConfigError::Message(
            "heatmaps.refresh_interval_secs must be positive".to_string(),
        ));
    }

    Ok(())
}

/// Render a configuration as TOML.
pub fn to_toml(config: &AppConfig) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;
    use heatmap_core::Validator;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "heatmap-config-{}-{}.toml",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();

        assert!(validate(&config).is_ok());
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");

        let catalog = config.heatmaps.catalog();
        assert_eq!(catalog.days_offset("1week"), Some(7));
        assert!(catalog.has_index("SP500"));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let mut config = AppConfig::default();
        config.heatmaps.time_periods.clear();

        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_refresh_interval() {
        let mut config = AppConfig::default();
        config.heatmaps.refresh_interval_secs = 0;

        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_load_config_file() {
        let path = write_config(
            "load",
            r#"
[server]
host = "0.0.0.0"
port = 9000

[heatmaps]
indexes = ["DAX"]
refresh_interval_secs = 60
snapshot_file = "data/heatmaps.json"

[[heatmaps.time_periods]]
token = "1w"
days = 7

[[heatmaps.time_periods]]
token = "1m"
days = 30
"#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.app.name, "heatmaps");

        let catalog = config.heatmaps.catalog();
        assert_eq!(catalog.days_offset("1w"), Some(7));
        assert_eq!(catalog.days_offset("1week"), None);
        assert!(catalog.has_index("DAX"));
        assert_eq!(
            config.heatmaps.population_config().refresh_interval.as_secs(),
            60
        );

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_time_period_tokens_keep_their_case() {
        let path = write_config(
            "case",
            r#"
[[heatmaps.time_periods]]
token = "1W"
days = 7

[[heatmaps.time_periods]]
token = "YTD"
days = 200
"#,
        );

        let catalog = Arc::new(load_config(&path).unwrap().heatmaps.catalog());
        let validator = Validator::new(catalog.clone());

        assert_eq!(catalog.days_offset("1W"), Some(7));
        assert!(validator.validate_time_period("1W").is_ok());
        assert!(validator.validate_time_period("YTD").is_ok());
        assert!(validator.validate_time_period("1w").is_err());
        assert!(validator.validate_time_period("ytd").is_err());

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_rejects_duplicate_time_period() {
        let mut config = AppConfig::default();
        let first = config.heatmaps.time_periods[0].clone();
        config.heatmaps.time_periods.push(first);

        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_env_overrides_index_list() {
        let path = write_config("env", "[server]\nport = 9000\n");
        let env = env_source().source(Some(Map::from([
            ("HEATMAP__HEATMAPS__INDEXES".to_string(), "SP500,DAX".to_string()),
            ("HEATMAP__SERVER__PORT".to_string(), "9100".to_string()),
        ])));

        let config = load_with_env(&path, env).unwrap();
        assert_eq!(config.heatmaps.indexes, vec!["SP500", "DAX"]);
        assert_eq!(config.server.port, 9100);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/heatmaps.toml")).is_err());
    }

    #[test]
    fn test_toml_output_loads_back() {
        let rendered = to_toml(&AppConfig::default()).unwrap();
        let path = write_config("roundtrip", &rendered);

        let config = load_config(&path).unwrap();
        assert_eq!(
            config.heatmaps.time_periods,
            AppConfig::default().heatmaps.time_periods
        );

        std::fs::remove_file(path).unwrap();
    }
}

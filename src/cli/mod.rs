//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "heatmaps")]
#[command(author, version, about = "Serves cached market heatmap snapshots")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "HEATMAP_CONFIG", default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server and the snapshot population task
    Serve(ServeArgs),
    /// Show the reference dates snapshots are computed against
    Dates(DatesArgs),
    /// List supported time periods and indexes
    Periods,
    /// Validate configuration
    ValidateConfig,
    /// Print a default configuration file
    InitConfig,
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Bind host (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Heatmap snapshot file (overrides heatmaps.snapshot_file)
    #[arg(long)]
    pub snapshot_file: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct DatesArgs {
    /// Only resolve this time period
    #[arg(short, long)]
    pub period: Option<String>,

    /// Resolve as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}

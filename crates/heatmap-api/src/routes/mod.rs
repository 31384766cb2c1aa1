//! HTTP routes.

pub mod health;
pub mod heatmaps;
pub mod tickers;

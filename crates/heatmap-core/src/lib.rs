//! Core types and logic for the heatmaps service.
//!
//! This crate provides the foundational building blocks including:
//! - Validated request tokens (time periods, market indexes)
//! - The catalog of supported time periods and indexes
//! - Date resolution for snapshot reference dates
//! - The error taxonomy shared by every layer

pub mod dates;
pub mod error;
pub mod traits;
pub mod types;
pub mod validation;

pub use dates::{format_for_storage, parse_storage_date, DateResolver, RefreshPlan};
pub use error::{DataError, ErrorKind, HeatmapError, HeatmapResult};
pub use traits::*;
pub use types::*;
pub use validation::Validator;

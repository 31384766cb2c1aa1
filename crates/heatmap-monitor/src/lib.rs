//! Logging and tracing setup.

mod logging;

pub use logging::{log_file_parts, setup_logging};
pub use tracing_appender::non_blocking::WorkerGuard;

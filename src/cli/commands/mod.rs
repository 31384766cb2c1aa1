//! CLI command implementations.

pub mod dates;
pub mod init;
pub mod periods;
pub mod serve;
pub mod validate;

//! Shared infrastructure: logging setup and build metadata

pub mod logging;
pub mod version;

//! Plugin configuration
//!
//! The user-facing configuration shape, default application, JSON loading
//! from the host's config file, and the JSON-Schema-subset validator used
//! by the `validate` subcommand.

pub(crate) mod error;
pub(crate) mod loader;
pub(crate) mod schema;
pub(crate) mod types;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, PLUGIN_KEY};
pub use schema::{validate_instance, SchemaViolation};
pub use types::{NotificationConfig, ResolvedConfig};

#[cfg(test)]
mod tests;

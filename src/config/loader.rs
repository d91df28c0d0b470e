//! JSON config loading
//!
//! The host stores plugin configuration as a JSON object keyed by plugin
//! name. We read the whole file and extract our section.

use std::path::Path;

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::types::NotificationConfig;

/// Key under which the host stores this plugin's configuration
pub const PLUGIN_KEY: &str = "warcraft-notify";

/// Load this plugin's configuration from the host's JSON config file.
///
/// A file without a `warcraft-notify` section is an error; a present but
/// empty section yields the all-`None` shape.
pub fn load_config(path: &Path) -> ConfigResult<NotificationConfig> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let root: serde_json::Value = serde_json::from_str(&raw)?;
    let section = root.get(PLUGIN_KEY).ok_or_else(|| ConfigError::MissingKey {
        key: PLUGIN_KEY.to_string(),
    })?;

    let config: NotificationConfig = serde_json::from_value(section.clone())?;
    log::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

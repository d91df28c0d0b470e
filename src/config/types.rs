//! Configuration shape and default application

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sounds::api::FactionFilter;

/// User-supplied configuration as it appears in the host's JSON config file.
///
/// All fields are optional; an empty object deserializes to three `None`s.
/// Defaults are applied by [`NotificationConfig::resolve`], never during
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NotificationConfig {
    /// Directory holding the downloaded sound files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sounds_dir: Option<PathBuf>,

    /// Faction filter for notification sounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faction: Option<FactionFilter>,

    /// Whether the sound's description line is appended to the toast message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_description_in_toast: Option<bool>,
}

/// Configuration with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub sounds_dir: PathBuf,
    pub faction: FactionFilter,
    pub show_description_in_toast: bool,
}

impl NotificationConfig {
    /// Apply documented defaults: faction `both`, platform data directory
    /// for sounds, toast description hidden.
    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            sounds_dir: self
                .sounds_dir
                .clone()
                .unwrap_or_else(default_sounds_dir),
            faction: self.faction.unwrap_or(FactionFilter::Both),
            show_description_in_toast: self.show_description_in_toast.unwrap_or(false),
        }
    }
}

/// Default sounds directory under the platform data dir.
pub fn default_sounds_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("warcraft-notify").join("sounds"))
        .unwrap_or_else(|| PathBuf::from(".warcraft-notify/sounds"))
}

//! The notification plugin
//!
//! Turns a session lifecycle event into a toast and a faction sound. Sound
//! selection round-robins over the configured faction's entry table; with
//! the `both` filter the faction itself alternates too, so both sides get
//! heard over a session.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::ResolvedConfig;
use crate::core::version::get_api_version;
use crate::notify::error::NotifyResult;
use crate::notify::event::{SessionEvent, SessionEventType};
use crate::notify::toast::{Toast, ToastVariant};
use crate::notify::traits::Host;
use crate::sounds::api::{entries, Faction, SoundEntry};

/// Plugin name as registered with the host
pub const PLUGIN_NAME: &str = "warcraft-notify";

pub struct NotificationPlugin {
    config: ResolvedConfig,
    cursor: AtomicUsize,
}

impl NotificationPlugin {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Compatibility check against the host's plugin API version.
    pub fn is_compatible(system_api_version: u32) -> bool {
        system_api_version >= get_api_version()
    }

    /// Handle one lifecycle event: show a toast, then play the matching
    /// faction sound if it has been downloaded. Both host calls are awaited
    /// once; no retry or timeout logic lives here.
    pub async fn handle_event(&self, event: &SessionEvent, host: &dyn Host) -> NotifyResult<()> {
        let tick = self.cursor.fetch_add(1, Ordering::Relaxed);
        let faction = self.pick_faction(tick);
        let entry = pick_entry(faction, tick);

        log::info!(
            "Session {} event {:?}: {} ({})",
            event.session_id,
            event.event_type,
            entry.filename,
            faction
        );

        let toast = self.build_toast(event, entry);
        host.show_toast(&toast).await?;

        let sound_path = self.local_sound_path(faction, entry);
        if sound_path.is_file() {
            host.play_sound(&sound_path).await?;
        } else {
            log::warn!(
                "Sound {} not present locally, run `warcraft-notify download` first",
                sound_path.display()
            );
        }

        Ok(())
    }

    fn pick_faction(&self, tick: usize) -> Faction {
        let sides = self.config.faction.factions();
        sides[tick % sides.len()]
    }

    fn build_toast(&self, event: &SessionEvent, entry: &SoundEntry) -> Toast {
        let (title, variant) = match event.event_type {
            SessionEventType::Started => ("Session started", ToastVariant::Info),
            SessionEventType::Idle => ("Session idle", ToastVariant::Info),
            SessionEventType::Completed => ("Session complete", ToastVariant::Success),
            SessionEventType::Error => ("Session error", ToastVariant::Error),
        };

        let mut message = event
            .message
            .clone()
            .unwrap_or_else(|| "Awaiting your orders.".to_string());
        if self.config.show_description_in_toast {
            message.push('\n');
            message.push_str(entry.description);
        }

        Toast::new(title.to_string(), message, variant)
    }

    /// Local path for a downloaded entry: `<sounds_dir>/<faction>/<filename>`,
    /// mirroring the downloader's layout.
    fn local_sound_path(&self, faction: Faction, entry: &SoundEntry) -> PathBuf {
        self.config
            .sounds_dir
            .join(faction.to_string())
            .join(entry.filename)
    }
}

fn pick_entry(faction: Faction, tick: usize) -> &'static SoundEntry {
    let table = entries(faction);
    &table[tick % table.len()]
}

//! Host capability trait
//!
//! The plugin host provides toast rendering and sound playback; the plugin
//! only ever calls these two capabilities, each as a single awaited call
//! with no retry or timeout logic on this side.

use std::path::Path;

use crate::notify::error::NotifyResult;
use crate::notify::toast::Toast;

#[async_trait::async_trait]
pub trait Host: Send + Sync {
    /// Render a transient toast notification
    async fn show_toast(&self, toast: &Toast) -> NotifyResult<()>;

    /// Play a local sound file
    async fn play_sound(&self, path: &Path) -> NotifyResult<()>;
}

//! Toast message shape
//!
//! Matches the host's `showToast` capability: title, message, variant and
//! display duration.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Default toast display duration in milliseconds
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[derive(clap::ValueEnum)]
pub enum ToastVariant {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
    /// Display duration in milliseconds
    pub duration: u64,
}

impl Toast {
    pub fn new(title: String, message: String, variant: ToastVariant) -> Self {
        Self {
            title,
            message,
            variant,
            duration: DEFAULT_TOAST_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }
}

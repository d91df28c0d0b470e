//! Public API for the notify module

pub use crate::notify::error::{NotifyError, NotifyResult};
pub use crate::notify::event::{SessionEvent, SessionEventType};
pub use crate::notify::host::{HttpHost, DEFAULT_HOST_ENDPOINT};
pub use crate::notify::plugin::{NotificationPlugin, PLUGIN_NAME};
pub use crate::notify::toast::{Toast, ToastVariant, DEFAULT_TOAST_DURATION_MS};
pub use crate::notify::traits::Host;

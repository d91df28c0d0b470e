//! Plugin entry point
//!
//! Session lifecycle events dispatched by the plugin host, the toast shape,
//! the host capability trait and the handler that turns an event into a
//! toast plus a faction sound.

// Internal modules - all access should go through api module
pub(crate) mod error;
pub(crate) mod event;
pub(crate) mod host;
pub(crate) mod plugin;
pub(crate) mod toast;
pub(crate) mod traits;

// Public API module - the only public interface for the notify module
pub mod api;

//! Faction sound data and the download-list builder
//!
//! Static tables of Warcraft unit sounds partitioned by faction, plus the
//! pure functions that turn them into downloadable records.

// Internal modules - all access should go through api module
pub(crate) mod builder;
pub(crate) mod catalog;
pub(crate) mod entries;
pub(crate) mod types;

// Public API module - the only public interface for the sounds module
pub mod api;

#[cfg(test)]
mod tests;

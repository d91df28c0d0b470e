pub mod app;
pub mod config;
pub mod core;
pub mod download;
pub mod glyphs;
pub mod notify;
pub mod sounds;

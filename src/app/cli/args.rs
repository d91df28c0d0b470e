//! Core CLI arguments structure
//!
//! Global flags cover configuration discovery and logging; everything else
//! lives on the subcommands.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::notify::api::{ToastVariant, DEFAULT_HOST_ENDPOINT};
use crate::sounds::api::{Faction, DEFAULT_ALLIANCE_BASE_URL};

#[derive(Parser, Debug, Clone)]
#[command(name = "warcraft-notify")]
#[command(about = "Warcraft faction notification sounds for CLI sessions")]
#[command(version)]
pub struct Args {
    /// Host configuration file (JSON, plugin section under "warcraft-notify")
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force color output on
    #[arg(short = 'g', long = "color", action = ArgAction::SetTrue)]
    pub color: bool,

    /// Force color output off
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Inspect the bundled sound tables
    Sounds {
        #[command(subcommand)]
        action: SoundsAction,
    },

    /// Download sound files into the local sounds directory
    Download {
        /// Base URL for alliance sounds (horde sounds come from a fixed mirror)
        #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_ALLIANCE_BASE_URL)]
        base_url: String,

        /// Restrict the download to one faction
        #[arg(long, value_enum, value_name = "FACTION")]
        faction: Option<Faction>,

        /// Destination directory (default: the configured sounds directory)
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
    },

    /// Render text as a pixel-art banner
    Banner {
        /// Text to render
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Validate a JSON example file against a JSON schema file
    Validate {
        /// Schema file
        #[arg(long, value_name = "FILE")]
        schema: PathBuf,

        /// Example file to check
        #[arg(long, value_name = "FILE")]
        example: PathBuf,
    },

    /// Send a test toast to the plugin host
    Toast {
        /// Host endpoint
        #[arg(long, value_name = "URL", default_value = DEFAULT_HOST_ENDPOINT)]
        endpoint: String,

        /// Toast title
        #[arg(long, default_value = "warcraft-notify")]
        title: String,

        /// Toast message
        #[arg(long, default_value = "Lok'tar ogar!")]
        message: String,

        /// Toast variant
        #[arg(long, value_enum, default_value = "info")]
        variant: ToastVariant,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SoundsAction {
    /// List sound filenames
    List {
        /// Restrict the listing to one faction
        #[arg(long, value_enum, value_name = "FACTION")]
        faction: Option<Faction>,

        /// Group filenames by the unit that speaks the line
        #[arg(long = "by-unit", action = ArgAction::SetTrue)]
        by_unit: bool,
    },

    /// Show per-faction entry counts
    Counts,
}

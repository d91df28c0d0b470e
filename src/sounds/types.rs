//! Type definitions for the sounds module

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A playable faction side. Entry lookup always happens against exactly one
/// of these; the configuration-only "both" value lives in [`FactionFilter`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[derive(clap::ValueEnum)]
pub enum Faction {
    Alliance,
    Horde,
}

/// User-facing faction selector: a single side, or no filter at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FactionFilter {
    Alliance,
    Horde,
    Both,
}

impl FactionFilter {
    /// The concrete factions this filter covers, in stable order.
    pub fn factions(&self) -> &'static [Faction] {
        match self {
            FactionFilter::Alliance => &[Faction::Alliance],
            FactionFilter::Horde => &[Faction::Horde],
            FactionFilter::Both => &[Faction::Alliance, Faction::Horde],
        }
    }
}

impl From<Faction> for FactionFilter {
    fn from(faction: Faction) -> Self {
        match faction {
            Faction::Alliance => FactionFilter::Alliance,
            Faction::Horde => FactionFilter::Horde,
        }
    }
}

/// Static sound asset record. Authored once in `entries.rs`, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundEntry {
    pub filename: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// A [`SoundEntry`] resolved against a base URL for downloading.
/// Created on demand by the builder; not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundFile {
    pub filename: String,
    pub url: String,
    pub description: String,
    pub faction: Faction,
    pub subdirectory: String,
}

/// Per-faction and total entry counts, derived from table lengths only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoundCounts {
    pub alliance: usize,
    pub horde: usize,
    pub total: usize,
}

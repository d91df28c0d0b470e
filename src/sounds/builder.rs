//! Download-list builder
//!
//! Pure functions over the static entry tables. Base URL policy is an
//! explicit per-faction table: alliance sounds are served from the
//! caller-supplied base, horde sounds are pinned to a fixed external host.
//! No URL validation happens here; a malformed base yields malformed URLs.

use crate::sounds::entries::{entries_for, ALLIANCE_ENTRIES, HORDE_ENTRIES};
use crate::sounds::types::{Faction, SoundCounts, SoundFile};

/// Default base URL for alliance sounds, used when the caller has none
pub const DEFAULT_ALLIANCE_BASE_URL: &str = "https://assets.warcraft-notify.dev/sounds";

/// Fixed asset host for horde sounds. The horde pack is mirrored separately
/// and never served from the caller's base URL.
pub const HORDE_BASE_URL: &str = "https://sounds.thehorde.dev/pack";

/// Per-faction base URL policy. `None` means "use the requested base".
const BASE_URL_OVERRIDES: &[(Faction, Option<&str>)] = &[
    (Faction::Alliance, None),
    (Faction::Horde, Some(HORDE_BASE_URL)),
];

/// Resolve the effective base URL for a faction.
///
/// The caller's `requested` base applies only where the policy table carries
/// no override; horde entries always resolve to [`HORDE_BASE_URL`].
pub fn base_url_for<'a>(faction: Faction, requested: &'a str) -> &'a str {
    BASE_URL_OVERRIDES
        .iter()
        .find(|(f, _)| *f == faction)
        .and_then(|(_, overridden)| *overridden)
        .unwrap_or(requested)
}

/// Build the download list for one faction.
///
/// One [`SoundFile`] per entry, with `url = base/path` and both `faction`
/// and `subdirectory` set from the faction.
pub fn sounds_to_download(faction: Faction, base_url: &str) -> Vec<SoundFile> {
    let base = base_url_for(faction, base_url);
    let base = base.trim_end_matches('/');

    entries_for(faction)
        .iter()
        .map(|entry| SoundFile {
            filename: entry.filename.to_string(),
            url: format!("{}/{}", base, entry.path),
            description: entry.description.to_string(),
            faction,
            subdirectory: faction.to_string(),
        })
        .collect()
}

/// Build the download list for both factions, alliance first.
///
/// `alliance_base_url` only affects alliance entries; the horde base is
/// pinned by the policy table.
pub fn all_sounds_to_download(alliance_base_url: &str) -> Vec<SoundFile> {
    let mut files = sounds_to_download(Faction::Alliance, alliance_base_url);
    files.extend(sounds_to_download(Faction::Horde, alliance_base_url));
    log::debug!("Built download list with {} sound files", files.len());
    files
}

/// All known filenames, or one faction's if a filter is given.
pub fn sound_file_list(faction: Option<Faction>) -> Vec<&'static str> {
    match faction {
        Some(faction) => entries_for(faction).iter().map(|e| e.filename).collect(),
        None => ALLIANCE_ENTRIES
            .iter()
            .chain(HORDE_ENTRIES.iter())
            .map(|e| e.filename)
            .collect(),
    }
}

/// Entry counts per faction, derived from table lengths only.
pub fn sound_counts() -> SoundCounts {
    let alliance = ALLIANCE_ENTRIES.len();
    let horde = HORDE_ENTRIES.len();
    SoundCounts {
        alliance,
        horde,
        total: alliance + horde,
    }
}

//! Public API for the sounds module
//!
//! External modules should import from here rather than directly from the
//! internal data and builder modules.

pub use crate::sounds::builder::{
    all_sounds_to_download, base_url_for, sound_counts, sound_file_list, sounds_to_download,
    DEFAULT_ALLIANCE_BASE_URL, HORDE_BASE_URL,
};
pub use crate::sounds::catalog::{units_for, UnitSounds};
pub use crate::sounds::types::{Faction, FactionFilter, SoundCounts, SoundEntry, SoundFile};

/// The flat entry table for one faction.
///
/// This is the authoritative table; the categorized catalog only references
/// filenames that appear here.
pub fn entries(faction: Faction) -> &'static [SoundEntry] {
    crate::sounds::entries::entries_for(faction)
}

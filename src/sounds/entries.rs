//! Flat per-faction sound entry tables
//!
//! These tables are the authoritative input for the download-list builder.
//! The categorized view in `catalog.rs` must stay a subset of them; a test
//! enforces that.

use crate::sounds::types::{Faction, SoundEntry};

pub(crate) const ALLIANCE_ENTRIES: &[SoundEntry] = &[
    SoundEntry {
        filename: "peasant-ready-to-work.mp3",
        path: "alliance/peasant-ready-to-work.mp3",
        description: "Peasant: \"Ready to work.\"",
    },
    SoundEntry {
        filename: "peasant-jobs-done.mp3",
        path: "alliance/peasant-jobs-done.mp3",
        description: "Peasant: \"Job's done!\"",
    },
    SoundEntry {
        filename: "peasant-more-work.mp3",
        path: "alliance/peasant-more-work.mp3",
        description: "Peasant: \"More work?\"",
    },
    SoundEntry {
        filename: "footman-yes-milord.mp3",
        path: "alliance/footman-yes-milord.mp3",
        description: "Footman: \"Yes, milord.\"",
    },
    SoundEntry {
        filename: "footman-ready-for-action.mp3",
        path: "alliance/footman-ready-for-action.mp3",
        description: "Footman: \"Ready for action.\"",
    },
    SoundEntry {
        filename: "footman-for-the-alliance.mp3",
        path: "alliance/footman-for-the-alliance.mp3",
        description: "Footman: \"For the Alliance!\"",
    },
    SoundEntry {
        filename: "knight-at-once-sire.mp3",
        path: "alliance/knight-at-once-sire.mp3",
        description: "Knight: \"At once, sire.\"",
    },
    SoundEntry {
        filename: "knight-for-the-king.mp3",
        path: "alliance/knight-for-the-king.mp3",
        description: "Knight: \"For the king!\"",
    },
    SoundEntry {
        filename: "rifleman-aye-that-i-can-do.mp3",
        path: "alliance/rifleman-aye-that-i-can-do.mp3",
        description: "Rifleman: \"Aye, that I can do.\"",
    },
    SoundEntry {
        filename: "rifleman-locked-and-loaded.mp3",
        path: "alliance/rifleman-locked-and-loaded.mp3",
        description: "Rifleman: \"Locked and loaded.\"",
    },
    SoundEntry {
        filename: "priest-light-be-with-you.mp3",
        path: "alliance/priest-light-be-with-you.mp3",
        description: "Priest: \"Light be with you.\"",
    },
    SoundEntry {
        filename: "priest-my-prayers-answered.mp3",
        path: "alliance/priest-my-prayers-answered.mp3",
        description: "Priest: \"My prayers have been answered!\"",
    },
];

pub(crate) const HORDE_ENTRIES: &[SoundEntry] = &[
    SoundEntry {
        filename: "peon-ready-to-work.mp3",
        path: "horde/peon-ready-to-work.mp3",
        description: "Peon: \"Ready to work.\"",
    },
    SoundEntry {
        filename: "peon-work-complete.mp3",
        path: "horde/peon-work-complete.mp3",
        description: "Peon: \"Work complete.\"",
    },
    SoundEntry {
        filename: "peon-okie-dokie.mp3",
        path: "horde/peon-okie-dokie.mp3",
        description: "Peon: \"Okie dokie.\"",
    },
    SoundEntry {
        filename: "peon-something-need-doing.mp3",
        path: "horde/peon-something-need-doing.mp3",
        description: "Peon: \"Something need doing?\"",
    },
    SoundEntry {
        filename: "grunt-zug-zug.mp3",
        path: "horde/grunt-zug-zug.mp3",
        description: "Grunt: \"Zug zug.\"",
    },
    SoundEntry {
        filename: "grunt-dabu.mp3",
        path: "horde/grunt-dabu.mp3",
        description: "Grunt: \"Dabu.\"",
    },
    SoundEntry {
        filename: "grunt-for-the-horde.mp3",
        path: "horde/grunt-for-the-horde.mp3",
        description: "Grunt: \"For the Horde!\"",
    },
    SoundEntry {
        filename: "headhunter-i-hear-and-obey.mp3",
        path: "horde/headhunter-i-hear-and-obey.mp3",
        description: "Troll Headhunter: \"I hear and obey.\"",
    },
    SoundEntry {
        filename: "shaman-storm-earth-and-fire.mp3",
        path: "horde/shaman-storm-earth-and-fire.mp3",
        description: "Shaman: \"Storm, earth and fire, heed my call!\"",
    },
    SoundEntry {
        filename: "tauren-walk-with-earth-mother.mp3",
        path: "horde/tauren-walk-with-earth-mother.mp3",
        description: "Tauren: \"Walk with the Earth Mother.\"",
    },
    SoundEntry {
        filename: "sapper-ready-to-blow.mp3",
        path: "horde/sapper-ready-to-blow.mp3",
        description: "Goblin Sapper: \"Ready to blow!\"",
    },
    SoundEntry {
        filename: "sapper-kaboom.mp3",
        path: "horde/sapper-kaboom.mp3",
        description: "Goblin Sapper: \"KABOOM!\"",
    },
];

/// The flat entry table for one faction.
pub(crate) fn entries_for(faction: Faction) -> &'static [SoundEntry] {
    match faction {
        Faction::Alliance => ALLIANCE_ENTRIES,
        Faction::Horde => HORDE_ENTRIES,
    }
}

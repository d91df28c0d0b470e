//! Categorized sound catalog
//!
//! Browsing view of the entry tables, grouped by the unit that speaks the
//! line. The flat tables in `entries.rs` stay authoritative; this view only
//! references their filenames.

use crate::sounds::types::Faction;

/// Unit name plus the filenames of its lines.
pub type UnitSounds = (&'static str, &'static [&'static str]);

pub(crate) const ALLIANCE_UNITS: &[UnitSounds] = &[
    (
        "Peasant",
        &[
            "peasant-ready-to-work.mp3",
            "peasant-jobs-done.mp3",
            "peasant-more-work.mp3",
        ],
    ),
    (
        "Footman",
        &[
            "footman-yes-milord.mp3",
            "footman-ready-for-action.mp3",
            "footman-for-the-alliance.mp3",
        ],
    ),
    (
        "Knight",
        &["knight-at-once-sire.mp3", "knight-for-the-king.mp3"],
    ),
    (
        "Rifleman",
        &[
            "rifleman-aye-that-i-can-do.mp3",
            "rifleman-locked-and-loaded.mp3",
        ],
    ),
    (
        "Priest",
        &[
            "priest-light-be-with-you.mp3",
            "priest-my-prayers-answered.mp3",
        ],
    ),
];

pub(crate) const HORDE_UNITS: &[UnitSounds] = &[
    (
        "Peon",
        &[
            "peon-ready-to-work.mp3",
            "peon-work-complete.mp3",
            "peon-okie-dokie.mp3",
            "peon-something-need-doing.mp3",
        ],
    ),
    (
        "Grunt",
        &[
            "grunt-zug-zug.mp3",
            "grunt-dabu.mp3",
            "grunt-for-the-horde.mp3",
        ],
    ),
    ("Troll Headhunter", &["headhunter-i-hear-and-obey.mp3"]),
    ("Shaman", &["shaman-storm-earth-and-fire.mp3"]),
    ("Tauren", &["tauren-walk-with-earth-mother.mp3"]),
    (
        "Goblin Sapper",
        &["sapper-ready-to-blow.mp3", "sapper-kaboom.mp3"],
    ),
];

/// The categorized catalog for one faction.
pub fn units_for(faction: Faction) -> &'static [UnitSounds] {
    match faction {
        Faction::Alliance => ALLIANCE_UNITS,
        Faction::Horde => HORDE_UNITS,
    }
}

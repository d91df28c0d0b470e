//! CLI display utilities for formatting output

use colored::Colorize;
use prettytable::{row, Table};

use crate::sounds::api::{units_for, Faction, SoundCounts};

/// Print the per-faction entry counts as a table.
pub fn display_counts(counts: &SoundCounts) {
    let mut table = Table::new();
    table.add_row(row!["Faction", "Sounds"]);
    table.add_row(row!["alliance", counts.alliance]);
    table.add_row(row!["horde", counts.horde]);
    table.add_row(row!["total", counts.total]);
    table.printstd();
}

/// Print a flat filename listing, one per line.
pub fn display_file_list(filenames: &[&str]) {
    for filename in filenames {
        println!("{}", filename);
    }
}

/// Print the categorized catalog for the given factions.
pub fn display_units(factions: &[Faction], use_color: bool) {
    for faction in factions {
        let heading = format!("== {} ==", faction);
        if use_color {
            println!("{}", heading.bold());
        } else {
            println!("{}", heading);
        }
        for (unit, filenames) in units_for(*faction) {
            println!("  {}", unit);
            for filename in *filenames {
                println!("    {}", filename);
            }
        }
    }
}

//! Tests for the categorized catalog view

use std::collections::HashSet;

use crate::sounds::api::{entries, units_for, Faction};

#[test]
fn test_catalog_filenames_exist_in_entry_tables() {
    for faction in [Faction::Alliance, Faction::Horde] {
        let known: HashSet<_> = entries(faction).iter().map(|e| e.filename).collect();
        for (unit, filenames) in units_for(faction) {
            for filename in *filenames {
                assert!(
                    known.contains(filename),
                    "catalog entry {} for unit {} missing from {} entry table",
                    filename,
                    unit,
                    faction
                );
            }
        }
    }
}

#[test]
fn test_catalog_has_no_duplicate_filenames() {
    for faction in [Faction::Alliance, Faction::Horde] {
        let mut seen = HashSet::new();
        for (_, filenames) in units_for(faction) {
            for filename in *filenames {
                assert!(seen.insert(filename), "{} listed twice", filename);
            }
        }
    }
}

#[test]
fn test_every_unit_has_at_least_one_sound() {
    for faction in [Faction::Alliance, Faction::Horde] {
        for (unit, filenames) in units_for(faction) {
            assert!(!filenames.is_empty(), "unit {} has no sounds", unit);
        }
    }
}

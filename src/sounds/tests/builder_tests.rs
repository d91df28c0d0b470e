//! Tests for the download-list builder

use std::collections::HashSet;

use crate::sounds::api::{
    all_sounds_to_download, base_url_for, entries, sound_counts, sound_file_list,
    sounds_to_download, Faction, HORDE_BASE_URL,
};

#[test]
fn test_sound_file_list_matches_entry_tables() {
    for faction in [Faction::Alliance, Faction::Horde] {
        let list = sound_file_list(Some(faction));
        assert_eq!(list.len(), entries(faction).len());

        // Filenames are unique within a faction
        let unique: HashSet<_> = list.iter().collect();
        assert_eq!(unique.len(), list.len(), "{} filenames not unique", faction);
    }

    let all = sound_file_list(None);
    assert_eq!(
        all.len(),
        entries(Faction::Alliance).len() + entries(Faction::Horde).len()
    );
}

#[test]
fn test_sound_counts_total_is_sum_of_factions() {
    let counts = sound_counts();
    assert_eq!(counts.total, counts.alliance + counts.horde);
    assert_eq!(counts.alliance, entries(Faction::Alliance).len());
    assert_eq!(counts.horde, entries(Faction::Horde).len());
}

#[test]
fn test_horde_base_url_is_pinned() {
    for requested in ["https://example.com/sounds", "not-a-url", ""] {
        assert_eq!(base_url_for(Faction::Horde, requested), HORDE_BASE_URL);

        let files = sounds_to_download(Faction::Horde, requested);
        assert!(!files.is_empty());
        for file in &files {
            assert!(
                file.url.starts_with(HORDE_BASE_URL),
                "horde url {} not rooted at fixed host",
                file.url
            );
        }
    }
}

#[test]
fn test_alliance_uses_requested_base_url() {
    assert_eq!(
        base_url_for(Faction::Alliance, "https://example.com"),
        "https://example.com"
    );

    let files = sounds_to_download(Faction::Alliance, "https://example.com/assets/");
    for file in &files {
        // Trailing slash on the base must not double up
        assert!(file.url.starts_with("https://example.com/assets/alliance/"));
        assert!(!file.url.contains("//alliance"));
    }
}

#[test]
fn test_all_sounds_concatenates_both_factions() {
    let files = all_sounds_to_download("https://example.com");
    let counts = sound_counts();
    assert_eq!(files.len(), counts.total);

    let alliance = files
        .iter()
        .filter(|f| f.faction == Faction::Alliance)
        .count();
    let horde = files.iter().filter(|f| f.faction == Faction::Horde).count();
    assert_eq!(alliance, counts.alliance);
    assert_eq!(horde, counts.horde);
}

#[test]
fn test_sound_file_fields_derived_from_entry() {
    let files = sounds_to_download(Faction::Alliance, "https://example.com");
    let first = &files[0];
    let entry = &entries(Faction::Alliance)[0];

    assert_eq!(first.filename, entry.filename);
    assert_eq!(first.description, entry.description);
    assert_eq!(first.url, format!("https://example.com/{}", entry.path));
    assert_eq!(first.subdirectory, "alliance");
}

#[test]
fn test_no_validation_of_malformed_bases() {
    // Builder contract: garbage in, garbage out, no panic
    let files = sounds_to_download(Faction::Alliance, "::not a url::");
    assert!(files[0].url.starts_with("::not a url::/"));
}

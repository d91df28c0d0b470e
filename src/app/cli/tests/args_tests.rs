//! CLI argument parsing tests

use clap::Parser;

use crate::app::cli::args::{Args, Command, SoundsAction};
use crate::notify::api::ToastVariant;
use crate::sounds::api::{Faction, DEFAULT_ALLIANCE_BASE_URL};

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(args).expect("arguments should parse")
}

#[test]
fn test_sounds_counts_parses() {
    let args = parse(&["warcraft-notify", "sounds", "counts"]);
    assert!(matches!(
        args.command,
        Command::Sounds {
            action: SoundsAction::Counts
        }
    ));
}

#[test]
fn test_sounds_list_with_faction() {
    let args = parse(&["warcraft-notify", "sounds", "list", "--faction", "horde"]);
    match args.command {
        Command::Sounds {
            action: SoundsAction::List { faction, by_unit },
        } => {
            assert_eq!(faction, Some(Faction::Horde));
            assert!(!by_unit);
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_download_defaults() {
    let args = parse(&["warcraft-notify", "download"]);
    match args.command {
        Command::Download {
            base_url,
            faction,
            dest,
        } => {
            assert_eq!(base_url, DEFAULT_ALLIANCE_BASE_URL);
            assert_eq!(faction, None);
            assert_eq!(dest, None);
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_banner_requires_text() {
    assert!(Args::try_parse_from(["warcraft-notify", "banner"]).is_err());

    let args = parse(&["warcraft-notify", "banner", "zug", "zug"]);
    match args.command {
        Command::Banner { text } => assert_eq!(text, vec!["zug", "zug"]),
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_validate_requires_both_files() {
    assert!(
        Args::try_parse_from(["warcraft-notify", "validate", "--schema", "s.json"]).is_err()
    );
}

#[test]
fn test_toast_defaults() {
    let args = parse(&["warcraft-notify", "toast"]);
    match args.command {
        Command::Toast {
            endpoint, variant, ..
        } => {
            assert_eq!(endpoint, "http://127.0.0.1:7777");
            assert_eq!(variant, ToastVariant::Info);
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_invalid_faction_rejected() {
    assert!(Args::try_parse_from([
        "warcraft-notify",
        "sounds",
        "list",
        "--faction",
        "pandaren"
    ])
    .is_err());
}

#[test]
fn test_global_log_flags() {
    let args = parse(&[
        "warcraft-notify",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "sounds",
        "counts",
    ]);
    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert_eq!(args.log_format.as_deref(), Some("json"));
}

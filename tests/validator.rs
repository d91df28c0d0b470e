//! Exit-code contract tests for the schema validator

use std::io::Write;
use std::path::PathBuf;

use warcraft_notify::app::startup::run_validate;

fn temp_json(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn bundled_schema() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema/config.schema.json")
}

fn bundled_example() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema/config.example.json")
}

#[test]
fn test_bundled_example_conforms() {
    assert_eq!(run_validate(&bundled_schema(), &bundled_example()), 0);
}

#[test]
fn test_nonconforming_example_exits_one() {
    let bad = temp_json(r#"{"warcraft-notify": {"faction": "scourge"}}"#);
    assert_eq!(run_validate(&bundled_schema(), bad.path()), 1);
}

#[test]
fn test_unreadable_file_exits_two() {
    let missing = PathBuf::from("/no/such/schema.json");
    assert_eq!(run_validate(&missing, &bundled_example()), 2);
}

#[test]
fn test_unparsable_json_exits_two() {
    let broken = temp_json("{this is not json");
    assert_eq!(run_validate(&bundled_schema(), broken.path()), 2);
    assert_eq!(run_validate(broken.path(), &bundled_example()), 2);
}

use salesdesk_core::{AppConfig, ConfigError};
use std::fs;
use std::path::PathBuf;

#[test]
fn from_file_loads_database_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("salesdesk.json");
    fs::write(
        &path,
        r#"{ "database": { "path": "salesdesk.db" } }"#,
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.database.path, PathBuf::from("salesdesk.db"));
    assert_eq!(config.logging.level, None);
}

#[test]
fn missing_file_reports_io_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = AppConfig::from_file(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_json_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

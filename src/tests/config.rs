use super::{read_optional, Config};
use crate::error::Error;
use crate::formats;
use crate::formats::pattern::DEFAULT_PATTERN;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults_from_empty_file() {
    let config = Config::from_toml("").unwrap();

    assert_eq!(config.heading_pattern, DEFAULT_PATTERN);
    assert_eq!(config.whole_group, "whole");
    assert_eq!(config.last_group, "last");
    assert_eq!(config.format, "plain");
    assert!(config.numbering_enabled);
    assert!(!config.renumber_on_save);
    assert_eq!(config.file_extensions, vec!["md", "txt"]);
}

#[test]
fn test_overrides() {
    let config = Config::from_toml(
        r#"
format = "markdown"
renumber_on_save = true
file_extensions = ["org"]
"#,
    )
    .unwrap();

    assert_eq!(config.format, "markdown");
    assert!(config.renumber_on_save);
    assert_eq!(config.file_extensions, vec!["org"]);
    assert_eq!(config.whole_group, "whole");
}

#[test]
fn test_load_explicit_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "numbering_enabled = false").unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert!(!config.numbering_enabled);
}

#[test]
fn test_load_missing_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(Config::load(Some(&path)), Err(Error::Io { .. })));
}

#[test]
fn test_missing_optional_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();

    let contents = read_optional(&dir.path().join("outnum.toml")).unwrap();

    assert_eq!(contents, "");
}

#[test]
fn test_unreadable_optional_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, b'\n']).unwrap();

    assert!(matches!(read_optional(file.path()), Err(Error::Io { .. })));
}

#[test]
fn test_optional_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(read_optional(dir.path()), Err(Error::Io { .. })));
}

#[test]
fn test_unknown_format_is_rejected() {
    let mut config = Config::from_toml("").unwrap();
    config.format = "org".to_string();

    assert!(matches!(
        formats::from_config(&config),
        Err(Error::UnknownFormat(name)) if name == "org"
    ));
}

#[test]
fn test_pattern_without_whole_group_is_rejected() {
    let mut config = Config::from_toml("").unwrap();
    config.whole_group = "number".to_string();

    assert!(matches!(
        formats::from_config(&config),
        Err(Error::MissingGroup(name)) if name == "number"
    ));
}

#[test]
fn test_builds_each_format() {
    let mut config = Config::from_toml("").unwrap();
    assert!(formats::from_config(&config).is_ok());

    config.format = "markdown".to_string();
    assert!(formats::from_config(&config).is_ok());
}

use std::fs;

use cheesehome::Error;
use cheesehome::config::Config;

#[test]
fn test_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = Config::load_from(&dir.path().join("cheesehome.toml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cheesehome.toml");
    fs::write(&path, "verification_delay_ms = 0\nwindow_width = 1280\n").unwrap();

    let config = Config::load_from(&path).unwrap().expect("file exists");
    assert_eq!(config.verification_delay_ms, 0);
    assert_eq!(config.window_width, 1280);
    assert_eq!(config.code_length, 6);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cheesehome.toml");
    fs::write(&path, "code_length = [").unwrap();
    assert!(matches!(Config::load_from(&path), Err(Error::ConfigParse(_))));
}

#[test]
fn test_directory_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::load_from(dir.path()),
        Err(Error::ConfigRead { .. })
    ));
}

#[test]
fn test_load_falls_back_on_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cheesehome.toml");
    fs::write(&path, "code_length = [").unwrap();
    assert_eq!(Config::load_with(Some(path)), Config::default());
}

#[test]
fn test_load_without_path_is_default() {
    assert_eq!(Config::load_with(None), Config::default());
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert_eq!(Config::load_with(Some(missing)), Config::default());
}

#[test]
fn test_load_with_override_path_reads_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "code_length = 4\n").unwrap();

    let resolved = Config::resolve_path(Some(path.clone().into_os_string()));
    assert_eq!(resolved.as_deref(), Some(path.as_path()));
    assert_eq!(Config::load_with(resolved).code_length, 4);
}

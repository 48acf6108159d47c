//! Configuration loading tests

use jernau::config::ServerConfig;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_config_from_file() {
    let file = write_config(
        r#"
[server]
name = "Jernau"
version = "1.0.0"
description = "Technical research assistant"

[workspace]
root = "/srv/jernau/workspace"
"#,
    );

    let config = ServerConfig::load_from_file(file.path()).unwrap();

    assert_eq!(config.server.name, "Jernau");
    assert_eq!(config.server.version, "1.0.0");
    assert_eq!(config.workspace.root, PathBuf::from("/srv/jernau/workspace"));
}

#[test]
fn test_load_minimal_config_applies_defaults() {
    let file = write_config(
        r#"
[workspace]
root = "/srv/jernau/workspace"
"#,
    );

    let config = ServerConfig::load_from_file(file.path()).unwrap();

    assert_eq!(config.server.name, "Jernau");
    assert!(!config.server.description.is_empty());
}

#[test]
fn test_load_rejects_relative_root() {
    let file = write_config(
        r#"
[workspace]
root = "not/absolute"
"#,
    );

    assert!(ServerConfig::load_from_file(file.path()).is_err());
}

#[test]
fn test_load_rejects_malformed_toml() {
    let file = write_config("[workspace\nroot = ");
    assert!(ServerConfig::load_from_file(file.path()).is_err());
}

use mdmeta_core::config::{ConfigError, ConfigLoader};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn missing_explicit_file_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("nope/config.toml");
    let err = ConfigLoader::load(Some(&cfg_path)).unwrap_err();
    match err {
        ConfigError::NotFound(_) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn bad_version_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 2\n");

    let err = ConfigLoader::load(Some(&cfg_path)).unwrap_err();
    match err {
        ConfigError::BadVersion(2) => {}
        other => panic!("expected BadVersion(2), got {other:?}"),
    }
}

#[test]
fn invalid_toml_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = \n");

    let err = ConfigLoader::load(Some(&cfg_path)).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_, _)), "got {err:?}");
}

#[test]
fn out_of_range_temperature_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n[generation]\ntemperature = 3.5\n");

    let err = ConfigLoader::load(Some(&cfg_path)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTemperature(t) if t == 3.5));
}

#[test]
fn minimal_file_uses_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n");

    let rc = ConfigLoader::load(Some(&cfg_path)).unwrap();
    assert_eq!(rc.source.as_deref(), Some(cfg_path.as_path()));
    assert_eq!(rc.generation.model, "gpt-4o-2024-05-13");
    assert_eq!(rc.generation.temperature, 0.7);
    assert_eq!(rc.generation.base_url, "https://api.openai.com/v1");
    assert_eq!(rc.generation.api_key_env, "OPENAI_API_KEY");
    assert_eq!(rc.generation.timeout_secs, 60);
    assert_eq!(rc.logging.level, "warn");
    assert!(rc.logging.file.is_none());
}

#[test]
fn full_file_is_resolved() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let log_path = tmp.path().join("logs/mdmeta.log");
    let toml = format!(
        r#"
version = 1

[generation]
model = "gpt-4o-mini"
temperature = 0.2
base_url = "http://localhost:8080/v1"
api_key_env = "MY_KEY"
timeout_secs = 5

[logging]
level = "debug"
file_level = "trace"
file = "{}"
"#,
        log_path.display()
    );
    write_file(&cfg_path, &toml);

    let rc = ConfigLoader::load(Some(&cfg_path)).unwrap();
    assert_eq!(rc.generation.model, "gpt-4o-mini");
    assert_eq!(rc.generation.temperature, 0.2);
    assert_eq!(rc.generation.base_url, "http://localhost:8080/v1");
    assert_eq!(rc.generation.api_key_env, "MY_KEY");
    assert_eq!(rc.generation.timeout_secs, 5);
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
    assert_eq!(rc.logging.file, Some(log_path));
}
